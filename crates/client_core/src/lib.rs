use async_trait::async_trait;
use shared::{domain::PortfolioSnapshot, error::LoadError};
use sheet_data::{fallback_snapshot, parse_grid};
use tracing::{info, warn};

pub mod sheets;

pub use sheets::{decode_values, SheetsClient, SheetsEndpoint, DEFAULT_API_BASE, DEFAULT_RANGE};

/// Anything that can hand back the raw value grid of the portfolio sheet.
#[async_trait]
pub trait SheetSource: Send + Sync {
    async fn fetch_grid(&self) -> Result<Vec<Vec<String>>, LoadError>;
}

/// Produces the session snapshot from a [`SheetSource`].
///
/// [`PortfolioLoader::load`] never fails: every retrieval or parse problem is
/// logged and answered with [`fallback_snapshot`]. One fetch per call, no retries.
pub struct PortfolioLoader<S: SheetSource> {
    source: S,
}

impl<S: SheetSource> PortfolioLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetches and parses the grid, surfacing the first failure.
    pub async fn try_load(&self) -> Result<PortfolioSnapshot, LoadError> {
        let grid = self.source.fetch_grid().await?;
        let snapshot = parse_grid(&grid)?;
        Ok(snapshot)
    }

    pub async fn load(&self) -> PortfolioSnapshot {
        match self.try_load().await {
            Ok(snapshot) => {
                info!(
                    projects = snapshot.projects.len(),
                    about_fields = snapshot.about.len(),
                    "portfolio data loaded"
                );
                snapshot
            }
            Err(err) => {
                warn!(
                    error = %err,
                    category = ?err.category(),
                    "failed to load portfolio data; using built-in fallback"
                );
                fallback_snapshot()
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
