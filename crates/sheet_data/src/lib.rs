//! Converts a spreadsheet value grid into a [`PortfolioSnapshot`] and supplies the
//! built-in snapshot used when no usable grid is available.
//!
//! [`PortfolioSnapshot`]: shared::domain::PortfolioSnapshot

pub mod fallback;
pub mod parser;

pub use fallback::fallback_snapshot;
pub use parser::{parse_about, parse_grid, ABOUT_END, ABOUT_START};
