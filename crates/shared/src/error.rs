use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Retrieval,
    Response,
    MalformedPayload,
    InsufficientData,
}

/// Grid shapes the parser refuses to turn into a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("grid has {rows} row(s); a header row and at least one data row are required")]
    InsufficientData { rows: usize },
    #[error("grid has {rows} row(s) but none of them describe a project")]
    NoProjects { rows: usize },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to reach data source: {0}")]
    Retrieval(String),
    #[error("data source answered with status {status}")]
    Response { status: u16 },
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl LoadError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Retrieval(_) => ErrorCategory::Retrieval,
            Self::Response { .. } => ErrorCategory::Response,
            Self::MalformedPayload(_) => ErrorCategory::MalformedPayload,
            Self::Parse(_) => ErrorCategory::InsufficientData,
        }
    }
}
