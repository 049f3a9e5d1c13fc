use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("RtlGetVersion failed with NTSTATUS {0:#010x}")]
    Status(i32),

    #[error("Host version query is not supported on {0}")]
    Unsupported(&'static str),

    #[error("Version query returned no data")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid version string {input:?}: {reason}")]
pub struct ParseError {
    pub input: String,
    pub reason: String,
}

impl ParseError {
    pub fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Release index {index} is outside the catalog (1..={len})")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SupportError {
    #[error("Failed to query current version: {0}")]
    Query(#[from] QueryError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Lookup(#[from] CatalogError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Current version cache lock poisoned")]
    LockPoisoned,
}
