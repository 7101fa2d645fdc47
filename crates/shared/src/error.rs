use thiserror::Error;

use crate::domain::JobId;

/// Failure to obtain or decode the job collection. Terminal for the
/// lifetime of the view that requested the load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Error fetching jobs: {0}")]
    Unreachable(String),
    #[error("malformed job payload: {0}")]
    Malformed(String),
    #[error("job record {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },
}

impl LoadError {
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Unreachable(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no job with id {0} in the store")]
pub struct LookupMiss(pub JobId);
