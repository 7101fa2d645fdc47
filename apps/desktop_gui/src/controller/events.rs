//! Backend-to-UI events and load error classification for the status line.

use shared::{domain::JobRecord, error::LoadError};

pub enum UiEvent {
    Info(String),
    JobsLoaded(Result<Vec<JobRecord>, LoadError>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Validation,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    message: String,
}

impl UiError {
    pub fn from_load_error(err: &LoadError) -> Self {
        let category = match err {
            LoadError::Unreachable(_) => UiErrorCategory::Transport,
            LoadError::Malformed(_) | LoadError::MissingField { .. } => {
                UiErrorCategory::Validation
            }
        };
        Self {
            category,
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Status line text; a failed load needs a restart to retry.
    pub fn status_text(&self) -> String {
        let label = match self.category {
            UiErrorCategory::Transport => "Job source unreachable",
            UiErrorCategory::Validation => "Job data is malformed",
        };
        format!("{label}: {}. Restart to retry.", self.message)
    }
}
