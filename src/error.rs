//! Crate-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::TreeError;

/// Top-level error: tree errors plus settings loading failures.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("config error: {message}")]
    Config { message: String },
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result type for crate-level operations.
pub type Result<T> = std::result::Result<T, Error>;
