use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced at the configuration boundary.
///
/// Layout, hit-testing and animation are total functions and never fail;
/// only setters and config loading report errors.
#[derive(Debug, Error)]
pub enum StripError {
    #[error("indicator height must be > 0, got {0}")]
    InvalidIndicatorHeight(i32),

    #[error("config i/o failed for {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}")]
    Config {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("failed to serialize config")]
    Serialize(#[source] ron::Error),
}

pub type Result<T> = std::result::Result<T, StripError>;
