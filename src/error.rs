use std::path::PathBuf;

use crate::game::{COLS, ROWS};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur while decoding a move request.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("unknown color '{0}'")]
    UnknownColor(String),

    #[error("board must be {ROWS} rows of {COLS} cells")]
    MalformedBoard,
}

/// Errors surfaced by the worker pool.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("search worker failed before returning a result")]
    JobFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("pool.queue_capacity must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: pool.queue_capacity must be > 0"
        );
    }

    #[test]
    fn test_request_error_display() {
        let err = RequestError::UnknownColor("green".to_string());
        assert_eq!(err.to_string(), "unknown color 'green'");

        let err = RequestError::MalformedBoard;
        assert_eq!(err.to_string(), "board must be 6 rows of 7 cells");
    }

    #[test]
    fn test_dispatch_error_display() {
        let err = DispatchError::JobFailed;
        assert_eq!(
            err.to_string(),
            "search worker failed before returning a result"
        );
    }
}
