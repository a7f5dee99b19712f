//! Error types for the bot core.

use thiserror::Error;

/// Top-level error for dbot (bot transport, config, IO).
#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts_into_dbot_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: DbotError = io.into();
        assert_eq!(err.to_string(), "IO error: missing");
    }
}
