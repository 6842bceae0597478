//! Error types for plantag.
//!
//! Library crates use [`PlantagError`] via `thiserror`.
//! The CLI app wraps this with `color-eyre` for rich diagnostics.
//!
//! Note that the schedule *encoder* is deliberately total and never returns
//! an error: malformed schedule text degrades by omission. Errors only arise
//! when decoding tag strings or doing file I/O at the application edge.

use std::path::PathBuf;

/// Top-level error type for all plantag operations.
#[derive(Debug, thiserror::Error)]
pub enum PlantagError {
    /// A tag string could not be decoded back into schedule rules.
    #[error("decode error: {message}")]
    Decode { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PlantagError>;

impl PlantagError {
    /// Create a decode error from any displayable message.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = PlantagError::decode("tag group 'ZZ' is not a weekday code");
        assert_eq!(
            err.to_string(),
            "decode error: tag group 'ZZ' is not a weekday code"
        );

        let err = PlantagError::io(
            "schedules.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("schedules.txt"));
    }
}
