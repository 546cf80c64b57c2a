// File: crates/scatter-core/src/error.rs
// Summary: Error type shared by configuration, generation and output.

use thiserror::Error;

/// Result alias using [`ChartError`].
pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Error, Debug)]
pub enum ChartError {
    /// A configuration value failed validation.
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing the output document failed.
    #[error("rendering error: {0}")]
    Render(String),
}

impl ChartError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig { field, reason: reason.into() }
    }
}

impl From<std::fmt::Error> for ChartError {
    fn from(e: std::fmt::Error) -> Self {
        Self::Render(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_names_the_field() {
        let err = ChartError::invalid("padding", "must be smaller than width / 2");
        let msg = err.to_string();
        assert!(msg.contains("padding"));
        assert!(msg.contains("width / 2"));
    }
}
