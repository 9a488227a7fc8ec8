//! Custom error types for rustarxiv.
//!
//! Every stage returns `Result<T, HarvestError>`. The driver decides which
//! variants are recoverable (a skipped topic, an empty `content`) and which
//! end the run.

use thiserror::Error;

/// Main error type for rustarxiv operations.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// Network/HTTP request error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Remote host answered with a non-success status
    #[error("API error: {code} - {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message
        message: String,
    },

    /// Atom feed could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// PDF could not be opened or read
    #[error("PDF error: {0}")]
    Pdf(String),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// A feed entry lacks a field every paper needs
    #[error("Entry {entry} is missing required field `{field}`")]
    MissingField {
        /// Name of the absent field
        field: &'static str,
        /// Identifier of the offending entry, or a placeholder when the id itself is absent
        entry: String,
    },
}

impl From<lopdf::Error> for HarvestError {
    fn from(e: lopdf::Error) -> Self {
        HarvestError::Pdf(e.to_string())
    }
}

/// Result type alias using `HarvestError`
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Extension trait for presence checks on optional feed fields
pub trait OptionExt<T> {
    /// Convert Option to Result with a missing-field error
    fn ok_or_missing(self, field: &'static str, entry: &str) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_missing(self, field: &'static str, entry: &str) -> Result<T> {
        self.ok_or_else(|| HarvestError::MissingField {
            field,
            entry: entry.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_or_missing() {
        let present: Option<&str> = Some("A Study");
        assert_eq!(present.ok_or_missing("title", "x").ok(), Some("A Study"));

        let absent: Option<&str> = None;
        let err = absent
            .ok_or_missing("title", "http://arxiv.org/abs/1")
            .expect_err("absent value must fail");
        assert!(matches!(err, HarvestError::MissingField { field: "title", .. }));
        assert!(err.to_string().contains("http://arxiv.org/abs/1"));
    }

    #[test]
    fn test_api_error_display() {
        let err = HarvestError::Api {
            code: 503,
            message: "arXiv API error: 503 Service Unavailable".to_string(),
        };
        assert!(err.to_string().contains("503"));
    }
}
