//! Errors raised by the conformance harness.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A conformance violation.
///
/// Validation stops at the first violation. The error names the kind of
/// object that was being checked, what was wrong, and the offending value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{subject}: {message} (got {value})")]
pub struct ValidationError {
    /// Interface name of the object being validated, e.g. `"VerticalCS"`.
    pub subject: String,
    /// Description of the violated rule.
    pub message: String,
    /// Rendering of the offending value.
    pub value: String,
}

impl ValidationError {
    /// Create a violation; `value` is rendered with its `Debug` form.
    pub fn new(subject: impl Into<String>, message: impl Into<String>, value: impl fmt::Debug) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            value: format!("{value:?}"),
        }
    }
}

/// Fail with a [`ValidationError`] unless `condition` holds.
pub(crate) fn ensure(
    condition: bool,
    subject: &str,
    message: &str,
    value: impl fmt::Debug,
) -> Result<(), ValidationError> {
    if condition {
        Ok(())
    } else {
        Err(ValidationError::new(subject, message, value))
    }
}

/// Error loading a scan or validation configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config {path}: {source}")]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML for the expected structure.
    #[error("invalid config {path}: {reason}")]
    Parse {
        /// Path of the configuration file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_value() {
        let err = ValidationError::new("VerticalCS", "axis count out of range", 2usize);
        assert_eq!(err.to_string(), "VerticalCS: axis count out of range (got 2)");
    }

    #[test]
    fn test_ensure() {
        assert!(ensure(true, "X", "never", 0).is_ok());
        let err = ensure(false, "X", "always", "v").unwrap_err();
        assert_eq!(err.value, "\"v\"");
    }
}
