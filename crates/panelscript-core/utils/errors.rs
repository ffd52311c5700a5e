//! Core error types for cross-module error handling
//!
//! Provides the main `CoreError` enum that wraps error conditions from the
//! different modules in the crate. Designed for easy error propagation and
//! conversion.
//!
//! # Error Philosophy
//!
//! - Use `thiserror` for structured error handling (no `anyhow` bloat)
//! - Prefer graceful degradation over failure: malformed emphasis markers
//!   fall back to literal text, unmatched structure patterns become content
//!   lines, and mismatched documents still diff to a result
//! - Errors exist for genuinely invalid arguments and feature gating, not
//!   for malformed script text

use alloc::{format, string::String, string::ToString};
use core::fmt;

#[cfg(feature = "std")]
use thiserror::Error;

/// Main error type for panelscript-core operations
///
/// Wraps error conditions from the different modules to provide a unified
/// error handling interface.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Emphasis parsing errors (invalid arguments, not malformed markup)
    Markdown(String),

    /// Structure detection errors
    Structure(String),

    /// Diff computation errors
    Diff(String),

    /// Pacing analysis errors
    Analysis(String),

    /// Feature not supported in current configuration
    FeatureNotSupported {
        /// The operation that was requested
        feature: String,
        /// The cargo feature required to enable it
        required_feature: String,
    },

    /// Resource limit exceeded
    ResourceLimitExceeded {
        /// Which resource hit its limit
        resource: String,
        /// Observed value
        current: usize,
        /// Configured maximum
        limit: usize,
    },

    /// Internal consistency error (should not happen)
    Internal(String),
}

impl CoreError {
    /// Create markdown error from message
    pub fn markdown<T: fmt::Display>(message: T) -> Self {
        Self::Markdown(format!("{message}"))
    }

    /// Create structure detection error from message
    pub fn structure<T: fmt::Display>(message: T) -> Self {
        Self::Structure(format!("{message}"))
    }

    /// Create diff error from message
    pub fn diff<T: fmt::Display>(message: T) -> Self {
        Self::Diff(format!("{message}"))
    }

    /// Create analysis error from message
    pub fn analysis<T: fmt::Display>(message: T) -> Self {
        Self::Analysis(format!("{message}"))
    }

    /// Create feature not supported error
    pub fn feature_not_supported(feature: &str, required_feature: &str) -> Self {
        Self::FeatureNotSupported {
            feature: feature.to_string(),
            required_feature: required_feature.to_string(),
        }
    }

    /// Create resource limit error
    pub fn resource_limit_exceeded(resource: &str, current: usize, limit: usize) -> Self {
        Self::ResourceLimitExceeded {
            resource: resource.to_string(),
            current,
            limit,
        }
    }

    /// Create internal error (indicates a bug)
    pub fn internal<T: fmt::Display>(message: T) -> Self {
        Self::Internal(format!("{message}"))
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown(msg) => write!(f, "Markdown error: {msg}"),
            Self::Structure(msg) => write!(f, "Structure detection error: {msg}"),
            Self::Diff(msg) => write!(f, "Diff error: {msg}"),
            Self::Analysis(msg) => write!(f, "Analysis error: {msg}"),
            Self::FeatureNotSupported {
                feature,
                required_feature,
            } => {
                write!(
                    f,
                    "Feature '{feature}' not supported: enable the '{required_feature}' feature"
                )
            }
            Self::ResourceLimitExceeded {
                resource,
                current,
                limit,
            } => {
                write!(
                    f,
                    "Resource limit exceeded for {resource}: {current} exceeds limit {limit}"
                )
            }
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::error::Error for CoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_context() {
        let err = CoreError::markdown("unbalanced input rejected");
        assert!(format!("{err}").contains("unbalanced input rejected"));

        let err = CoreError::resource_limit_exceeded("input bytes", 2048, 1024);
        let text = format!("{err}");
        assert!(text.contains("input bytes"));
        assert!(text.contains("2048"));
        assert!(text.contains("1024"));
    }

    #[test]
    fn feature_not_supported_names_feature() {
        let err = CoreError::feature_not_supported("pacing analysis", "analysis");
        assert!(format!("{err}").contains("'analysis'"));
    }
}
