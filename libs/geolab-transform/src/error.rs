//! # Transformation Errors
//!
//! Error types for transformation construction.

use thiserror::Error;

/// Errors that can occur while constructing a transformation.
///
/// The numeric transform parameters (angle, scale factor, translation
/// components) are accepted over the full real domain, including values that
/// produce degenerate geometry. The only rejected input is a reflection axis
/// outside the supported set, detected before any matrix is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// A reflection axis label outside the enumerated set.
    #[error("Invalid configuration: unknown reflection axis `{0}`")]
    InvalidConfiguration(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TransformError::InvalidConfiguration("z-axis".to_string());
        assert!(err.to_string().contains("unknown reflection axis"));
        assert!(err.to_string().contains("z-axis"));
    }
}
