//! Error types for key generation, signing, verification and decoding.
//!
//! A signature that fails to verify is *not* an error: `verify` returns
//! `Ok(false)`. Errors here describe malformed calls (wrong shapes,
//! unusable parameters, truncated wire bytes).

/// Errors produced by the lattice signature operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LatticeError {
    /// Dimension or modulus outside the supported range.
    #[error("invalid parameters: {reason}")]
    InvalidParameters { reason: String },

    /// An operand's length disagrees with the configured dimension.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Operands were reduced modulo different values.
    #[error("modulus mismatch: expected {expected}, got {actual}")]
    ModulusMismatch { expected: u64, actual: u64 },

    /// Wire bytes could not be decoded.
    #[error("decoding error: {context}")]
    Decoding { context: &'static str },
}

impl LatticeError {
    pub(crate) fn invalid_params(reason: impl Into<String>) -> Self {
        LatticeError::InvalidParameters {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LatticeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LatticeError::DimensionMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 4, got 3");

        let err = LatticeError::invalid_params("modulus must be at least 2");
        assert_eq!(
            err.to_string(),
            "invalid parameters: modulus must be at least 2"
        );
    }
}
