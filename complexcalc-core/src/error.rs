//! Typed errors for the fallible complex operations.
//!
//! Only two operations can fail: division (zero divisor) and n-th root
//! (non-positive index). Everything else is total over finite inputs.

use thiserror::Error;

/// Result type alias for complex-number operations.
pub type ComplexResult<T> = Result<T, ComplexError>;

/// Errors raised by complex-number operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexError {
    /// The divisor was effectively the zero complex number.
    #[error("division by the zero complex number (0 + 0i)")]
    DivisionByZero,

    /// An n-th root was requested with a non-positive index.
    #[error("root index must be a positive integer, got {0}")]
    InvalidRootIndex(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_zero_message_names_the_cause() {
        let msg = ComplexError::DivisionByZero.to_string();
        assert!(msg.contains("zero complex number"));
    }

    #[test]
    fn invalid_root_index_message_carries_the_index() {
        let msg = ComplexError::InvalidRootIndex(-3).to_string();
        assert!(msg.contains("positive integer"));
        assert!(msg.contains("-3"));
    }
}
