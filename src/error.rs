//! Error types for the SOP engine
//!
//! The engine fails in exactly two ways, each carrying the detailed error of
//! the stage that rejected its input:
//!
//! - [`SopError::InvalidTruthTable`] when a truth table violates its
//!   invariants (see [`TruthTableError`])
//! - [`SopError::MalformedExpression`] when an expression is not valid wire
//!   notation (see [`ExpressionParseError`])
//!
//! Both convert into [`std::io::Error`] so callers can use `?` in functions
//! returning `std::io::Result`.

use crate::expression::ExpressionParseError;
use crate::truth_table::TruthTableError;
use std::io;
use thiserror::Error;

/// The main error type of the SOP engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SopError {
    /// The truth table given to the generator is not valid
    #[error("Invalid truth table: {0}")]
    InvalidTruthTable(#[from] TruthTableError),

    /// The expression given to the simplifier could not be parsed
    #[error("Malformed expression: {0}")]
    MalformedExpression(#[from] ExpressionParseError),
}

impl From<SopError> for io::Error {
    fn from(err: SopError) -> Self {
        match err {
            SopError::InvalidTruthTable(e) => e.into(),
            SopError::MalformedExpression(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Expression;

    #[test]
    fn test_invalid_truth_table_display() {
        let err = SopError::from(TruthTableError::PackedLength {
            length: 5,
            row_width: 3,
        });
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid truth table"));
        assert!(msg.contains("not consistent"));
    }

    #[test]
    fn test_malformed_expression_display() {
        let err = SopError::from(Expression::parse("A++B").unwrap_err());
        assert!(matches!(err, SopError::MalformedExpression(_)));
        assert!(err.to_string().starts_with("Malformed expression"));
    }

    #[test]
    fn test_error_kinds() {
        let table: io::Error = SopError::from(TruthTableError::Empty).into();
        assert_eq!(table.kind(), io::ErrorKind::InvalidInput);

        let expr: io::Error = SopError::from(Expression::parse("a").unwrap_err()).into();
        assert_eq!(expr.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_source_is_kept() {
        use std::error::Error as _;
        let err = SopError::from(TruthTableError::Empty);
        assert!(err.source().is_some());
    }
}
