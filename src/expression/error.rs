//! Error types for wire-notation parsing

use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised when an expression does not follow the wire notation
///
/// These correspond to the engine's `MalformedExpression` failure: unknown
/// characters, a `#` with no variable before it, empty terms, or any other
/// input the grammar rejects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionParseError {
    /// A character outside `A`-`Z`, `#`, `+`, `0` and `1` was found
    #[error("Unexpected character {character:?} at position {position}. Input: {input:?}")]
    UnexpectedCharacter {
        /// The offending character
        character: char,
        /// Byte offset of the character
        position: usize,
        /// The original input string
        input: Arc<str>,
    },

    /// The input does not match the sum-of-products grammar
    #[error("{}", fmt_invalid_syntax(message, input, *position))]
    InvalidSyntax {
        /// The error message from the parser
        message: Arc<str>,
        /// The original input string that failed to parse
        input: Arc<str>,
        /// Optional position in the input where the error occurred
        position: Option<usize>,
    },

    /// A product term with no literals
    #[error("{}", fmt_empty_term(*position))]
    EmptyTerm {
        /// Position of the empty term in the input, when parsing
        position: Option<usize>,
    },
}

fn fmt_invalid_syntax(message: &str, input: &str, position: Option<usize>) -> String {
    match position {
        Some(pos) => format!(
            "Failed to parse expression at position {}: {}. Input: {:?}",
            pos, message, input
        ),
        None => format!("Failed to parse expression: {}. Input: {:?}", message, input),
    }
}

fn fmt_empty_term(position: Option<usize>) -> String {
    match position {
        Some(pos) => format!("Empty product term at position {}", pos),
        None => "Empty product term".to_string(),
    }
}

impl ExpressionParseError {
    /// Position in the input where the error was detected, when known
    pub fn position(&self) -> Option<usize> {
        match self {
            ExpressionParseError::UnexpectedCharacter { position, .. } => Some(*position),
            ExpressionParseError::InvalidSyntax { position, .. } => *position,
            ExpressionParseError::EmptyTerm { position } => *position,
        }
    }
}

impl From<ExpressionParseError> for io::Error {
    fn from(err: ExpressionParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_syntax_with_position() {
        let err = ExpressionParseError::InvalidSyntax {
            message: Arc::from("unexpected token"),
            input: Arc::from("A++B"),
            position: Some(2),
        };
        let msg = err.to_string();
        assert!(msg.contains("position 2"));
        assert!(msg.contains("unexpected token"));
        assert_eq!(err.position(), Some(2));
    }

    #[test]
    fn test_invalid_syntax_without_position() {
        let err = ExpressionParseError::InvalidSyntax {
            message: Arc::from("unexpected end"),
            input: Arc::from("A+"),
            position: None,
        };
        let msg = err.to_string();
        assert!(!msg.contains("position"));
        assert!(msg.contains("unexpected end"));
    }

    #[test]
    fn test_unexpected_character_display() {
        let err = ExpressionParseError::UnexpectedCharacter {
            character: 'a',
            position: 1,
            input: Arc::from("Aa"),
        };
        let msg = err.to_string();
        assert!(msg.contains("'a'"));
        assert!(msg.contains("position 1"));
    }

    #[test]
    fn test_empty_term_display() {
        assert_eq!(
            ExpressionParseError::EmptyTerm { position: None }.to_string(),
            "Empty product term"
        );
        assert_eq!(
            ExpressionParseError::EmptyTerm { position: Some(3) }.to_string(),
            "Empty product term at position 3"
        );
    }

    #[test]
    fn test_expression_parse_error_to_io_error() {
        let err = ExpressionParseError::EmptyTerm { position: None };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
