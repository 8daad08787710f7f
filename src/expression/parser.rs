//! Parsing support for wire-notation expressions

use super::error::ExpressionParseError;
use super::Expression;
use lalrpop_util::ParseError;
use std::str::FromStr;
use std::sync::Arc;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/expression/sop.rs"));
}

impl Expression {
    /// Parse an expression written in wire notation
    ///
    /// Accepts the constants `0` and `1`, or one or more product terms
    /// separated by `+`. Each term is a run of uppercase letters, any of which
    /// may be followed by `#` to negate it. Whitespace is not part of the
    /// notation and is rejected.
    ///
    /// ```
    /// use sop_logic::Expression;
    ///
    /// assert!(Expression::parse("AB#+C").is_ok());
    /// assert!(Expression::parse("1").is_ok());
    /// assert!(Expression::parse("A + B").is_err());
    /// assert!(Expression::parse("#A").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ExpressionParseError> {
        // The generated lexer skips whitespace, so reject anything outside the
        // notation's alphabet before handing over
        if let Some((position, character)) = input
            .char_indices()
            .find(|&(_, c)| !matches!(c, 'A'..='Z' | '#' | '+' | '0' | '1'))
        {
            return Err(ExpressionParseError::UnexpectedCharacter {
                character,
                position,
                input: Arc::from(input),
            });
        }

        parser_impl::ExprParser::new()
            .parse(input)
            .map_err(|e| convert_error(input, e))
    }
}

impl FromStr for Expression {
    type Err = ExpressionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::parse(s)
    }
}

/// Translate a lalrpop error into the engine's error type
///
/// A `+` where a literal was expected, or an input ending in `+`, is reported
/// as an empty term; everything else is invalid syntax at the reported offset.
fn convert_error<T: std::fmt::Display, E: std::fmt::Display>(
    input: &str,
    err: ParseError<usize, T, E>,
) -> ExpressionParseError {
    let position = match &err {
        ParseError::InvalidToken { location } => Some(*location),
        ParseError::UnrecognizedEof { location, .. } => Some(*location),
        ParseError::UnrecognizedToken { token, .. } => Some(token.0),
        ParseError::ExtraToken { token } => Some(token.0),
        ParseError::User { .. } => None,
    };

    let empty_term = match &err {
        ParseError::UnrecognizedToken { token, .. } => input[token.0..].starts_with('+'),
        ParseError::UnrecognizedEof { .. } => input.ends_with('+'),
        _ => false,
    };
    if empty_term {
        return ExpressionParseError::EmptyTerm { position };
    }

    ExpressionParseError::InvalidSyntax {
        message: Arc::from(err.to_string().as_str()),
        input: Arc::from(input),
        position,
    }
}
