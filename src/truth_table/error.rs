//! Error types for truth-table construction

use std::io;
use thiserror::Error;

/// Errors raised when a truth table violates its invariants
///
/// A valid table has `1..=26` input variables, exactly `2^N` rows whose
/// patterns are all distinct, and only `0`/`1` bits. Each variant corresponds
/// to one way of breaking that; together they form the engine's
/// `InvalidTruthTable` failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TruthTableError {
    /// No rows were supplied
    #[error("Truth table has no rows")]
    Empty,

    /// The number of input variables is outside `1..=26`
    #[error("Truth table has {count} input variables; expected between 1 and {max}")]
    VariableCount {
        /// Number of variables implied by the input
        count: usize,
        /// Largest supported number of variables
        max: usize,
    },

    /// A row's input pattern has a different width from the first row
    #[error("Row {row} has {found} input bits but row 0 has {expected}")]
    InconsistentWidth {
        /// Row number in the order supplied
        row: usize,
        /// Width of the first row
        expected: usize,
        /// Width of this row
        found: usize,
    },

    /// A bit other than `0` or `1` was found
    #[error("Invalid bit {value:?} in row {row}, column {column}; expected '0' or '1'")]
    InvalidBit {
        /// Row number in the order supplied
        row: usize,
        /// Column within the row (the output column comes last)
        column: usize,
        /// The offending character
        value: char,
    },

    /// The number of rows is not `2^N`
    #[error("Truth table with {num_vars} variables needs {expected} rows, found {found}")]
    RowCount {
        /// Number of input variables
        num_vars: usize,
        /// Required number of rows (`2^N`)
        expected: usize,
        /// Number of rows supplied
        found: usize,
    },

    /// Two rows share the same input pattern
    #[error("Input pattern {pattern} appears more than once")]
    DuplicatePattern {
        /// The repeated pattern, most significant variable first
        pattern: String,
    },

    /// An input pattern has no row
    #[error("Input pattern {pattern} is missing")]
    MissingPattern {
        /// The missing pattern, most significant variable first
        pattern: String,
    },

    /// Packed row data does not divide into rows of the given width
    #[error("Truth table is not consistent: {length} bits do not divide into rows of width {row_width}")]
    PackedLength {
        /// Total number of bits supplied
        length: usize,
        /// Width of one row, output bit included
        row_width: usize,
    },
}

impl From<TruthTableError> for io::Error {
    fn from(err: TruthTableError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
