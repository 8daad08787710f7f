//! Truth tables: the input of the SOP generator
//!
//! A [`TruthTable`] assigns an output bit to every combination of `N` input
//! variables, `1 <= N <= 26`. Rows are indexed by the binary value of their
//! input pattern with variable `A` as the most significant bit, so row 5 of a
//! three-variable table is the pattern `101` (A=1, B=0, C=1).
//!
//! Every constructor validates its input and fails with a [`TruthTableError`]
//! rather than truncating or padding; a constructed table always holds
//! exactly `2^N` rows.
//!
//! ```
//! use sop_logic::TruthTable;
//!
//! # fn main() -> std::io::Result<()> {
//! // 2-input AND, given as explicit rows
//! let and = TruthTable::from_rows([("00", '0'), ("01", '0'), ("10", '0'), ("11", '1')])?;
//!
//! // The same table from its output column
//! let same = TruthTable::from_output_str("0001")?;
//! assert_eq!(and, same);
//! assert_eq!(and.num_vars(), 2);
//! # Ok(())
//! # }
//! ```

pub mod error;

pub use error::TruthTableError;

use crate::expression::{Variable, MAX_VARIABLES};
use std::fmt;

/// An immutable truth table over `1..=26` input variables
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TruthTable {
    /// Number of input variables
    num_vars: usize,
    /// Output bit of each row, indexed by the row's input pattern
    outputs: Vec<bool>,
}

impl TruthTable {
    /// Build a table from explicit rows of (input pattern, output bit)
    ///
    /// Patterns are strings of `'0'`/`'1'`, most significant variable first;
    /// outputs are `'0'` or `'1'`. Rows may come in any order but every
    /// pattern must appear exactly once.
    ///
    /// # Errors
    ///
    /// Fails on an empty table, patterns of differing widths, a width outside
    /// `1..=26`, characters other than `0`/`1`, and duplicate or missing
    /// patterns.
    pub fn from_rows<I, P>(rows: I) -> Result<Self, TruthTableError>
    where
        I: IntoIterator<Item = (P, char)>,
        P: AsRef<str>,
    {
        let mut width = None;
        let mut parsed = Vec::new();

        for (row, (pattern, output)) in rows.into_iter().enumerate() {
            let pattern = pattern.as_ref();
            let found = pattern.chars().count();
            let expected = *width.get_or_insert(found);
            if row == 0 {
                check_num_vars(found)?;
            } else if found != expected {
                return Err(TruthTableError::InconsistentWidth {
                    row,
                    expected,
                    found,
                });
            }

            let mut index = 0usize;
            for (column, value) in pattern.chars().enumerate() {
                index = (index << 1) | usize::from(parse_bit(value, row, column)?);
            }
            let output = parse_bit(output, row, found)?;
            parsed.push((index, output));
        }

        let num_vars = width.ok_or(TruthTableError::Empty)?;
        Self::place_rows(num_vars, parsed)
    }

    /// Build a table from its output column, in row-index order
    ///
    /// # Errors
    ///
    /// Fails if `num_vars` is outside `1..=26` or `outputs` does not hold
    /// exactly `2^num_vars` entries.
    ///
    /// ```
    /// use sop_logic::TruthTable;
    ///
    /// # fn main() -> std::io::Result<()> {
    /// let xor = TruthTable::from_outputs(2, &[false, true, true, false])?;
    /// assert_eq!(xor.minterms().collect::<Vec<_>>(), vec![1, 2]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_outputs(num_vars: usize, outputs: &[bool]) -> Result<Self, TruthTableError> {
        check_num_vars(num_vars)?;
        let expected = 1usize << num_vars;
        if outputs.len() != expected {
            return Err(TruthTableError::RowCount {
                num_vars,
                expected,
                found: outputs.len(),
            });
        }
        Ok(TruthTable {
            num_vars,
            outputs: outputs.to_vec(),
        })
    }

    /// Build a table from its output column written as a bit string
    ///
    /// The number of variables is inferred from the length, which must be a
    /// power of two no smaller than 2.
    pub fn from_output_str(outputs: &str) -> Result<Self, TruthTableError> {
        let bits = outputs
            .chars()
            .enumerate()
            .map(|(row, value)| parse_bit(value, row, 0))
            .collect::<Result<Vec<_>, _>>()?;

        let len = bits.len();
        if len == 0 {
            return Err(TruthTableError::Empty);
        }
        let num_vars = len.next_power_of_two().trailing_zeros() as usize;
        check_num_vars(num_vars)?;
        Self::from_outputs(num_vars, &bits)
    }

    /// Build a table from packed row data
    ///
    /// `packed` is the row-major concatenation of every row, each row being
    /// its input pattern followed by its output bit, so `row_width` is the
    /// number of variables plus one. Rows may come in any order.
    ///
    /// ```
    /// use sop_logic::TruthTable;
    ///
    /// # fn main() -> std::io::Result<()> {
    /// // 2-input OR: 00->0, 01->1, 10->1, 11->1
    /// let or = TruthTable::from_packed("000011101111", 3)?;
    /// assert_eq!(or.outputs(), &[false, true, true, true]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_packed(packed: &str, row_width: usize) -> Result<Self, TruthTableError> {
        if row_width < 2 {
            return Err(TruthTableError::VariableCount {
                count: row_width.saturating_sub(1),
                max: MAX_VARIABLES,
            });
        }
        let chars: Vec<char> = packed.chars().collect();
        if chars.len() % row_width != 0 {
            return Err(TruthTableError::PackedLength {
                length: chars.len(),
                row_width,
            });
        }

        let rows: Vec<(String, char)> = chars
            .chunks(row_width)
            .map(|row| {
                let (pattern, output) = row.split_at(row_width - 1);
                (pattern.iter().collect(), output[0])
            })
            .collect();
        Self::from_rows(rows)
    }

    /// Build a table by evaluating a function on every input pattern
    ///
    /// The function receives the pattern as `[A, B, ...]`.
    ///
    /// ```
    /// use sop_logic::TruthTable;
    ///
    /// # fn main() -> std::io::Result<()> {
    /// let majority = TruthTable::from_fn(3, |x| (x[0] as u8 + x[1] as u8 + x[2] as u8) >= 2)?;
    /// assert_eq!(majority.minterms().count(), 4);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_fn(num_vars: usize, f: impl Fn(&[bool]) -> bool) -> Result<Self, TruthTableError> {
        check_num_vars(num_vars)?;
        let outputs = (0..1usize << num_vars)
            .map(|index| f(&pattern_of(num_vars, index)))
            .collect();
        Ok(TruthTable { num_vars, outputs })
    }

    /// Check placement of parsed rows: every pattern exactly once
    fn place_rows(num_vars: usize, parsed: Vec<(usize, bool)>) -> Result<Self, TruthTableError> {
        let mut slots: Vec<Option<bool>> = vec![None; 1usize << num_vars];
        for (index, output) in parsed {
            if slots[index].replace(output).is_some() {
                return Err(TruthTableError::DuplicatePattern {
                    pattern: pattern_string(num_vars, index),
                });
            }
        }

        let outputs = slots
            .iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.ok_or_else(|| TruthTableError::MissingPattern {
                    pattern: pattern_string(num_vars, index),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TruthTable { num_vars, outputs })
    }

    /// Number of input variables
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Number of rows (`2^num_vars`)
    pub fn num_rows(&self) -> usize {
        self.outputs.len()
    }

    /// Input variables of the table, `A` onwards
    pub fn variables(&self) -> impl Iterator<Item = Variable> {
        Variable::first(self.num_vars)
    }

    /// Output bit of a row, or `None` if the index is out of range
    pub fn output(&self, index: usize) -> Option<bool> {
        self.outputs.get(index).copied()
    }

    /// Output column in row-index order
    pub fn outputs(&self) -> &[bool] {
        &self.outputs
    }

    /// Input pattern of a row, most significant variable first
    pub fn pattern(&self, index: usize) -> Vec<bool> {
        pattern_of(self.num_vars, index)
    }

    /// Iterate over rows as (input pattern, output bit), in row-index order
    pub fn rows(&self) -> impl Iterator<Item = (Vec<bool>, bool)> + '_ {
        self.outputs
            .iter()
            .enumerate()
            .map(move |(index, &output)| (pattern_of(self.num_vars, index), output))
    }

    /// Indices of the rows whose output is 1, ascending
    pub fn minterms(&self) -> impl Iterator<Item = usize> + '_ {
        self.outputs
            .iter()
            .enumerate()
            .filter(|&(_, &output)| output)
            .map(|(index, _)| index)
    }

    /// The output value if every row has the same output
    pub fn constant_output(&self) -> Option<bool> {
        let first = self.outputs[0];
        self.outputs
            .iter()
            .all(|&output| output == first)
            .then_some(first)
    }
}

/// Tabular rendering: a header of variable letters, then one row per line
///
/// ```text
/// AB|Q
/// 00|0
/// 01|1
/// ```
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for var in self.variables() {
            write!(f, "{}", var)?;
        }
        writeln!(f, "|Q")?;
        for (index, &output) in self.outputs.iter().enumerate() {
            writeln!(
                f,
                "{}|{}",
                pattern_string(self.num_vars, index),
                u8::from(output)
            )?;
        }
        Ok(())
    }
}

fn check_num_vars(count: usize) -> Result<(), TruthTableError> {
    if (1..=MAX_VARIABLES).contains(&count) {
        Ok(())
    } else {
        Err(TruthTableError::VariableCount {
            count,
            max: MAX_VARIABLES,
        })
    }
}

fn parse_bit(value: char, row: usize, column: usize) -> Result<bool, TruthTableError> {
    match value {
        '0' => Ok(false),
        '1' => Ok(true),
        _ => Err(TruthTableError::InvalidBit { row, column, value }),
    }
}

/// Input pattern of a row index, most significant variable first
pub(crate) fn pattern_of(num_vars: usize, index: usize) -> Vec<bool> {
    (0..num_vars)
        .map(|i| (index >> (num_vars - 1 - i)) & 1 == 1)
        .collect()
}

fn pattern_string(num_vars: usize, index: usize) -> String {
    pattern_of(num_vars, index)
        .into_iter()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}

#[cfg(test)]
mod tests;
