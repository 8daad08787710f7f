//! Canonical sum-of-products generation
//!
//! Turns a [`TruthTable`] into its minterm expansion: one product term per
//! row whose output is 1, listing every variable (plain when the input bit is
//! 1, negated with `#` when it is 0). Terms follow ascending row index, so the
//! output is reproducible byte for byte.
//!
//! Tables with a constant output column produce the constants `0` and `1`
//! instead of a sum.

use crate::expression::{Expression, Term};
use crate::truth_table::{pattern_of, TruthTable};
use log::debug;

impl TruthTable {
    /// Generate the canonical sum-of-products expression of this table
    ///
    /// # Examples
    ///
    /// ```
    /// use sop_logic::TruthTable;
    ///
    /// # fn main() -> std::io::Result<()> {
    /// let xor = TruthTable::from_output_str("0110")?;
    /// assert_eq!(xor.to_sop().to_string(), "A#B+AB#");
    ///
    /// let never = TruthTable::from_output_str("0000")?;
    /// assert_eq!(never.to_sop().to_string(), "0");
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_sop(&self) -> Expression {
        if let Some(value) = self.constant_output() {
            debug!(
                "to_sop: constant output {} over {} rows",
                u8::from(value),
                self.num_rows()
            );
            return Expression::Constant(value);
        }

        let terms: Vec<Term> = self
            .minterms()
            .map(|index| Term::minterm(pattern_of(self.num_vars(), index)))
            .collect();
        debug!(
            "to_sop: {} minterms of {} over {} variables",
            terms.len(),
            self.num_rows(),
            self.num_vars()
        );
        Expression::from_terms(terms)
    }
}

/// Generate the canonical SOP of an already validated table
///
/// Equivalent to [`TruthTable::to_sop`].
pub fn generate(table: &TruthTable) -> Expression {
    table.to_sop()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_and_table() {
        let table = TruthTable::from_output_str("0001").unwrap();
        assert_eq!(table.to_sop().to_string(), "AB");
    }

    #[test]
    fn test_minterms_in_row_order() {
        // Scenario: A + A#B
        let table = TruthTable::from_output_str("0111").unwrap();
        assert_eq!(table.to_sop().to_string(), "A#B+AB#+AB");
    }

    #[test]
    fn test_every_term_has_every_variable() {
        let table = TruthTable::from_fn(4, |x| x[0] ^ x[3]).unwrap();
        let sop = table.to_sop();
        assert_eq!(sop.num_terms(), 8);
        for term in sop.terms() {
            assert_eq!(term.len(), 4);
            assert!(!term.has_repeated_literals());
        }
    }

    #[test]
    fn test_single_variable_table() {
        assert_eq!(
            TruthTable::from_output_str("10").unwrap().to_sop().to_string(),
            "A#"
        );
        assert_eq!(
            TruthTable::from_output_str("01").unwrap().to_sop().to_string(),
            "A"
        );
    }

    #[test]
    fn test_constant_tables() {
        let zeros = TruthTable::from_outputs(3, &[false; 8]).unwrap();
        assert_eq!(zeros.to_sop(), Expression::Constant(false));

        let ones = TruthTable::from_outputs(3, &[true; 8]).unwrap();
        assert_eq!(ones.to_sop(), Expression::Constant(true));
    }

    #[test]
    fn test_generate_matches_table() {
        let table = TruthTable::from_fn(3, |x| x[0] && !x[2]).unwrap();
        let sop = generate(&table);
        for (index, &output) in table.outputs().iter().enumerate() {
            assert_eq!(sop.evaluate_row(3, index), output, "row {}", index);
        }
    }
}
