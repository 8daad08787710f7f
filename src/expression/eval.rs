//! Evaluation and equivalence checking for expressions

use super::{Expression, Literal, Term};

impl Literal {
    fn evaluate(self, assignment: &[bool]) -> bool {
        let value = assignment
            .get(self.variable().index())
            .copied()
            .unwrap_or(false);
        self.holds(value)
    }
}

impl Term {
    /// Evaluate the term under an assignment
    ///
    /// `assignment[i]` is the value of variable `i` (`A` is index 0). Variables
    /// beyond the end of the slice are taken as false.
    pub fn evaluate(&self, assignment: &[bool]) -> bool {
        self.literals().iter().all(|lit| lit.evaluate(assignment))
    }
}

impl Expression {
    /// Evaluate the expression under an assignment
    ///
    /// `assignment[i]` is the value of variable `i` (`A` is index 0). Variables
    /// beyond the end of the slice are taken as false.
    ///
    /// # Examples
    ///
    /// ```
    /// use sop_logic::Expression;
    ///
    /// # fn main() -> std::io::Result<()> {
    /// let xor = Expression::parse("A#B+AB#")?;
    /// assert!(!xor.evaluate(&[false, false]));
    /// assert!(xor.evaluate(&[false, true]));
    /// assert!(xor.evaluate(&[true, false]));
    /// assert!(!xor.evaluate(&[true, true]));
    /// # Ok(())
    /// # }
    /// ```
    pub fn evaluate(&self, assignment: &[bool]) -> bool {
        match self {
            Expression::Constant(value) => *value,
            Expression::Sum(terms) => terms.iter().any(|t| t.evaluate(assignment)),
        }
    }

    /// Evaluate the expression on the input pattern of a truth-table row
    ///
    /// Row `index` of a `num_vars`-variable table assigns variable `i` the bit
    /// `num_vars - 1 - i` of `index`, so `A` is the most significant bit.
    pub fn evaluate_row(&self, num_vars: usize, index: usize) -> bool {
        let assignment: Vec<bool> = (0..num_vars)
            .map(|i| (index >> (num_vars - 1 - i)) & 1 == 1)
            .collect();
        self.evaluate(&assignment)
    }

    /// Check if two expressions are logically equivalent
    ///
    /// Compares both expressions on every assignment of the variables either
    /// of them mentions, which costs `2^n` evaluations for `n` variables.
    ///
    /// ```
    /// use sop_logic::Expression;
    ///
    /// # fn main() -> std::io::Result<()> {
    /// let sop = Expression::parse("AB#+AB+A#B")?;
    /// let reduced = Expression::parse("A+B")?;
    /// assert!(sop.equivalent_to(&reduced));
    /// # Ok(())
    /// # }
    /// ```
    pub fn equivalent_to(&self, other: &Expression) -> bool {
        let width = self.width().max(other.width());
        (0..1usize << width)
            .all(|row| self.evaluate_row(width, row) == other.evaluate_row(width, row))
    }
}
