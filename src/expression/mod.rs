//! Sum-of-products expressions in wire notation
//!
//! This module provides the expression types exchanged at the engine boundary.
//! An expression is either a constant or a disjunction of product terms, and is
//! rendered in the project-wide wire notation:
//!
//! - one uppercase letter per variable (`A`..`Z`, `A` is the most significant input)
//! - `#` after a letter negates it (`A#` is NOT A)
//! - adjacency is AND (`AB#` is A AND NOT B)
//! - `+` separates terms (OR)
//! - the constants are rendered as `0` and `1`
//!
//! # Main Types
//!
//! - [`Variable`] - one of the 26 input identifiers
//! - [`Literal`] - a variable with a negation flag
//! - [`Term`] - a product of one or more literals
//! - [`Expression`] - a constant or a sum of terms
//!
//! # Parsing and Display
//!
//! ```
//! use sop_logic::Expression;
//!
//! # fn main() -> std::io::Result<()> {
//! let expr = Expression::parse("A#B+AB#")?;
//! assert_eq!(expr.num_terms(), 2);
//! assert_eq!(expr.literal_count(), 4);
//!
//! // Display reproduces the wire notation exactly
//! assert_eq!(expr.to_string(), "A#B+AB#");
//! # Ok(())
//! # }
//! ```

mod display;
pub mod error;
mod eval;
mod parser;

pub use error::ExpressionParseError;

use std::cmp::Ordering;

/// Number of distinct variables (`A`..`Z`)
pub const MAX_VARIABLES: usize = 26;

/// One of the 26 boolean input variables, `A` (index 0) through `Z` (index 25)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(u8);

impl Variable {
    /// Create a variable from its index (0 for `A`, 25 for `Z`)
    ///
    /// Returns `None` if the index is out of range.
    pub fn new(index: usize) -> Option<Self> {
        if index < MAX_VARIABLES {
            Some(Variable(index as u8))
        } else {
            None
        }
    }

    /// Create a variable from its letter
    ///
    /// ```
    /// use sop_logic::Variable;
    ///
    /// assert_eq!(Variable::from_letter('C').map(|v| v.index()), Some(2));
    /// assert!(Variable::from_letter('c').is_none());
    /// ```
    pub fn from_letter(letter: char) -> Option<Self> {
        if letter.is_ascii_uppercase() {
            Some(Variable(letter as u8 - b'A'))
        } else {
            None
        }
    }

    /// Index of this variable (0 for `A`)
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Letter of this variable in wire notation
    pub fn letter(self) -> char {
        (b'A' + self.0) as char
    }

    /// Bit mask of this variable, used for set operations on terms
    pub(crate) fn mask(self) -> u32 {
        1 << self.0
    }

    /// The variable of the lowest bit set in `mask`
    pub(crate) fn from_mask(mask: u32) -> Self {
        debug_assert!(mask != 0 && mask.trailing_zeros() < MAX_VARIABLES as u32);
        Variable(mask.trailing_zeros() as u8)
    }

    /// The first `count` variables, `A` onwards
    pub fn first(count: usize) -> impl Iterator<Item = Variable> {
        (0..count.min(MAX_VARIABLES)).map(|i| Variable(i as u8))
    }
}

/// A variable together with its negation flag
///
/// Literals order by variable first and place the negated literal before the
/// positive one, mirroring input bit 0 before bit 1: `A# < A < B# < B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal {
    variable: Variable,
    negated: bool,
}

impl Literal {
    /// Create a literal
    pub fn new(variable: Variable, negated: bool) -> Self {
        Literal { variable, negated }
    }

    /// Create a positive literal (`A`)
    pub fn positive(variable: Variable) -> Self {
        Self::new(variable, false)
    }

    /// Create a negated literal (`A#`)
    pub fn negative(variable: Variable) -> Self {
        Self::new(variable, true)
    }

    /// The variable of this literal
    pub fn variable(self) -> Variable {
        self.variable
    }

    /// Whether this literal is negated
    pub fn is_negated(self) -> bool {
        self.negated
    }

    /// The literal with the opposite sign
    pub fn complement(self) -> Self {
        Literal {
            variable: self.variable,
            negated: !self.negated,
        }
    }

    /// Evaluate this literal given the value of its variable
    pub fn holds(self, value: bool) -> bool {
        value != self.negated
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.variable
            .cmp(&other.variable)
            .then_with(|| other.negated.cmp(&self.negated))
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A product term: the conjunction of one or more literals
///
/// Literals keep the order in which they were written, so rendering a parsed
/// term reproduces its input. Comparisons between terms are made on the set of
/// literals, which is what the simplifier's identities reason about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term {
    literals: Vec<Literal>,
}

impl Term {
    /// Create a term from its literals
    ///
    /// Fails with [`ExpressionParseError::EmptyTerm`] if no literal is given.
    ///
    /// ```
    /// use sop_logic::{Literal, Term, Variable};
    ///
    /// # fn main() -> std::io::Result<()> {
    /// let a = Variable::from_letter('A').unwrap();
    /// let b = Variable::from_letter('B').unwrap();
    /// let term = Term::new([Literal::positive(a), Literal::negative(b)])?;
    /// assert_eq!(term.to_string(), "AB#");
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Result<Self, ExpressionParseError> {
        let literals: Vec<Literal> = literals.into_iter().collect();
        if literals.is_empty() {
            return Err(ExpressionParseError::EmptyTerm { position: None });
        }
        Ok(Term { literals })
    }

    /// Create a term from literals already known to be non-empty
    pub(crate) fn from_literals(literals: Vec<Literal>) -> Self {
        debug_assert!(!literals.is_empty(), "terms hold at least one literal");
        Term { literals }
    }

    /// Create a minterm covering exactly one input pattern
    ///
    /// `pattern[i]` is the value of variable `i`; every variable appears.
    pub(crate) fn minterm(pattern: impl IntoIterator<Item = bool>) -> Self {
        let literals = pattern
            .into_iter()
            .zip(Variable::first(MAX_VARIABLES))
            .map(|(bit, var)| Literal::new(var, !bit))
            .collect();
        Term::from_literals(literals)
    }

    /// Literals of this term, in written order
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Number of literals, counting repeated literals
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Always `false`: terms hold at least one literal
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Bit masks of the positive and negated variables of this term
    pub(crate) fn masks(&self) -> (u32, u32) {
        self.literals.iter().fold((0, 0), |(pos, neg), lit| {
            if lit.is_negated() {
                (pos, neg | lit.variable().mask())
            } else {
                (pos | lit.variable().mask(), neg)
            }
        })
    }

    /// Bit mask of every variable mentioned by this term
    pub(crate) fn support(&self) -> u32 {
        let (pos, neg) = self.masks();
        pos | neg
    }

    /// Whether the term contains a variable together with its negation
    pub fn is_contradiction(&self) -> bool {
        let (pos, neg) = self.masks();
        pos & neg != 0
    }

    /// Whether the term contains the same literal more than once
    pub fn has_repeated_literals(&self) -> bool {
        let (pos, neg) = self.masks();
        (pos.count_ones() + neg.count_ones()) as usize != self.literals.len()
    }

    /// Whether both terms contain the same set of literals
    pub fn same_literals(&self, other: &Term) -> bool {
        self.masks() == other.masks()
    }

    /// Whether every literal of `self` also appears in `other`
    pub fn is_subset_of(&self, other: &Term) -> bool {
        let (pos, neg) = self.masks();
        let (other_pos, other_neg) = other.masks();
        pos & !other_pos == 0 && neg & !other_neg == 0
    }

    /// Whether the term contains the given literal
    pub fn contains(&self, literal: Literal) -> bool {
        self.literals.contains(&literal)
    }

    /// The term with duplicate literals removed, keeping first occurrences
    pub(crate) fn deduplicated(&self) -> Term {
        let mut seen = Vec::with_capacity(self.literals.len());
        for lit in &self.literals {
            if !seen.contains(lit) {
                seen.push(*lit);
            }
        }
        Term::from_literals(seen)
    }

    /// The term without any literal of `variable`
    ///
    /// Returns `None` when nothing would be left.
    pub(crate) fn without(&self, variable: Variable) -> Option<Term> {
        let rest: Vec<Literal> = self
            .literals
            .iter()
            .copied()
            .filter(|lit| lit.variable() != variable)
            .collect();
        if rest.is_empty() {
            None
        } else {
            Some(Term::from_literals(rest))
        }
    }

    /// Literals sorted and deduplicated, the basis of the canonical ordering
    pub(crate) fn canonical_literals(&self) -> Vec<Literal> {
        let mut literals = self.literals.clone();
        literals.sort();
        literals.dedup();
        literals
    }

    /// Compare two terms in the canonical ordering used for tie-breaks
    ///
    /// Terms compare by their sorted literal sequences, so
    /// `A#B < A < AB# < AB < B`. On minterms of the same width this is the
    /// order of their truth-table rows.
    pub fn canonical_cmp(&self, other: &Term) -> Ordering {
        self.canonical_literals().cmp(&other.canonical_literals())
    }

    /// The term with its literals sorted into canonical order
    pub fn canonical(&self) -> Term {
        let mut literals = self.literals.clone();
        literals.sort();
        Term::from_literals(literals)
    }
}

/// A boolean expression in sum-of-products form
///
/// `Sum` always holds at least one term; an empty sum is represented by
/// `Constant(false)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// The constant `0` or `1`
    Constant(bool),
    /// A disjunction of product terms
    Sum(Vec<Term>),
}

impl Expression {
    /// Build an expression from its terms, collapsing an empty sum to `0`
    pub fn from_terms(terms: Vec<Term>) -> Self {
        if terms.is_empty() {
            Expression::Constant(false)
        } else {
            Expression::Sum(terms)
        }
    }

    /// Whether the expression is the constant `0` or `1`
    pub fn is_constant(&self) -> bool {
        matches!(self, Expression::Constant(_))
    }

    /// The constant value, if the expression is a constant
    pub fn as_constant(&self) -> Option<bool> {
        match self {
            Expression::Constant(value) => Some(*value),
            Expression::Sum(_) => None,
        }
    }

    /// Terms of the expression (empty for constants)
    pub fn terms(&self) -> &[Term] {
        match self {
            Expression::Constant(_) => &[],
            Expression::Sum(terms) => terms,
        }
    }

    /// Number of terms (0 for constants)
    pub fn num_terms(&self) -> usize {
        self.terms().len()
    }

    /// Total number of literals across all terms
    pub fn literal_count(&self) -> usize {
        self.terms().iter().map(Term::len).sum()
    }

    /// Complexity measure used to accept rewrites: literal count, then term count
    pub fn complexity(&self) -> Complexity {
        Complexity {
            literals: self.literal_count(),
            terms: self.num_terms(),
        }
    }

    /// Variables mentioned anywhere in the expression, in alphabetical order
    pub fn variables(&self) -> Vec<Variable> {
        let support = self.terms().iter().fold(0u32, |acc, t| acc | t.support());
        Variable::first(MAX_VARIABLES)
            .filter(|v| support & v.mask() != 0)
            .collect()
    }

    /// The expression in canonical form
    ///
    /// Literals within each term are sorted, then terms are sorted by
    /// [`Term::canonical_cmp`]. Repeated literals and terms are kept; removing
    /// them is the simplifier's job.
    ///
    /// ```
    /// use sop_logic::Expression;
    ///
    /// # fn main() -> std::io::Result<()> {
    /// let expr = Expression::parse("B+CA+A#")?;
    /// assert_eq!(expr.canonical().to_string(), "A#+AC+B");
    /// # Ok(())
    /// # }
    /// ```
    pub fn canonical(&self) -> Expression {
        match self {
            Expression::Constant(value) => Expression::Constant(*value),
            Expression::Sum(terms) => {
                let mut terms: Vec<Term> = terms.iter().map(Term::canonical).collect();
                terms.sort_by(Term::canonical_cmp);
                Expression::Sum(terms)
            }
        }
    }

    /// Number of variables needed to evaluate the expression
    ///
    /// This is one more than the index of the highest variable mentioned.
    pub fn width(&self) -> usize {
        self.variables().last().map_or(0, |v| v.index() + 1)
    }
}

/// Size of an expression: total literal count, then term count
///
/// Ordered lexicographically; the simplifier only accepts rewrites that make
/// it strictly smaller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complexity {
    /// Total literal count across all terms
    pub literals: usize,
    /// Number of terms
    pub terms: usize,
}
