//! # SOP Logic
//!
//! This crate turns truth tables into boolean expressions and simplifies
//! them. It has two stages:
//!
//! - the **SOP generator** builds the canonical minterm sum-of-products of a
//!   [`TruthTable`]
//! - the **expression simplifier** rewrites a sum-of-products with a fixed
//!   catalog of boolean identities until it reaches a fixed point, recording
//!   every identity it applied
//!
//! Expressions cross the API in a compact wire notation: one uppercase letter
//! per variable, `#` after a letter for NOT, adjacency for AND, `+` for OR,
//! and `0`/`1` for the constants. `AB#+C` is (A AND NOT B) OR C.
//!
//! ## Quick Start
//!
//! ```
//! use sop_logic::{minimize_truth_table, SimplifyConfig, TruthTable};
//!
//! # fn main() -> std::io::Result<()> {
//! // 2-input OR
//! let table = TruthTable::from_output_str("0111")?;
//!
//! let result = minimize_truth_table(&table, &SimplifyConfig::default());
//! assert_eq!(result.sop().to_string(), "A#B+AB#+AB");
//! assert_eq!(result.reduced().to_string(), "A+B");
//!
//! for line in result.simplification().log_lines() {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Working With Strings
//!
//! The top-level functions take the same inputs as the command-line tool and
//! report failures with [`SopError`]:
//!
//! ```
//! use sop_logic::{generate_sop, simplify, SopError};
//!
//! # fn main() -> Result<(), SopError> {
//! let sop = generate_sop([("00", '0'), ("01", '1'), ("10", '1'), ("11", '0')])?;
//! assert_eq!(sop.to_string(), "A#B+AB#");
//!
//! let result = simplify("AB#+AB+A#B")?;
//! assert_eq!(result.reduced().to_string(), "A+B");
//!
//! assert!(matches!(simplify("A++B"), Err(SopError::MalformedExpression(_))));
//! # Ok(())
//! # }
//! ```
//!
//! ## Compile-Time Expressions
//!
//! The [`sop!`] macro validates wire notation at compile time:
//!
//! ```
//! use sop_logic::sop;
//!
//! let xor = sop!("A#B+AB#");
//! assert_eq!(xor.simplify().passes(), 0);
//! ```
//!
//! ## Logging
//!
//! Both stages report what they do through the [`log`] facade: a `debug`
//! record per generated table and per applied identity, `trace` records with
//! the expression after every pass, and a `warn` record when a run stops at
//! its pass cap. Install any logger to see them.
//!
//! ## Thread Safety
//!
//! All types are plain owned data; simplification runs are independent and
//! can be executed from any number of threads at once.

pub mod error;
pub mod expression;
pub mod generator;
pub mod simplify;
pub mod truth_table;

pub use error::SopError;
pub use expression::{Complexity, Expression, ExpressionParseError, Literal, Term, Variable};
pub use simplify::{
    Identity, IdentityRecord, Simplification, SimplifyConfig, TraceEntry, CONSTANT_RESULT,
};
pub use truth_table::{TruthTable, TruthTableError};

/// Build a wire-notation expression, validated at compile time
///
/// Expands to a call to [`Expression::parse`] on a string the macro has
/// already checked, so the generated code never fails.
pub use sop_logic_macros::sop;

/// Generate the canonical sum-of-products of a truth table given as rows
///
/// Each row is an input pattern of `'0'`/`'1'` characters, `A` first, and
/// an output bit. See [`TruthTable::from_rows`] for the accepted input.
///
/// # Errors
///
/// Returns [`SopError::InvalidTruthTable`] if the rows do not form a valid
/// table.
pub fn generate_sop<I, P>(rows: I) -> Result<Expression, SopError>
where
    I: IntoIterator<Item = (P, char)>,
    P: AsRef<str>,
{
    Ok(TruthTable::from_rows(rows)?.to_sop())
}

/// Parse and simplify a wire-notation expression with the default
/// configuration
///
/// # Errors
///
/// Returns [`SopError::MalformedExpression`] if the input cannot be parsed.
pub fn simplify(sop: &str) -> Result<Simplification, SopError> {
    simplify_with_config(sop, &SimplifyConfig::default())
}

/// Parse and simplify a wire-notation expression
///
/// # Errors
///
/// Returns [`SopError::MalformedExpression`] if the input cannot be parsed.
pub fn simplify_with_config(
    sop: &str,
    config: &SimplifyConfig,
) -> Result<Simplification, SopError> {
    Ok(Expression::parse(sop)?.simplify_with_config(config))
}

/// Both stages applied to one truth table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minimized {
    sop: Expression,
    simplification: Simplification,
}

impl Minimized {
    /// The canonical sum-of-products produced by the generator
    pub fn sop(&self) -> &Expression {
        &self.sop
    }

    /// The simplifier's result for [`Minimized::sop`]
    pub fn simplification(&self) -> &Simplification {
        &self.simplification
    }

    /// The final simplified expression
    pub fn reduced(&self) -> &Expression {
        self.simplification.reduced()
    }
}

/// Generate the SOP of a table and simplify it
///
/// Constant tables skip the identity passes: the result holds the constant
/// with 0 passes and the log entry [`CONSTANT_RESULT`].
///
/// ```
/// use sop_logic::{minimize_truth_table, SimplifyConfig, TruthTable, CONSTANT_RESULT};
///
/// # fn main() -> std::io::Result<()> {
/// let table = TruthTable::from_output_str("0000")?;
/// let result = minimize_truth_table(&table, &SimplifyConfig::default());
/// assert_eq!(result.reduced().to_string(), "0");
/// assert_eq!(result.simplification().log_lines(), vec![CONSTANT_RESULT]);
/// # Ok(())
/// # }
/// ```
pub fn minimize_truth_table(table: &TruthTable, config: &SimplifyConfig) -> Minimized {
    let sop = table.to_sop();
    let simplification = sop.simplify_with_config(config);
    Minimized {
        sop,
        simplification,
    }
}
