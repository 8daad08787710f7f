//! Fixed-point simplification of sum-of-products expressions
//!
//! The simplifier rewrites an expression with a catalog of boolean identities
//! until none of them applies. Each pass applies exactly one identity once:
//! the first identity in priority order that applies anywhere, at the first
//! place it applies. Every identity removes at least one literal, so the loop
//! always terminates.
//!
//! | Priority | Identity | Rule |
//! |---|---|---|
//! | 1 | complement | `XX# = 0` |
//! | 2 | idempotence | `XX = X`, `T + T = T` |
//! | 3 | absorption | `X + XY = X` |
//! | 4 | complement-pair merge | `XY + XY# = X` |
//! | 5 | redundant-literal elimination | `X + X#Y = X + Y` |
//!
//! The fifth identity can be switched off with
//! [`SimplifyConfig::extended_catalog`]; without it, results are not always
//! minimal (`A + A#B` stays as it is).
//!
//! The reduced expression is returned in canonical form, terms sorted by
//! [`Term::canonical_cmp`](crate::Term::canonical_cmp).
//!
//! ```
//! use sop_logic::Expression;
//!
//! # fn main() -> std::io::Result<()> {
//! let sop = Expression::parse("AB#+AB+A#B")?;
//! let result = sop.simplify();
//! assert_eq!(result.reduced().to_string(), "A+B");
//! assert_eq!(result.passes(), 2);
//! # Ok(())
//! # }
//! ```

mod identities;

use crate::expression::Expression;
use identities::candidate_order;
use log::{debug, trace, warn};
use std::fmt;

/// Log line recorded when the input is a constant and no pass runs
pub const CONSTANT_RESULT: &str = "Predefined constant result";

/// A boolean identity the simplifier can apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Identity {
    /// `XX# = 0`: drop a term containing a literal and its complement
    Complement,
    /// `XX = X` and `T + T = T`: drop repeated literals or terms
    Idempotence,
    /// `X + XY = X`: drop a term implied by another
    Absorption,
    /// `XY + XY# = X`: merge two terms differing in one sign
    ComplementPairMerge,
    /// `X + X#Y = X + Y`: drop a literal made redundant by another term
    RedundantLiteral,
}

impl Identity {
    /// The full catalog, in priority order
    pub const CATALOG: [Identity; 5] = [
        Identity::Complement,
        Identity::Idempotence,
        Identity::Absorption,
        Identity::ComplementPairMerge,
        Identity::RedundantLiteral,
    ];

    /// Human-readable name used in logs
    pub fn name(self) -> &'static str {
        match self {
            Identity::Complement => "complement",
            Identity::Idempotence => "idempotence",
            Identity::Absorption => "absorption",
            Identity::ComplementPairMerge => "complement-pair merge",
            Identity::RedundantLiteral => "redundant-literal elimination",
        }
    }

    /// Whether the identity belongs to the minimal four-rule catalog
    pub fn is_core(self) -> bool {
        self != Identity::RedundantLiteral
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for the simplifier
///
/// # Examples
///
/// ```
/// use sop_logic::{Expression, SimplifyConfig};
///
/// # fn main() -> std::io::Result<()> {
/// let config = SimplifyConfig {
///     extended_catalog: false,
///     ..Default::default()
/// };
/// let result = Expression::parse("A+A#B")?.simplify_with_config(&config);
/// assert_eq!(result.reduced().to_string(), "A#B+A");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimplifyConfig {
    /// Upper bound on the number of passes
    ///
    /// `None` uses the literal count plus the term count of the input, which
    /// no run can exceed.
    pub max_passes: Option<usize>,
    /// Include redundant-literal elimination after the four core identities
    pub extended_catalog: bool,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        SimplifyConfig {
            max_passes: None,
            extended_catalog: true,
        }
    }
}

impl SimplifyConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// The identities enabled by this configuration, in priority order
    pub fn catalog(&self) -> Vec<Identity> {
        Identity::CATALOG
            .into_iter()
            .filter(|identity| self.extended_catalog || identity.is_core())
            .collect()
    }

    fn pass_cap(&self, input: &Expression) -> usize {
        self.max_passes
            .unwrap_or_else(|| input.literal_count() + input.num_terms())
    }
}

/// One identity application
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdentityRecord {
    /// Pass number, starting at 1
    pub pass: usize,
    /// The identity applied
    pub identity: Identity,
    /// Terms the identity matched
    pub consumed: Expression,
    /// What replaced them
    pub produced: Expression,
}

impl fmt::Display for IdentityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pass {}: {} {} -> {}",
            self.pass, self.identity, self.consumed, self.produced
        )
    }
}

/// An entry of the identity log
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TraceEntry {
    /// The input was a constant and was returned unchanged
    Constant(bool),
    /// An identity was applied
    Applied(IdentityRecord),
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEntry::Constant(_) => f.write_str(CONSTANT_RESULT),
            TraceEntry::Applied(record) => record.fmt(f),
        }
    }
}

/// Result of simplifying an expression
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Simplification {
    original: Expression,
    reduced: Expression,
    passes: usize,
    trace: Vec<TraceEntry>,
    reached_fixed_point: bool,
}

impl Simplification {
    /// The expression as given
    pub fn original(&self) -> &Expression {
        &self.original
    }

    /// The simplified expression, in canonical form
    pub fn reduced(&self) -> &Expression {
        &self.reduced
    }

    /// Consume the result, keeping only the simplified expression
    pub fn into_reduced(self) -> Expression {
        self.reduced
    }

    /// Number of passes that applied an identity
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// The identity log, in application order
    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace
    }

    /// The identity log rendered one line per entry
    pub fn log_lines(&self) -> Vec<String> {
        self.trace.iter().map(ToString::to_string).collect()
    }

    /// `false` if the pass cap stopped the run before a fixed point
    pub fn reached_fixed_point(&self) -> bool {
        self.reached_fixed_point
    }
}

impl Expression {
    /// Simplify with the default configuration
    ///
    /// See the [module documentation](crate::simplify) for the identities
    /// applied.
    pub fn simplify(&self) -> Simplification {
        self.simplify_with_config(&SimplifyConfig::default())
    }

    /// Simplify with a custom configuration
    ///
    /// Constants are returned unchanged after 0 passes, with the single log
    /// entry [`CONSTANT_RESULT`].
    ///
    /// ```
    /// use sop_logic::{Expression, SimplifyConfig};
    ///
    /// # fn main() -> std::io::Result<()> {
    /// let config = SimplifyConfig {
    ///     max_passes: Some(1),
    ///     ..Default::default()
    /// };
    /// let result = Expression::parse("AB#+AB+A#B")?.simplify_with_config(&config);
    /// assert_eq!(result.passes(), 1);
    /// assert!(!result.reached_fixed_point());
    /// # Ok(())
    /// # }
    /// ```
    pub fn simplify_with_config(&self, config: &SimplifyConfig) -> Simplification {
        if let Expression::Constant(value) = self {
            debug!("simplify: constant input {}", u8::from(*value));
            return Simplification {
                original: self.clone(),
                reduced: self.clone(),
                passes: 0,
                trace: vec![TraceEntry::Constant(*value)],
                reached_fixed_point: true,
            };
        }

        let catalog = config.catalog();
        let cap = config.pass_cap(self);
        let mut current = self.clone();
        let mut trace = Vec::new();
        let mut passes = 0;

        debug!(
            "simplify: {} terms, {} literals, cap {} passes",
            self.num_terms(),
            self.literal_count(),
            cap
        );

        let reached_fixed_point = loop {
            let terms = match &current {
                Expression::Constant(_) => break true,
                Expression::Sum(terms) => terms,
            };
            let order = candidate_order(terms);
            let Some(rewrite) = catalog
                .iter()
                .find_map(|identity| identity.find(terms, &order))
            else {
                break true;
            };
            if passes >= cap {
                warn!("simplify: stopped at pass cap {} before a fixed point", cap);
                break false;
            }

            let next = rewrite.apply(terms);
            if next.complexity() >= current.complexity() {
                warn!(
                    "simplify: rejected {} rewrite of {} that does not reduce complexity",
                    rewrite.identity, current
                );
                break true;
            }

            passes += 1;
            let record = IdentityRecord {
                pass: passes,
                identity: rewrite.identity,
                consumed: rewrite.consumed(terms),
                produced: rewrite.produced(),
            };
            debug!("simplify: {}", record);
            trace!("simplify: after pass {}: {}", passes, next);
            trace.push(TraceEntry::Applied(record));
            current = next;
        };

        let reduced = current.canonical();
        debug!("simplify: {} -> {} in {} passes", self, reduced, passes);
        Simplification {
            original: self.clone(),
            reduced,
            passes,
            trace,
            reached_fixed_point,
        }
    }
}
