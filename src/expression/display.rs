//! Wire-notation formatting for expressions

use super::{Expression, Literal, Term, Variable};
use std::fmt;

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.variable())?;
        if self.is_negated() {
            write!(f, "#")?;
        }
        Ok(())
    }
}

/// Literals are written back to back, in the order they were given
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for literal in self.literals() {
            write!(f, "{}", literal)?;
        }
        Ok(())
    }
}

/// Display formatting in wire notation
///
/// Terms are joined with `+` without spaces, constants print as `0` and `1`.
/// The output parses back to an equal expression.
///
/// # Examples
///
/// ```
/// use sop_logic::Expression;
///
/// # fn main() -> std::io::Result<()> {
/// let expr = Expression::parse("AB#+A#B")?;
/// assert_eq!(format!("{}", expr), "AB#+A#B");
/// assert_eq!(Expression::Constant(false).to_string(), "0");
/// # Ok(())
/// # }
/// ```
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Constant(value) => write!(f, "{}", if *value { "1" } else { "0" }),
            Expression::Sum(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        write!(f, "+")?;
                    }
                    write!(f, "{}", term)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Expression {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Expression {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = String::deserialize(deserializer)?;
        Expression::parse(&wire).map_err(serde::de::Error::custom)
    }
}
