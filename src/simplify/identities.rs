//! The identity catalog
//!
//! Each identity scans the current terms and reports the first place it
//! applies as a [`Rewrite`]. Candidates are visited in canonical term order
//! (see [`Term::canonical_cmp`]), with the written position breaking ties, so
//! the choice never depends on how the input happened to list its terms.

use super::Identity;
use crate::expression::{Expression, Term, Variable};

/// One application of an identity, ready to be spliced into the term list
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rewrite {
    pub(crate) identity: Identity,
    /// Positions of the consumed terms, each with its replacement (`None`
    /// removes the term)
    pub(crate) edits: Vec<(usize, Option<Term>)>,
    /// The consumed terms reduce to the constant `1`
    pub(crate) tautology: bool,
}

impl Rewrite {
    fn remove(identity: Identity, position: usize) -> Self {
        Rewrite {
            identity,
            edits: vec![(position, None)],
            tautology: false,
        }
    }

    /// Apply the rewrite to the terms it was found in
    pub(crate) fn apply(&self, terms: &[Term]) -> Expression {
        if self.tautology {
            return Expression::Constant(true);
        }
        let rewritten = terms
            .iter()
            .enumerate()
            .filter_map(|(position, term)| {
                match self.edits.iter().find(|(at, _)| *at == position) {
                    Some((_, replacement)) => replacement.clone(),
                    None => Some(term.clone()),
                }
            })
            .collect();
        Expression::from_terms(rewritten)
    }

    /// The consumed terms as an expression, in the order they were matched
    pub(crate) fn consumed(&self, terms: &[Term]) -> Expression {
        Expression::from_terms(self.edits.iter().map(|(at, _)| terms[*at].clone()).collect())
    }

    /// What the consumed terms were replaced with
    pub(crate) fn produced(&self) -> Expression {
        if self.tautology {
            Expression::Constant(true)
        } else {
            Expression::from_terms(self.edits.iter().filter_map(|(_, t)| t.clone()).collect())
        }
    }
}

/// Term positions in canonical order, ties broken by position
pub(crate) fn candidate_order(terms: &[Term]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..terms.len()).collect();
    order.sort_by(|&a, &b| terms[a].canonical_cmp(&terms[b]).then(a.cmp(&b)));
    order
}

impl Identity {
    /// Find the first application of this identity, if any
    pub(crate) fn find(self, terms: &[Term], order: &[usize]) -> Option<Rewrite> {
        match self {
            Identity::Complement => find_complement(terms, order),
            Identity::Idempotence => find_idempotence(terms, order),
            Identity::Absorption => find_absorption(terms, order),
            Identity::ComplementPairMerge => find_merge(terms, order),
            Identity::RedundantLiteral => find_redundant_literal(terms, order),
        }
    }
}

/// `XX# = 0`: a term holding a literal and its complement never holds
fn find_complement(terms: &[Term], order: &[usize]) -> Option<Rewrite> {
    order
        .iter()
        .find(|&&i| terms[i].is_contradiction())
        .map(|&i| Rewrite::remove(Identity::Complement, i))
}

/// `XX = X` inside a term, and `T + T = T` across terms
fn find_idempotence(terms: &[Term], order: &[usize]) -> Option<Rewrite> {
    for &i in order {
        if terms[i].has_repeated_literals() {
            return Some(Rewrite {
                identity: Identity::Idempotence,
                edits: vec![(i, Some(terms[i].deduplicated()))],
                tautology: false,
            });
        }
        let duplicate = order
            .iter()
            .copied()
            .find(|&j| j != i && terms[i].same_literals(&terms[j]));
        if let Some(j) = duplicate {
            let (keep, drop) = (i.min(j), i.max(j));
            return Some(Rewrite {
                identity: Identity::Idempotence,
                edits: vec![(keep, Some(terms[keep].clone())), (drop, None)],
                tautology: false,
            });
        }
    }
    None
}

/// `X + XY = X`: a term containing every literal of another is redundant
fn find_absorption(terms: &[Term], order: &[usize]) -> Option<Rewrite> {
    for &i in order {
        for &j in order {
            if i == j || terms[i].same_literals(&terms[j]) {
                continue;
            }
            // Whichever of the pair is smaller absorbs the other
            let (small, large) = if terms[i].is_subset_of(&terms[j]) {
                (i, j)
            } else if terms[j].is_subset_of(&terms[i]) {
                (j, i)
            } else {
                continue;
            };
            return Some(Rewrite {
                identity: Identity::Absorption,
                edits: vec![(small, Some(terms[small].clone())), (large, None)],
                tautology: false,
            });
        }
    }
    None
}

/// `XY + XY# = X`: two terms over the same variables differing in the sign
/// of exactly one of them
fn find_merge(terms: &[Term], order: &[usize]) -> Option<Rewrite> {
    for &i in order {
        for &j in order {
            if i == j || terms[i].support() != terms[j].support() {
                continue;
            }
            let Some(var) = single_conflict(&terms[i], &terms[j]) else {
                continue;
            };
            let (keep, drop) = (i.min(j), i.max(j));
            return Some(match terms[keep].without(var) {
                Some(merged) => Rewrite {
                    identity: Identity::ComplementPairMerge,
                    edits: vec![(keep, Some(merged)), (drop, None)],
                    tautology: false,
                },
                None => Rewrite {
                    identity: Identity::ComplementPairMerge,
                    edits: vec![(keep, None), (drop, None)],
                    tautology: true,
                },
            });
        }
    }
    None
}

/// `X + X#Y = X + Y`, generalized: when `P·v` and `P·Q·v#` are both present,
/// the `v#` of the second is redundant because `P·v + P·Q·v# = P·v + P·Q`
fn find_redundant_literal(terms: &[Term], order: &[usize]) -> Option<Rewrite> {
    for &i in order {
        for &j in order {
            if i == j || terms[i].support() == terms[j].support() {
                continue;
            }
            let Some(var) = single_conflict(&terms[i], &terms[j]) else {
                continue;
            };
            // A lone literal covers anything: `v + v#Q = v + Q`
            let covered = match terms[i].without(var) {
                None => true,
                Some(rest) => terms[j]
                    .without(var)
                    .is_some_and(|target| rest.is_subset_of(&target)),
            };
            if !covered {
                continue;
            }
            if let Some(reduced) = terms[j].without(var) {
                return Some(Rewrite {
                    identity: Identity::RedundantLiteral,
                    edits: vec![(i, Some(terms[i].clone())), (j, Some(reduced))],
                    tautology: false,
                });
            }
        }
    }
    None
}

/// Variables appearing with opposite signs in the two terms
fn conflicts(x: &Term, y: &Term) -> u32 {
    let (x_pos, x_neg) = x.masks();
    let (y_pos, y_neg) = y.masks();
    (x_pos & y_neg) | (x_neg & y_pos)
}

/// The variable of the only sign conflict between two terms, if there is
/// exactly one
fn single_conflict(x: &Term, y: &Term) -> Option<Variable> {
    let mask = conflicts(x, y);
    (mask.count_ones() == 1).then(|| Variable::from_mask(mask))
}
