//! Arc consistency (binary pruning) via AC-3.
//!
//! # Algorithm
//!
//! 1. Every binary constraint contributes a forward arc `L_VAL -> R_VAL`
//!    and, from its reverse, an arc `R_VAL -> L_VAL`
//! 2. The worklist starts with every arc
//! 3. An arc is revised by removing each tail value that no head value supports
//! 4. When a tail domain shrinks, every arc whose head is that tail is re-enqueued
//! 5. Stop when the worklist is empty
//!
//! Domains only shrink, so the worklist eventually drains.
//!
//! # Reference
//!
//! Mackworth, A. K. (1977). "Consistency in Networks of Relations",
//! *Artificial Intelligence* 8(1), 99-118.

use crate::constraint::{BinaryConstraint, DateConstraint};
use crate::error::{CspError, CspResultOf};
use crate::model::Domain;
use log::trace;
use std::collections::BTreeSet;
use std::fmt;

/// A directed arc `tail -> head` derived from a binary constraint.
///
/// `tail` is the constraint's `L_VAL` and `head` its `R_VAL`. Two arcs are
/// equal when their constraints and both endpoints match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirectedArc {
    /// The binary constraint represented by this arc.
    pub constraint: BinaryConstraint,
    /// Meeting whose domain is revised.
    pub tail: usize,
    /// Meeting whose domain supplies support.
    pub head: usize,
}

impl DirectedArc {
    /// Builds the arc for a binary constraint.
    ///
    /// # Errors
    ///
    /// Returns [`CspError::NonBinaryArc`] for a unary constraint.
    pub fn new(constraint: &DateConstraint) -> CspResultOf<Self> {
        match constraint {
            DateConstraint::Binary(c) => Ok(Self::from_binary(*c)),
            DateConstraint::Unary(_) => Err(CspError::NonBinaryArc {
                arity: constraint.arity(),
            }),
        }
    }

    fn from_binary(constraint: BinaryConstraint) -> Self {
        Self {
            constraint,
            tail: constraint.left,
            head: constraint.right,
        }
    }

    /// The arc for the reversed constraint, `head -> tail`.
    pub fn reverse(&self) -> Self {
        Self::from_binary(self.constraint.reverse())
    }
}

impl<'a> TryFrom<&'a DateConstraint> for DirectedArc {
    type Error = CspError;

    fn try_from(constraint: &'a DateConstraint) -> CspResultOf<Self> {
        DirectedArc::new(constraint)
    }
}

impl fmt::Display for DirectedArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Arc[{}, ({} -> {})]",
            DateConstraint::Binary(self.constraint),
            self.tail,
            self.head
        )
    }
}

/// Enforces arc consistency on `domains` for every binary constraint.
///
/// Afterwards, every value left in a tail domain has at least one
/// supporting value in the head domain. Unary constraints are ignored, as
/// are binary constraints referring to a meeting with no domain.
pub fn arc_consistency(domains: &mut [Domain], constraints: &[DateConstraint]) {
    let _ = arc_consistency_counted(domains, constraints);
}

/// [`arc_consistency`], returning the number of arc revisions performed.
pub fn arc_consistency_counted(
    domains: &mut [Domain],
    constraints: &[DateConstraint],
) -> usize {
    let arcs = build_arcs(constraints, domains.len());

    // Arena of original arcs; the worklist holds their indices.
    let mut worklist: BTreeSet<usize> = (0..arcs.len()).collect();
    let mut revisions = 0;

    while let Some(index) = worklist.pop_first() {
        let arc = &arcs[index];
        revisions += 1;
        if remove_inconsistent_values(domains, arc) {
            trace!(
                "{arc} pruned M{} to {} values",
                arc.tail,
                domains[arc.tail].len()
            );
            worklist.extend(
                arcs.iter()
                    .enumerate()
                    .filter(|(_, original)| original.head == arc.tail)
                    .map(|(i, _)| i),
            );
        }
    }
    revisions
}

/// Forward and reverse arcs for every binary constraint over meetings
/// `0..n_domains`, without duplicates.
fn build_arcs(constraints: &[DateConstraint], n_domains: usize) -> Vec<DirectedArc> {
    let mut arcs = BTreeSet::new();
    for constraint in constraints {
        if constraint.max_var() >= n_domains {
            continue;
        }
        if let Ok(arc) = DirectedArc::new(constraint) {
            arcs.insert(arc);
            arcs.insert(arc.reverse());
        }
    }
    arcs.into_iter().collect()
}

/// Removes every tail value without support in the head domain.
///
/// Returns whether the tail domain changed. An arc referring to a meeting
/// with no domain changes nothing.
pub fn remove_inconsistent_values(domains: &mut [Domain], arc: &DirectedArc) -> bool {
    let (Some(head), Some(tail)) = (domains.get(arc.head), domains.get(arc.tail)) else {
        return false;
    };
    let unsupported: Vec<_> = tail
        .iter()
        .filter(|tail_value| {
            !head
                .iter()
                .any(|head_value| arc.constraint.is_satisfied_by(**tail_value, *head_value))
        })
        .copied()
        .collect();

    let tail = &mut domains[arc.tail];
    for value in &unsupported {
        tail.remove(value);
    }
    !unsupported.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::Comparison;
    use chrono::{NaiveDate, NaiveDateTime};

    fn jan(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn days(range: std::ops::RangeInclusive<u32>) -> Domain {
        range.map(jan).collect()
    }

    #[test]
    fn test_arc_from_binary() {
        let arc = DirectedArc::new(&DateConstraint::before(2, 5)).unwrap();
        assert_eq!(arc.tail, 2);
        assert_eq!(arc.head, 5);
        assert_eq!(arc.to_string(), "Arc[M2 < M5, (2 -> 5)]");

        let rev = arc.reverse();
        assert_eq!(rev.tail, 5);
        assert_eq!(rev.head, 2);
        assert_eq!(rev.constraint.comparison, Comparison::Greater);
    }

    #[test]
    fn test_arc_from_unary_fails() {
        let err = DirectedArc::new(&DateConstraint::not_on_weekend(0)).unwrap_err();
        assert_eq!(err, CspError::NonBinaryArc { arity: 1 });
        assert!(DirectedArc::try_from(&DateConstraint::on_date(1, jan(1))).is_err());
    }

    #[test]
    fn test_arc_equality() {
        let a = DirectedArc::new(&DateConstraint::before(0, 1)).unwrap();
        let b = DirectedArc::new(&DateConstraint::before(0, 1)).unwrap();
        let c = DirectedArc::new(&DateConstraint::after(1, 0)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.reverse(), c);

        // same endpoints, different relation
        let d = DirectedArc::new(&DateConstraint::different_time(0, 1)).unwrap();
        assert_eq!((a.tail, a.head), (d.tail, d.head));
        assert_ne!(a, d);
    }

    #[test]
    fn test_remove_inconsistent_values() {
        let mut domains = vec![days(1..=2), days(1..=2)];
        let arc = DirectedArc::new(&DateConstraint::before(0, 1)).unwrap();

        assert!(remove_inconsistent_values(&mut domains, &arc));
        assert_eq!(domains[0], days(1..=1));
        assert_eq!(domains[1], days(1..=2));

        // already consistent
        assert!(!remove_inconsistent_values(&mut domains, &arc));
    }

    #[test]
    fn test_two_meeting_ordering() {
        let mut domains = vec![days(1..=2), days(1..=2)];
        arc_consistency(&mut domains, &[DateConstraint::before(0, 1)]);
        assert_eq!(domains[0], days(1..=1));
        assert_eq!(domains[1], days(2..=2));
    }

    #[test]
    fn test_propagates_along_chain() {
        let mut domains = vec![days(1..=3), days(1..=3), days(1..=3)];
        arc_consistency(
            &mut domains,
            &[DateConstraint::before(0, 1), DateConstraint::before(1, 2)],
        );
        assert_eq!(domains[0], days(1..=1));
        assert_eq!(domains[1], days(2..=2));
        assert_eq!(domains[2], days(3..=3));
    }

    #[test]
    fn test_cycle_empties_domains() {
        let mut domains = vec![days(1..=4), days(1..=4), days(1..=4)];
        arc_consistency(
            &mut domains,
            &[
                DateConstraint::before(0, 1),
                DateConstraint::before(1, 2),
                DateConstraint::before(2, 0),
            ],
        );
        assert!(domains.iter().all(|d| d.is_empty()));
    }

    #[test]
    fn test_unary_constraints_ignored() {
        let mut domains = vec![days(1..=3)];
        let revisions =
            arc_consistency_counted(&mut domains, &[DateConstraint::on_date(0, jan(1))]);
        assert_eq!(revisions, 0);
        assert_eq!(domains[0], days(1..=3));
    }

    #[test]
    fn test_constraints_without_domains_ignored() {
        let mut domains = vec![days(1..=3)];
        let revisions = arc_consistency_counted(
            &mut domains,
            &[DateConstraint::before(0, 1), DateConstraint::after(4, 2)],
        );
        assert_eq!(revisions, 0);
        assert_eq!(domains[0], days(1..=3));

        let arc = DirectedArc::new(&DateConstraint::before(0, 1)).unwrap();
        assert!(!remove_inconsistent_values(&mut domains, &arc));
        assert!(!remove_inconsistent_values(&mut domains, &arc.reverse()));
        assert_eq!(domains[0], days(1..=3));
    }

    #[test]
    fn test_idempotent() {
        let constraints = [
            DateConstraint::before(0, 1),
            DateConstraint::different_time(1, 2),
            DateConstraint::after(2, 0),
        ];
        let mut domains = vec![days(1..=5), days(2..=4), days(1..=3)];
        arc_consistency(&mut domains, &constraints);
        let once = domains.clone();
        arc_consistency(&mut domains, &constraints);
        assert_eq!(domains, once);
    }

    #[test]
    fn test_duplicate_constraints_share_arcs() {
        let mut domains = vec![days(1..=3), days(1..=3)];
        // before(0, 1) and after(1, 0) yield the same pair of arcs
        let revisions = arc_consistency_counted(
            &mut domains,
            &[DateConstraint::before(0, 1), DateConstraint::after(1, 0)],
        );
        assert!(revisions >= 2);
        let arcs = build_arcs(
            &[DateConstraint::before(0, 1), DateConstraint::after(1, 0)],
            2,
        );
        assert_eq!(arcs.len(), 2);
    }
}
