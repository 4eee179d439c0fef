//! Date constraint definitions.

use super::comparison::{Comparison, UnaryPredicate};
use chrono::{NaiveDateTime, Weekday};
use std::fmt;

/// A constraint on a single meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnaryConstraint {
    /// Index of the constrained meeting (`L_VAL`).
    pub var: usize,
    /// Test applied to the meeting's datetime.
    pub predicate: UnaryPredicate,
}

impl UnaryConstraint {
    pub fn new(var: usize, predicate: UnaryPredicate) -> Self {
        Self { var, predicate }
    }

    /// Whether `value` is an acceptable datetime for [`Self::var`].
    pub fn is_satisfied_by(&self, value: NaiveDateTime) -> bool {
        self.predicate.holds(value)
    }
}

/// A constraint relating two meetings: `meeting[left] <op> meeting[right]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryConstraint {
    /// Left meeting index (`L_VAL`).
    pub left: usize,
    /// Right meeting index (`R_VAL`).
    pub right: usize,
    /// Relation that must hold between the two datetimes.
    pub comparison: Comparison,
}

impl BinaryConstraint {
    pub fn new(left: usize, right: usize, comparison: Comparison) -> Self {
        Self {
            left,
            right,
            comparison,
        }
    }

    /// Evaluates the relation for concrete left and right datetimes.
    pub fn is_satisfied_by(&self, left: NaiveDateTime, right: NaiveDateTime) -> bool {
        self.comparison.holds(left, right)
    }

    /// The equivalent constraint with its operands swapped.
    ///
    /// `left`/`right` trade places and the comparison is flipped, so
    /// `c.is_satisfied_by(a, b) == c.reverse().is_satisfied_by(b, a)`.
    pub fn reverse(&self) -> Self {
        Self {
            left: self.right,
            right: self.left,
            comparison: self.comparison.flip(),
        }
    }
}

/// A constraint over meeting datetimes.
///
/// Meetings are identified by their position `0..n` in the schedule.
/// Constraints are immutable values; solving never modifies them.
///
/// # Examples
///
/// ```
/// use u_calsat::constraint::DateConstraint;
///
/// let c = DateConstraint::before(0, 1);
/// assert_eq!(c.arity(), 2);
/// assert_eq!(c.left(), 0);
/// assert_eq!(c.right(), Some(1));
/// assert_eq!(c.to_string(), "M0 < M1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateConstraint {
    Unary(UnaryConstraint),
    Binary(BinaryConstraint),
}

impl DateConstraint {
    /// `meeting[a] < meeting[b]`.
    pub fn before(a: usize, b: usize) -> Self {
        Self::binary(a, b, Comparison::Less)
    }

    /// `meeting[a] > meeting[b]`.
    pub fn after(a: usize, b: usize) -> Self {
        Self::binary(a, b, Comparison::Greater)
    }

    /// `meeting[a] == meeting[b]`.
    pub fn same_time(a: usize, b: usize) -> Self {
        Self::binary(a, b, Comparison::Equal)
    }

    /// `meeting[a] != meeting[b]`.
    pub fn different_time(a: usize, b: usize) -> Self {
        Self::binary(a, b, Comparison::NotEqual)
    }

    pub fn binary(left: usize, right: usize, comparison: Comparison) -> Self {
        DateConstraint::Binary(BinaryConstraint::new(left, right, comparison))
    }

    pub fn unary(var: usize, predicate: UnaryPredicate) -> Self {
        DateConstraint::Unary(UnaryConstraint::new(var, predicate))
    }

    /// `meeting[var] < date`.
    pub fn before_date(var: usize, date: NaiveDateTime) -> Self {
        Self::unary(var, UnaryPredicate::Compare(Comparison::Less, date))
    }

    /// `meeting[var] > date`.
    pub fn after_date(var: usize, date: NaiveDateTime) -> Self {
        Self::unary(var, UnaryPredicate::Compare(Comparison::Greater, date))
    }

    /// `meeting[var] == date`.
    pub fn on_date(var: usize, date: NaiveDateTime) -> Self {
        Self::unary(var, UnaryPredicate::Compare(Comparison::Equal, date))
    }

    /// `meeting[var] != date`.
    pub fn not_on_date(var: usize, date: NaiveDateTime) -> Self {
        Self::unary(var, UnaryPredicate::Compare(Comparison::NotEqual, date))
    }

    pub fn not_on_weekend(var: usize) -> Self {
        Self::unary(var, UnaryPredicate::NotOnWeekend)
    }

    pub fn on_weekday(var: usize, day: Weekday) -> Self {
        Self::unary(var, UnaryPredicate::OnWeekday(day))
    }

    pub fn not_on_weekday(var: usize, day: Weekday) -> Self {
        Self::unary(var, UnaryPredicate::NotOnWeekday(day))
    }

    /// Number of meetings the constraint relates (1 or 2).
    pub fn arity(&self) -> usize {
        match self {
            DateConstraint::Unary(_) => 1,
            DateConstraint::Binary(_) => 2,
        }
    }

    /// The left meeting index (`L_VAL`).
    pub fn left(&self) -> usize {
        match self {
            DateConstraint::Unary(c) => c.var,
            DateConstraint::Binary(c) => c.left,
        }
    }

    /// The right meeting index (`R_VAL`), for binary constraints only.
    pub fn right(&self) -> Option<usize> {
        match self {
            DateConstraint::Unary(_) => None,
            DateConstraint::Binary(c) => Some(c.right),
        }
    }

    /// Largest meeting index referenced by this constraint.
    pub fn max_var(&self) -> usize {
        match self {
            DateConstraint::Unary(c) => c.var,
            DateConstraint::Binary(c) => c.left.max(c.right),
        }
    }

    /// Evaluates the constraint on concrete values, independent of any assignment.
    ///
    /// `values[0]` is the left meeting's datetime and `values[1]` the right
    /// meeting's. Values not supplied are treated as not yet constraining.
    pub fn is_satisfied_by_values(&self, values: &[NaiveDateTime]) -> bool {
        match (self, values) {
            (DateConstraint::Unary(c), [value, ..]) => c.is_satisfied_by(*value),
            (DateConstraint::Binary(c), [left, right, ..]) => c.is_satisfied_by(*left, *right),
            _ => true,
        }
    }

    /// Evaluates the constraint against a possibly partial assignment.
    ///
    /// `assignment[i]` is meeting `i`'s datetime. A meeting at or beyond
    /// `assignment.len()` is unassigned, and a constraint touching an
    /// unassigned meeting is trivially satisfied.
    pub fn is_satisfied_by_assignment(&self, assignment: &[NaiveDateTime]) -> bool {
        match self {
            DateConstraint::Unary(c) => assignment
                .get(c.var)
                .map_or(true, |value| c.is_satisfied_by(*value)),
            DateConstraint::Binary(c) => match (assignment.get(c.left), assignment.get(c.right)) {
                (Some(left), Some(right)) => c.is_satisfied_by(*left, *right),
                _ => true,
            },
        }
    }

    /// The equivalent constraint with `L_VAL` and `R_VAL` swapped.
    ///
    /// Returns `None` for unary constraints, which have no direction.
    pub fn reverse(&self) -> Option<Self> {
        match self {
            DateConstraint::Unary(_) => None,
            DateConstraint::Binary(c) => Some(DateConstraint::Binary(c.reverse())),
        }
    }
}

impl From<UnaryConstraint> for DateConstraint {
    fn from(c: UnaryConstraint) -> Self {
        DateConstraint::Unary(c)
    }
}

impl From<BinaryConstraint> for DateConstraint {
    fn from(c: BinaryConstraint) -> Self {
        DateConstraint::Binary(c)
    }
}

impl fmt::Display for DateConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateConstraint::Binary(c) => write!(f, "M{} {} M{}", c.left, c.comparison, c.right),
            DateConstraint::Unary(c) => match c.predicate {
                UnaryPredicate::Compare(op, date) => write!(f, "M{} {} {}", c.var, op, date),
                UnaryPredicate::NotOnWeekend => write!(f, "M{} not on weekend", c.var),
                UnaryPredicate::OnWeekday(day) => write!(f, "M{} on {}", c.var, day),
                UnaryPredicate::NotOnWeekday(day) => write!(f, "M{} not on {}", c.var, day),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn jan(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_arity_and_indices() {
        let u = DateConstraint::not_on_weekend(3);
        assert_eq!(u.arity(), 1);
        assert_eq!(u.left(), 3);
        assert_eq!(u.right(), None);
        assert_eq!(u.max_var(), 3);

        let b = DateConstraint::after(4, 1);
        assert_eq!(b.arity(), 2);
        assert_eq!(b.left(), 4);
        assert_eq!(b.right(), Some(1));
        assert_eq!(b.max_var(), 4);
    }

    #[test]
    fn test_satisfied_by_values() {
        let b = DateConstraint::before(0, 1);
        assert!(b.is_satisfied_by_values(&[jan(1), jan(2)]));
        assert!(!b.is_satisfied_by_values(&[jan(2), jan(1)]));

        let u = DateConstraint::not_on_date(0, jan(1));
        assert!(!u.is_satisfied_by_values(&[jan(1)]));
        assert!(u.is_satisfied_by_values(&[jan(2)]));
    }

    #[test]
    fn test_partial_assignment_is_not_constraining() {
        let b = DateConstraint::before(0, 2);
        assert!(b.is_satisfied_by_assignment(&[]));
        assert!(b.is_satisfied_by_assignment(&[jan(3), jan(1)]));
        assert!(!b.is_satisfied_by_assignment(&[jan(3), jan(1), jan(2)]));
        assert!(b.is_satisfied_by_assignment(&[jan(1), jan(1), jan(2)]));

        let u = DateConstraint::on_date(1, jan(5));
        assert!(u.is_satisfied_by_assignment(&[jan(1)]));
        assert!(!u.is_satisfied_by_assignment(&[jan(1), jan(4)]));
    }

    #[test]
    fn test_reverse_is_equivalent() {
        let c = DateConstraint::before(0, 1);
        let r = c.reverse().unwrap();
        assert_eq!(r.left(), 1);
        assert_eq!(r.right(), Some(0));
        assert_eq!(r, DateConstraint::after(1, 0));

        let assignment = [jan(1), jan(2)];
        assert_eq!(
            c.is_satisfied_by_assignment(&assignment),
            r.is_satisfied_by_assignment(&assignment)
        );
        assert!(r.is_satisfied_by_values(&[jan(2), jan(1)]));
        assert_eq!(r.reverse(), Some(c));
    }

    #[test]
    fn test_unary_has_no_reverse() {
        assert!(DateConstraint::not_on_weekend(0).reverse().is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(DateConstraint::before(0, 1).to_string(), "M0 < M1");
        assert_eq!(DateConstraint::different_time(2, 3).to_string(), "M2 != M3");
        assert_eq!(
            DateConstraint::not_on_date(0, jan(1)).to_string(),
            "M0 != 2024-01-01 00:00:00"
        );
        assert_eq!(DateConstraint::not_on_weekend(2).to_string(), "M2 not on weekend");
        assert_eq!(DateConstraint::on_weekday(1, Weekday::Tue).to_string(), "M1 on Tue");
    }
}
