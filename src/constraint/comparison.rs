//! Ordering relations between datetimes.

use chrono::{Datelike, NaiveDateTime, Weekday};
use std::fmt;

/// A binary relation over datetimes, read as `a <op> b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Comparison {
    Less,
    LessEq,
    Greater,
    GreaterEq,
    Equal,
    NotEqual,
}

impl Comparison {
    /// Evaluates `a <op> b`.
    pub fn holds(self, a: NaiveDateTime, b: NaiveDateTime) -> bool {
        match self {
            Comparison::Less => a < b,
            Comparison::LessEq => a <= b,
            Comparison::Greater => a > b,
            Comparison::GreaterEq => a >= b,
            Comparison::Equal => a == b,
            Comparison::NotEqual => a != b,
        }
    }

    /// The relation with its operands swapped.
    ///
    /// `self.holds(a, b) == self.flip().holds(b, a)` for every `a`, `b`.
    pub fn flip(self) -> Self {
        match self {
            Comparison::Less => Comparison::Greater,
            Comparison::LessEq => Comparison::GreaterEq,
            Comparison::Greater => Comparison::Less,
            Comparison::GreaterEq => Comparison::LessEq,
            Comparison::Equal => Comparison::Equal,
            Comparison::NotEqual => Comparison::NotEqual,
        }
    }

    /// Operator symbol used by `Display`.
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Less => "<",
            Comparison::LessEq => "<=",
            Comparison::Greater => ">",
            Comparison::GreaterEq => ">=",
            Comparison::Equal => "==",
            Comparison::NotEqual => "!=",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A test on a single meeting's datetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryPredicate {
    /// `meeting <op> date`.
    Compare(Comparison, NaiveDateTime),

    /// The meeting must fall on Monday through Friday.
    NotOnWeekend,

    /// The meeting must fall on the given day of the week.
    OnWeekday(Weekday),

    /// The meeting must not fall on the given day of the week.
    NotOnWeekday(Weekday),
}

impl UnaryPredicate {
    /// Evaluates the predicate on a candidate datetime.
    pub fn holds(self, value: NaiveDateTime) -> bool {
        match self {
            UnaryPredicate::Compare(op, date) => op.holds(value, date),
            UnaryPredicate::NotOnWeekend => !is_weekend(value.weekday()),
            UnaryPredicate::OnWeekday(day) => value.weekday() == day,
            UnaryPredicate::NotOnWeekday(day) => value.weekday() != day,
        }
    }
}

fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}
