//! Unary and binary date constraints.
//!
//! A constraint is a tagged value, either [`UnaryConstraint`] (one meeting
//! tested against a predicate) or [`BinaryConstraint`] (two meetings related
//! by a [`Comparison`]). The solver branches on arity explicitly instead of
//! dispatching through trait objects.
//!
//! # Key Components
//!
//! - [`DateConstraint`]: arity, `L_VAL`/`R_VAL`, evaluation on values or
//!   on a partial assignment, and reversal of binary constraints
//! - [`Comparison`]: ordering relation with operand flipping
//! - [`UnaryPredicate`]: date comparison and day-of-week tests

mod comparison;
mod model;

pub use comparison::{Comparison, UnaryPredicate};
pub use model::{BinaryConstraint, DateConstraint, UnaryConstraint};
