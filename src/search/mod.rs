//! Backtracking search over filtered domains.
//!
//! [`CspRunner`] copies the date range into one domain per meeting, prunes
//! with node and arc consistency, then searches depth-first for the first
//! complete assignment that satisfies every constraint. [`solve`] is the
//! plain entry point returning the assignment or `None`.
//!
//! # Determinism
//!
//! Domains are ordered sets. With [`ValueOrder::Ascending`] (the default)
//! the returned schedule is the lexicographically smallest solution, index
//! 0 first. [`ValueOrder::Shuffled`] with a fixed seed is reproducible.

mod config;
mod runner;
mod types;

pub use config::{SolverConfig, ValueOrder};
pub use runner::{solve, CspRunner};
pub use types::{CspResult, SolveStatus};
