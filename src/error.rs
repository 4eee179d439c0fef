//! Error type shared by the model, filtering and search layers.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type CspResultOf<T> = Result<T, CspError>;

/// Structurally invalid input.
///
/// Unsatisfiability is not an error: it is reported as `Ok(None)` by
/// [`crate::solve`] and as [`crate::search::SolveStatus::Unsatisfiable`]
/// by the runner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CspError {
    /// A directed arc was requested for a constraint that is not binary.
    #[error("cannot create an arc from a constraint of arity {arity}")]
    NonBinaryArc { arity: usize },

    /// A constraint references a meeting that does not exist.
    #[error(
        "constraint `{constraint}` references meeting {index}, but only {n_meetings} meetings exist"
    )]
    VariableOutOfRange {
        constraint: String,
        index: usize,
        n_meetings: usize,
    },

    /// A candidate range could not be built.
    #[error("invalid date range: {0}")]
    InvalidRange(String),

    /// The solver configuration failed validation.
    #[error("invalid solver configuration: {0}")]
    InvalidConfig(String),
}
