//! Search outcome types.

use chrono::NaiveDateTime;
use std::time::Duration;

/// How a solve run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveStatus {
    /// A complete consistent assignment was found.
    Satisfied,
    /// The search space was exhausted without finding one.
    Unsatisfiable,
    /// The node budget ran out before the search finished.
    NodeLimit,
    /// Cancelled externally before the search finished.
    Cancelled,
}

/// Result of a [`super::CspRunner`] run.
///
/// Only [`SolveStatus::Satisfied`] carries an assignment. Interrupted
/// runs never report a partial one.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CspResult {
    /// Final status.
    pub status: SolveStatus,

    /// `assignment[i]` is meeting `i`'s datetime.
    pub assignment: Option<Vec<NaiveDateTime>>,

    /// Tentative assignments tried during search.
    pub nodes_explored: usize,

    /// Meetings whose candidates were exhausted, forcing an undo.
    pub backtracks: usize,

    /// Values removed by node consistency.
    pub pruned_by_node: usize,

    /// Values removed by arc consistency.
    pub pruned_by_arc: usize,

    /// Arc revisions performed by AC-3.
    pub arc_revisions: usize,

    /// Wall-clock time of the whole run.
    pub elapsed: Duration,
}

impl CspResult {
    /// Whether a solution was found.
    pub fn is_satisfied(&self) -> bool {
        self.status == SolveStatus::Satisfied
    }

    /// Total values removed before search.
    pub fn pruned(&self) -> usize {
        self.pruned_by_node + self.pruned_by_arc
    }
}
