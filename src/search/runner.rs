//! Backtracking search execution.
//!
//! # Algorithm
//!
//! 1. Copy the date range into one independent domain per meeting
//! 2. Prune with node consistency, then arc consistency
//! 3. Assign meetings in index order. For meeting `k`, try each remaining
//!    candidate: append it, check every constraint against the partial
//!    assignment, and descend to meeting `k + 1` only if all hold
//! 4. When a meeting's candidates run out, undo the previous meeting's
//!    choice and continue with its next candidate
//! 5. Stop at the first complete consistent assignment, or report
//!    unsatisfiability when meeting 0's candidates run out
//!
//! The descent is an explicit stack of candidate iterators, one per
//! assigned meeting, so depth is bounded by memory rather than the call
//! stack.
//!
//! # Reference
//!
//! Russell, S. & Norvig, P. (2010). *Artificial Intelligence: A Modern
//! Approach*, 3rd ed., ch. 6.

use super::config::{SolverConfig, ValueOrder};
use super::types::{CspResult, SolveStatus};
use crate::constraint::DateConstraint;
use crate::error::{CspError, CspResultOf};
use crate::filter::{arc_consistency_counted, node_consistency};
use crate::model::{Domain, MeetingProblem};
use chrono::NaiveDateTime;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Schedules `n_meetings` meetings into `date_range` subject to `constraints`.
///
/// Returns `Ok(Some(assignment))` with `assignment[i]` the datetime of
/// meeting `i`, or `Ok(None)` when no assignment satisfies every
/// constraint. `date_range` is never modified.
///
/// # Errors
///
/// Returns [`CspError::VariableOutOfRange`] if a constraint refers to a
/// meeting index `>= n_meetings`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_calsat::constraint::DateConstraint;
/// use u_calsat::model::daily_range;
/// use u_calsat::solve;
///
/// let jan = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let range = daily_range(jan(1), jan(2)).unwrap();
///
/// let schedule = solve(2, &range, &[DateConstraint::before(0, 1)]).unwrap().unwrap();
/// assert_eq!(schedule[0].date(), jan(1));
/// assert_eq!(schedule[1].date(), jan(2));
/// ```
pub fn solve(
    n_meetings: usize,
    date_range: &Domain,
    constraints: &[DateConstraint],
) -> CspResultOf<Option<Vec<NaiveDateTime>>> {
    let problem = MeetingProblem::new(n_meetings, date_range.clone())
        .with_constraints(constraints.iter().copied());
    let result = CspRunner::run(&problem, &SolverConfig::default())?;
    Ok(result.assignment)
}

/// Executes filtering and backtracking search.
pub struct CspRunner;

impl CspRunner {
    /// Solves the problem.
    pub fn run(problem: &MeetingProblem, config: &SolverConfig) -> CspResultOf<CspResult> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Solves the problem with an optional cancellation token.
    ///
    /// The token is polled before every tentative assignment.
    pub fn run_with_cancel(
        problem: &MeetingProblem,
        config: &SolverConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> CspResultOf<CspResult> {
        config.validate().map_err(CspError::InvalidConfig)?;
        problem.validate()?;

        let start_time = Instant::now();

        let mut domains = problem.initial_domains();
        let initial_size = total_size(&domains);

        if config.node_consistency {
            node_consistency(&mut domains, &problem.constraints);
        }
        let after_node = total_size(&domains);

        let arc_revisions = if config.arc_consistency {
            arc_consistency_counted(&mut domains, &problem.constraints)
        } else {
            0
        };
        let after_arc = total_size(&domains);

        debug!(
            "filtered {} meetings: {} -> {} (node) -> {} (arc) candidates, {} arc revisions",
            problem.n_meetings, initial_size, after_node, after_arc, arc_revisions
        );

        let mut search =
            Backtracker::new(&domains, &problem.constraints, config, cancel.as_deref());
        let outcome = search.run();

        let (status, assignment) = match outcome {
            Outcome::Found(assignment) => (SolveStatus::Satisfied, Some(assignment)),
            Outcome::Exhausted => (SolveStatus::Unsatisfiable, None),
            Outcome::NodeLimit => (SolveStatus::NodeLimit, None),
            Outcome::Cancelled => (SolveStatus::Cancelled, None),
        };

        debug!(
            "search finished: {:?} after {} nodes, {} backtracks",
            status, search.nodes_explored, search.backtracks
        );

        Ok(CspResult {
            status,
            assignment,
            nodes_explored: search.nodes_explored,
            backtracks: search.backtracks,
            pruned_by_node: initial_size - after_node,
            pruned_by_arc: after_node - after_arc,
            arc_revisions,
            elapsed: start_time.elapsed(),
        })
    }
}

fn total_size(domains: &[Domain]) -> usize {
    domains.iter().map(Domain::len).sum()
}

enum Outcome {
    Found(Vec<NaiveDateTime>),
    Exhausted,
    NodeLimit,
    Cancelled,
}

/// Depth-first search state over filtered domains.
struct Backtracker<'a> {
    domains: &'a [Domain],
    constraints: &'a [DateConstraint],
    config: &'a SolverConfig,
    cancel: Option<&'a AtomicBool>,
    /// Only present for [`ValueOrder::Shuffled`].
    rng: Option<StdRng>,
    nodes_explored: usize,
    backtracks: usize,
}

impl<'a> Backtracker<'a> {
    fn new(
        domains: &'a [Domain],
        constraints: &'a [DateConstraint],
        config: &'a SolverConfig,
        cancel: Option<&'a AtomicBool>,
    ) -> Self {
        let rng = (config.value_order == ValueOrder::Shuffled).then(|| match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        });
        Self {
            domains,
            constraints,
            config,
            cancel,
            rng,
            nodes_explored: 0,
            backtracks: 0,
        }
    }

    fn run(&mut self) -> Outcome {
        let n = self.domains.len();
        let mut assignment: Vec<NaiveDateTime> = Vec::with_capacity(n);

        if n == 0 {
            return if self.is_consistent(&assignment) {
                Outcome::Found(assignment)
            } else {
                Outcome::Exhausted
            };
        }

        // frames[k] holds the untried candidates for meeting k
        let mut frames = vec![self.candidates(0)];

        while let Some(frame) = frames.last_mut() {
            match frame.next() {
                Some(value) => {
                    if self.is_cancelled() {
                        return Outcome::Cancelled;
                    }
                    if self.config.max_nodes > 0 && self.nodes_explored >= self.config.max_nodes {
                        return Outcome::NodeLimit;
                    }
                    self.nodes_explored += 1;

                    assignment.push(value);
                    if !self.is_consistent(&assignment) {
                        assignment.pop();
                        continue;
                    }
                    if assignment.len() == n {
                        return Outcome::Found(assignment);
                    }
                    frames.push(self.candidates(assignment.len()));
                }
                None => {
                    frames.pop();
                    // Undo the parent's choice; a no-op once meeting 0 is exhausted.
                    assignment.pop();
                    self.backtracks += 1;
                }
            }
        }

        Outcome::Exhausted
    }

    fn candidates(&mut self, var: usize) -> std::vec::IntoIter<NaiveDateTime> {
        let domain = &self.domains[var];
        let mut values: Vec<NaiveDateTime> = match self.config.value_order {
            ValueOrder::Descending => domain.iter().rev().copied().collect(),
            ValueOrder::Ascending | ValueOrder::Shuffled => domain.iter().copied().collect(),
        };
        if let Some(rng) = self.rng.as_mut() {
            values.shuffle(rng);
        }
        values.into_iter()
    }

    fn is_consistent(&self, assignment: &[NaiveDateTime]) -> bool {
        all_satisfied(self.constraints, assignment, self.config.parallel)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

#[cfg(feature = "parallel")]
fn all_satisfied(
    constraints: &[DateConstraint],
    assignment: &[NaiveDateTime],
    parallel: bool,
) -> bool {
    use rayon::prelude::*;

    if parallel {
        constraints
            .par_iter()
            .all(|c| c.is_satisfied_by_assignment(assignment))
    } else {
        constraints
            .iter()
            .all(|c| c.is_satisfied_by_assignment(assignment))
    }
}

#[cfg(not(feature = "parallel"))]
fn all_satisfied(
    constraints: &[DateConstraint],
    assignment: &[NaiveDateTime],
    _parallel: bool,
) -> bool {
    constraints
        .iter()
        .all(|c| c.is_satisfied_by_assignment(assignment))
}
