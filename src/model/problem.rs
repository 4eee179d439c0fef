//! Meeting scheduling problem definition.

use super::range::Domain;
use crate::constraint::DateConstraint;
use crate::error::{CspError, CspResultOf};

/// A calendar satisfaction problem.
///
/// Schedules `n_meetings` meetings, each into one datetime drawn from
/// `date_range`, such that every constraint holds. Meeting `i` is the
/// variable with index `i`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_calsat::constraint::DateConstraint;
/// use u_calsat::model::{daily_range, MeetingProblem};
///
/// let range = daily_range(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
/// ).unwrap();
///
/// let mut problem = MeetingProblem::new(3, range);
/// problem.add_constraint(DateConstraint::before(0, 1));
/// problem.add_constraint(DateConstraint::before(1, 2));
/// assert!(problem.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeetingProblem {
    /// Number of meetings, indexed `0..n_meetings`.
    pub n_meetings: usize,
    /// Candidate datetimes shared by every meeting.
    pub date_range: Domain,
    /// Constraints over meeting indices.
    pub constraints: Vec<DateConstraint>,
}

impl MeetingProblem {
    /// Creates a problem with no constraints.
    pub fn new(n_meetings: usize, date_range: Domain) -> Self {
        Self {
            n_meetings,
            date_range,
            constraints: Vec::new(),
        }
    }

    /// Adds a constraint.
    pub fn add_constraint(&mut self, constraint: DateConstraint) {
        self.constraints.push(constraint);
    }

    /// Adds several constraints, builder style.
    pub fn with_constraints(
        mut self,
        constraints: impl IntoIterator<Item = DateConstraint>,
    ) -> Self {
        self.constraints.extend(constraints);
        self
    }

    /// Checks that every constraint refers to an existing meeting.
    pub fn validate(&self) -> CspResultOf<()> {
        for constraint in &self.constraints {
            let index = constraint.max_var();
            if index >= self.n_meetings {
                return Err(CspError::VariableOutOfRange {
                    constraint: constraint.to_string(),
                    index,
                    n_meetings: self.n_meetings,
                });
            }
        }
        Ok(())
    }

    /// One independent copy of the date range per meeting.
    ///
    /// Pruning one meeting's domain never affects another's.
    pub fn initial_domains(&self) -> Vec<Domain> {
        (0..self.n_meetings).map(|_| self.date_range.clone()).collect()
    }

    /// Returns the number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::daily_range;
    use chrono::NaiveDate;

    fn range() -> Domain {
        daily_range(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_validate_ok() {
        let problem = MeetingProblem::new(2, range())
            .with_constraints([DateConstraint::before(0, 1), DateConstraint::not_on_weekend(1)]);
        assert_eq!(problem.constraint_count(), 2);
        assert!(problem.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_variable() {
        let mut problem = MeetingProblem::new(2, range());
        problem.add_constraint(DateConstraint::before(0, 2));
        assert_eq!(
            problem.validate(),
            Err(CspError::VariableOutOfRange {
                constraint: "M0 < M2".into(),
                index: 2,
                n_meetings: 2,
            })
        );
    }

    #[test]
    fn test_domains_are_not_aliased() {
        let problem = MeetingProblem::new(3, range());
        let mut domains = problem.initial_domains();
        assert_eq!(domains.len(), 3);

        let first = *domains[0].first().unwrap();
        domains[0].remove(&first);

        assert_eq!(domains[0].len(), 2);
        assert_eq!(domains[1].len(), 3);
        assert_eq!(domains[2].len(), 3);
        assert_eq!(problem.date_range.len(), 3);
    }

    #[test]
    fn test_zero_meetings() {
        let problem = MeetingProblem::new(0, range());
        assert!(problem.initial_domains().is_empty());
        assert!(problem.validate().is_ok());
    }
}
