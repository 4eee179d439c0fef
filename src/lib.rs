//! Calendar satisfaction: schedule meetings into candidate datetimes.
//!
//! Each of `n` meetings is a variable whose domain is a set of candidate
//! datetimes. Unary constraints restrict a single meeting ("meeting 0 is
//! not on a weekend"), binary constraints relate two ("meeting 2 is before
//! meeting 5"). Solving runs three phases in order:
//!
//! - **Node consistency**: prune each domain with its unary constraints.
//! - **Arc consistency**: prune with binary constraints using AC-3.
//! - **Backtracking**: depth-first search over the pruned domains, checking
//!   every constraint at each partial assignment.
//!
//! The result is either one complete consistent assignment or an explicit
//! "no solution". Soft constraints, meeting durations and partial
//! schedules are out of scope.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use u_calsat::constraint::DateConstraint;
//! use u_calsat::model::daily_range;
//!
//! let jan = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
//! let range = daily_range(jan(1), jan(7)).unwrap();
//! let constraints = [
//!     DateConstraint::before(0, 1),
//!     DateConstraint::not_on_weekend(1),
//!     DateConstraint::after_date(0, jan(3).and_hms_opt(0, 0, 0).unwrap()),
//! ];
//!
//! let schedule = u_calsat::solve(2, &range, &constraints).unwrap().unwrap();
//! assert_eq!(schedule[0].date(), jan(4));
//! assert_eq!(schedule[1].date(), jan(5));
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for constraints, problems, config and results
//! - `parallel`: check constraints with rayon ([`search::SolverConfig::parallel`])

pub mod constraint;
pub mod error;
pub mod filter;
pub mod model;
pub mod search;

pub use error::{CspError, CspResultOf};
pub use search::solve;
