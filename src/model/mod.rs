//! Problem definition: meetings, candidate ranges and constraints.

mod problem;
mod range;

pub use problem::MeetingProblem;
pub use range::{daily_range, date_range, Domain};
