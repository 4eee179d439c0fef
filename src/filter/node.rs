//! Node consistency (unary pruning).

use crate::constraint::DateConstraint;
use crate::model::Domain;

/// Removes from each meeting's domain every value rejected by one of its
/// unary constraints.
///
/// Binary constraints are ignored, as are unary constraints whose meeting
/// has no domain. A domain may end up empty; that is left for search to
/// discover.
pub fn node_consistency(domains: &mut [Domain], constraints: &[DateConstraint]) {
    for constraint in constraints {
        let DateConstraint::Unary(unary) = constraint else {
            continue;
        };
        if let Some(domain) = domains.get_mut(unary.var) {
            domain.retain(|value| unary.is_satisfied_by(*value));
        }
    }
}
