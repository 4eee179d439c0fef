//! Domain filtering before search.
//!
//! - [`node_consistency`] prunes each meeting's domain with its unary constraints
//! - [`arc_consistency`] prunes with binary constraints using AC-3
//!
//! Both mutate the domain list in place and only ever remove values. A
//! value is removed only when no complete solution can use it, so filtering
//! never changes whether a problem is satisfiable.

mod arc;
mod node;

pub use arc::{
    arc_consistency, arc_consistency_counted, remove_inconsistent_values, DirectedArc,
};
pub use node::node_consistency;
