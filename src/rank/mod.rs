//! Orderings over the division list.
//!
//! Orderings are returned as fresh vectors of references; the source
//! slice is never reordered.

pub mod proximity;

pub use proximity::{distance_metric, sort_by_distance};

use crate::division::Division;

/// Returns the divisions sorted by descending population.
///
/// The sort is stable, so equally populous divisions keep file order.
pub fn base_order(divisions: &[Division]) -> Vec<&Division> {
    let mut order: Vec<&Division> = divisions.iter().collect();
    order.sort_by(|a, b| b.population.cmp(&a.population));
    order
}
