//! Approximate nearest-neighbour ordering.
//!
//! Distances are squared planar distances in degrees. Only the relative
//! order matters, and at the scale of one country this is close enough to
//! the geodesic order without any trigonometry.

use crate::division::{Coord, Division};

/// Squared planar distance between two coordinates.
#[inline]
pub fn distance_metric(a: Coord, b: Coord) -> f64 {
    let dlat = a.lat - b.lat;
    let dlon = a.lon - b.lon;
    dlat * dlat + dlon * dlon
}

/// Orders `items` by ascending distance from `target`.
///
/// Items without coordinates sort after every item that has them, in their
/// original relative order. If `target` itself has no coordinates, `items`
/// is returned in its original order.
pub fn sort_by_distance<'a>(items: &[&'a Division], target: &Division) -> Vec<&'a Division> {
    let origin = match target.coord {
        Some(c) => c,
        None => return items.to_vec(),
    };

    let mut keyed: Vec<(f64, &'a Division)> = items
        .iter()
        .map(|d| {
            let dist = d
                .coord
                .map_or(f64::INFINITY, |c| distance_metric(origin, c));
            (dist, *d)
        })
        .collect();

    // Stable: equal distances keep input order.
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, d)| d).collect()
}
