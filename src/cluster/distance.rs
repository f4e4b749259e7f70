//! Euclidean distance and nearest-centroid lookup.

use crate::error::{Error, Result};
use crate::record::Location;

/// Euclidean distance between two coordinates.
pub fn distance(p: Location, q: Location) -> f64 {
    p.iter()
        .zip(q.iter())
        .map(|(a, b)| (a - b).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Index of the centroid closest to `location`.
///
/// Equidistant centroids resolve to the earliest one. Returns `None` when
/// `centroids` is empty.
pub fn find_closest_index(location: Location, centroids: &[Location]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (i, &c) in centroids.iter().enumerate() {
        let d = distance(location, c);
        // Strict comparison keeps the first of several ties.
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((i, d));
        }
    }

    best.map(|(i, _)| i)
}

/// The centroid closest to `location`, earliest on ties.
///
/// ```rust
/// use tastemap::cluster::find_closest;
///
/// let centroids = [[0.0, 0.0], [2.0, 3.0], [4.0, 3.0], [5.0, 5.0]];
/// assert_eq!(find_closest([3.0, 4.0], &centroids).unwrap(), [2.0, 3.0]);
/// ```
pub fn find_closest(location: Location, centroids: &[Location]) -> Result<Location> {
    find_closest_index(location, centroids)
        .map(|i| centroids[i])
        .ok_or(Error::EmptyInput)
}
