//! Clustering traits.

use std::borrow::Borrow;

use crate::error::Result;
use crate::record::Entity;

/// Trait for clustering algorithms over entity locations.
pub trait Clustering {
    /// Fit the model to the entities and return cluster assignments.
    ///
    /// Returns a vector of cluster labels, one per input entity. Label `i`
    /// refers to the `i`-th fitted centroid.
    fn fit_predict<E: Borrow<Entity>>(&self, entities: &[E]) -> Result<Vec<usize>>;

    /// Get the number of clusters.
    fn n_clusters(&self) -> usize;
}
