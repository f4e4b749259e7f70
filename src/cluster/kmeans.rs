//! K-means clustering of entity locations.
//!
//! Partitions entities into k spatial groups by minimizing **within-cluster
//! sum of squares** (WCSS) over their 2-D coordinates.
//!
//! # Lloyd's Algorithm
//!
//! 1. Initialize k centroids at the locations of k distinct entities,
//!    drawn uniformly without replacement
//! 2. **Assign**: each entity → nearest centroid (earliest on ties)
//! 3. **Update**: each centroid → mean location of its entities
//! 4. Repeat until the centroid list is exactly unchanged, or `max_updates`
//!    rounds have run
//!
//! Randomness enters only at step 1. Given the same draw the trajectory is
//! fully deterministic, so [`KMeans::refine`] can replay it from fixed
//! starting centroids.
//!
//! # Empty Clusters
//!
//! A centroid can end a round with no entities (two centroids starting on the
//! same location, or one crowded out by its neighbours). Its mean is then
//! undefined, and [`EmptyClusterPolicy`] decides what happens:
//!
//! | Policy | Effect |
//! |--------|--------|
//! | `KeepPrevious` | centroid stays where it was (default) |
//! | `Reseed` | centroid jumps to a random entity's location |
//! | `Fail` | the run stops with [`Error::EmptyCluster`] |
//!
//! Every policy keeps the output at exactly k centroids.

use std::borrow::Borrow;

use ndarray::{Array2, Axis};
use rand::prelude::*;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::distance::find_closest_index;
use super::traits::Clustering;
use crate::error::{Error, Result};
use crate::group::group_by_first;
use crate::record::{Entity, Location};

/// What to do with a centroid that received no entities in a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EmptyClusterPolicy {
    /// Leave the centroid at its previous position.
    #[default]
    KeepPrevious,
    /// Move the centroid to the location of a uniformly drawn entity.
    Reseed,
    /// Abort with [`Error::EmptyCluster`].
    Fail,
}

/// Entities sharing the same nearest centroid.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster<'a> {
    /// Position of the centroid in the centroid list.
    pub centroid_index: usize,
    /// The centroid itself.
    pub centroid: Location,
    /// Assigned entities, in input order.
    pub members: Vec<&'a Entity>,
}

/// Result of a k-means run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KMeansOutcome {
    /// Final centroids, exactly k of them.
    pub centroids: Vec<Location>,
    /// Assign/update rounds performed.
    pub iterations: usize,
    /// Whether the last round left the centroids unchanged.
    pub converged: bool,
}

/// Assign every entity to its nearest centroid and group by centroid.
///
/// Clusters come out in order of first assignment, and a centroid that no
/// entity is nearest to yields no cluster. Every entity appears in exactly
/// one cluster.
pub fn group_by_centroid<'a, E: Borrow<Entity>>(
    entities: &'a [E],
    centroids: &[Location],
) -> Result<Vec<Cluster<'a>>> {
    if centroids.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut assigned = Vec::with_capacity(entities.len());
    for e in entities {
        let entity: &'a Entity = Borrow::<Entity>::borrow(e);
        let idx = find_closest_index(entity.location(), centroids).ok_or(Error::EmptyInput)?;
        assigned.push((idx, (idx, entity)));
    }

    let clusters = group_by_first(assigned)
        .into_iter()
        .map(|group| {
            let centroid_index = group[0].0;
            Cluster {
                centroid_index,
                centroid: centroids[centroid_index],
                members: group.into_iter().map(|(_, e)| e).collect(),
            }
        })
        .collect();

    Ok(clusters)
}

/// Coordinate-wise mean location of a cluster.
pub fn find_centroid<E: Borrow<Entity>>(cluster: &[E]) -> Result<Location> {
    if cluster.is_empty() {
        return Err(Error::EmptyInput);
    }

    let flat: Vec<f64> = cluster
        .iter()
        .flat_map(|e| Borrow::<Entity>::borrow(e).location())
        .collect();
    let locations =
        Array2::from_shape_vec((cluster.len(), 2), flat).map_err(|e| Error::Other(e.to_string()))?;
    let mean = locations.mean_axis(Axis(0)).ok_or(Error::EmptyInput)?;

    Ok([mean[0], mean[1]])
}

/// K-means clustering of entity locations.
#[derive(Debug, Clone)]
pub struct KMeans {
    /// Number of clusters.
    k: usize,
    /// Maximum assign/update rounds.
    max_updates: usize,
    /// Random seed.
    seed: Option<u64>,
    /// Handling of centroids that lose all their entities.
    empty_policy: EmptyClusterPolicy,
}

impl KMeans {
    /// Create a new K-means clusterer.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_updates: 100,
            seed: None,
            empty_policy: EmptyClusterPolicy::default(),
        }
    }

    /// Set the maximum number of assign/update rounds.
    pub fn with_max_updates(mut self, max_updates: usize) -> Self {
        self.max_updates = max_updates;
        self
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the empty-cluster policy.
    pub fn with_empty_cluster_policy(mut self, policy: EmptyClusterPolicy) -> Self {
        self.empty_policy = policy;
        self
    }

    /// Maximum assign/update rounds.
    pub fn max_updates(&self) -> usize {
        self.max_updates
    }

    fn rng(&self) -> Box<dyn RngCore> {
        match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        }
    }

    fn check_k(&self, n_items: usize) -> Result<()> {
        if self.k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }
        if self.k > n_items {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items,
            });
        }
        Ok(())
    }

    /// Cluster the entities and return the final centroids.
    ///
    /// Uses the configured seed, or the thread RNG when none is set.
    pub fn fit<E: Borrow<Entity>>(&self, entities: &[E]) -> Result<Vec<Location>> {
        let mut rng = self.rng();
        self.fit_with_rng(entities, &mut rng)
    }

    /// Cluster the entities, drawing initial centroids from `rng`.
    pub fn fit_with_rng<E, R>(&self, entities: &[E], rng: &mut R) -> Result<Vec<Location>>
    where
        E: Borrow<Entity>,
        R: Rng + ?Sized,
    {
        Ok(self.run(entities, rng)?.centroids)
    }

    /// Like [`KMeans::fit_with_rng`], also reporting iterations and convergence.
    pub fn run<E, R>(&self, entities: &[E], rng: &mut R) -> Result<KMeansOutcome>
    where
        E: Borrow<Entity>,
        R: Rng + ?Sized,
    {
        self.check_k(entities.len())?;

        let initial: Vec<Location> = rand::seq::index::sample(rng, entities.len(), self.k)
            .iter()
            .map(|i| Borrow::<Entity>::borrow(&entities[i]).location())
            .collect();

        self.iterate(entities, initial, rng)
    }

    /// Run the k-means loop from caller-supplied starting centroids.
    ///
    /// `initial` must hold exactly k centroids. The RNG is consulted only by
    /// the `Reseed` policy.
    pub fn refine<E: Borrow<Entity>>(
        &self,
        entities: &[E],
        initial: Vec<Location>,
    ) -> Result<KMeansOutcome> {
        let mut rng = self.rng();
        self.refine_with_rng(entities, initial, &mut rng)
    }

    /// [`KMeans::refine`] with an explicit random source.
    pub fn refine_with_rng<E, R>(
        &self,
        entities: &[E],
        initial: Vec<Location>,
        rng: &mut R,
    ) -> Result<KMeansOutcome>
    where
        E: Borrow<Entity>,
        R: Rng + ?Sized,
    {
        if entities.is_empty() {
            return Err(Error::EmptyInput);
        }
        self.check_k(entities.len())?;
        if initial.len() != self.k {
            return Err(Error::InvalidParameter {
                name: "initial",
                message: "must contain exactly k centroids",
            });
        }

        self.iterate(entities, initial, rng)
    }

    /// Nearest-centroid label for each entity.
    pub fn predict<E: Borrow<Entity>>(
        &self,
        entities: &[E],
        centroids: &[Location],
    ) -> Result<Vec<usize>> {
        entities
            .iter()
            .map(|e| {
                find_closest_index(Borrow::<Entity>::borrow(e).location(), centroids)
                    .ok_or(Error::EmptyInput)
            })
            .collect()
    }

    fn iterate<E, R>(
        &self,
        entities: &[E],
        mut centroids: Vec<Location>,
        rng: &mut R,
    ) -> Result<KMeansOutcome>
    where
        E: Borrow<Entity>,
        R: Rng + ?Sized,
    {
        debug!(
            k = self.k,
            n = entities.len(),
            max_updates = self.max_updates,
            "k-means start"
        );

        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_updates {
            let clusters = group_by_centroid(entities, &centroids)?;

            let mut next = centroids.clone();
            let mut filled = vec![false; centroids.len()];
            for cluster in &clusters {
                next[cluster.centroid_index] = find_centroid(&cluster.members)?;
                filled[cluster.centroid_index] = true;
            }

            for (idx, _) in filled.iter().enumerate().filter(|(_, f)| !**f) {
                debug!(centroid = idx, policy = ?self.empty_policy, "empty cluster");
                match self.empty_policy {
                    EmptyClusterPolicy::KeepPrevious => {}
                    EmptyClusterPolicy::Reseed => {
                        let pick = rng.random_range(0..entities.len());
                        next[idx] = Borrow::<Entity>::borrow(&entities[pick]).location();
                    }
                    EmptyClusterPolicy::Fail => {
                        return Err(Error::EmptyCluster { centroid: idx });
                    }
                }
            }

            iterations += 1;
            trace!(iteration = iterations, clusters = clusters.len(), "k-means round");

            if next == centroids {
                converged = true;
                break;
            }
            centroids = next;
        }

        debug!(iterations, converged, "k-means finished");

        Ok(KMeansOutcome {
            centroids,
            iterations,
            converged,
        })
    }
}

impl Clustering for KMeans {
    fn fit_predict<E: Borrow<Entity>>(&self, entities: &[E]) -> Result<Vec<usize>> {
        let centroids = self.fit(entities)?;
        self.predict(entities, &centroids)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

/// Cluster `entities` into `k` groups and return the centroids.
///
/// Shorthand for `KMeans::new(k).with_max_updates(max_updates).fit_with_rng(..)`.
pub fn k_means<E, R>(
    entities: &[E],
    k: usize,
    max_updates: usize,
    rng: &mut R,
) -> Result<Vec<Location>>
where
    E: Borrow<Entity>,
    R: Rng + ?Sized,
{
    KMeans::new(k)
        .with_max_updates(max_updates)
        .fit_with_rng(entities, rng)
}
