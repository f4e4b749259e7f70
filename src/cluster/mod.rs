//! Spatial clustering of entities by location.
//!
//! Entities are grouped by their 2-D coordinates with k-means: assign each
//! entity to the nearest centroid, move each centroid to the mean of its
//! entities, repeat until nothing moves.
//!
//! ```text
//! J = Σ_k Σ_{e ∈ C_k} ||loc(e) - μ_k||²
//! ```
//!
//! Distances are Euclidean. Ratings play no part in clustering.
//!
//! ## Usage
//!
//! ```rust
//! use tastemap::cluster::{Clustering, KMeans};
//! use tastemap::Entity;
//!
//! let entities: Vec<Entity> = [[0.0, 0.0], [0.1, 0.1], [10.0, 10.0], [10.1, 10.1]]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &loc)| Entity::new(format!("e{i}"), loc, vec![], 1.0, vec![]))
//!     .collect();
//!
//! let centroids = KMeans::new(2).with_seed(7).fit(&entities).unwrap();
//! assert_eq!(centroids.len(), 2);
//!
//! let labels = KMeans::new(2).with_seed(7).fit_predict(&entities).unwrap();
//! assert_eq!(labels[0], labels[1]);
//! assert_ne!(labels[0], labels[2]);
//! ```

mod distance;
mod kmeans;
mod traits;

pub use distance::{distance, find_closest, find_closest_index};
pub use kmeans::{
    find_centroid, group_by_centroid, k_means, Cluster, EmptyClusterPolicy, KMeans, KMeansOutcome,
};
pub use traits::Clustering;
