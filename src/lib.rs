//! # tastemap
//!
//! Place recommendation primitives: spatial k-means grouping of entities and
//! per-user rating prediction by single-feature least squares.
//!
//! - [`cluster`]: k-means over entity locations, with seedable initialization
//! - [`regression`]: least squares fits, feature extractors, model selection
//! - [`rate_all`]: known ratings where they exist, predictions elsewhere
//! - [`search`]: exact category filter
//!
//! All operations are pure reads over caller-owned [`Entity`] and [`User`]
//! records. Loading records and presenting results belong to the caller.
//!
//! Diagnostics are emitted as `tracing` events; install a subscriber to see
//! them.

pub mod cluster;
/// Error types used across `tastemap`.
pub mod error;
pub mod group;
pub mod rating;
pub mod record;
pub mod regression;
pub mod search;

pub use cluster::{k_means, Clustering, EmptyClusterPolicy, KMeans, KMeansOutcome};
pub use error::{Error, Result};
pub use group::group_by_first;
pub use rating::rate_all;
pub use record::{Entity, Location, Review, User};
pub use regression::{best_predictor, find_predictor, Feature, FittedModel, Predictor};
pub use search::search;
