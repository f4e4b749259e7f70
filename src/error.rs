use core::fmt;

/// Result alias for `tastemap`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the clustering and rating primitives.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input was empty.
    EmptyInput,

    /// Invalid number of clusters requested.
    InvalidClusterCount {
        /// Requested count.
        requested: usize,
        /// Number of entities available.
        n_items: usize,
    },

    /// Invalid parameter value.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },

    /// A centroid received no entities and the empty-cluster policy is `Fail`.
    EmptyCluster {
        /// Index of the starved centroid.
        centroid: usize,
    },

    /// Least squares has no unique solution for the sample.
    DegenerateRegression {
        /// Which variable was constant.
        reason: &'static str,
    },

    /// A regression sample contained an entity the user never reviewed.
    MissingReview {
        /// Entity name.
        entity: String,
    },

    /// A feature extractor had no value for an entity.
    MissingFeature {
        /// Entity name.
        entity: String,
        /// Feature name.
        feature: &'static str,
    },

    /// Generic error with message.
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::InvalidClusterCount { requested, n_items } => {
                write!(f, "cannot create {requested} clusters from {n_items} entities")
            }
            Error::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
            Error::EmptyCluster { centroid } => {
                write!(f, "centroid {centroid} has no assigned entities")
            }
            Error::DegenerateRegression { reason } => {
                write!(f, "degenerate regression: {reason}")
            }
            Error::MissingReview { entity } => {
                write!(f, "no review for entity '{entity}'")
            }
            Error::MissingFeature { entity, feature } => {
                write!(f, "feature '{feature}' is undefined for entity '{entity}'")
            }
            Error::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offender() {
        let err = Error::MissingFeature {
            entity: "Cafe Gratitude".to_string(),
            feature: "mean_rating",
        };
        let s = err.to_string();
        assert!(s.contains("Cafe Gratitude"));
        assert!(s.contains("mean_rating"));

        let err = Error::InvalidClusterCount {
            requested: 5,
            n_items: 2,
        };
        assert_eq!(err.to_string(), "cannot create 5 clusters from 2 entities");
    }
}
