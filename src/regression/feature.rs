//! Feature extractors: entity → real number.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::record::Entity;

/// A real-valued entity attribute usable as a regression input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Feature {
    /// Mean of all users' ratings. Undefined for unrated entities.
    MeanRating,
    /// Price level.
    Price,
    /// Number of ratings.
    RatingCount,
    /// First location coordinate.
    Latitude,
    /// Second location coordinate.
    Longitude,
}

impl Feature {
    /// The standard candidate set, in selection-priority order.
    pub const STANDARD: [Feature; 5] = [
        Feature::MeanRating,
        Feature::Price,
        Feature::RatingCount,
        Feature::Latitude,
        Feature::Longitude,
    ];

    /// The standard candidate set as a vector.
    pub fn standard_set() -> Vec<Feature> {
        Self::STANDARD.to_vec()
    }

    /// Stable name.
    pub fn name(self) -> &'static str {
        match self {
            Feature::MeanRating => "mean_rating",
            Feature::Price => "price",
            Feature::RatingCount => "rating_count",
            Feature::Latitude => "latitude",
            Feature::Longitude => "longitude",
        }
    }

    /// Value for `entity`, if defined.
    pub fn extract(self, entity: &Entity) -> Option<f64> {
        match self {
            Feature::MeanRating => entity.mean_rating(),
            Feature::Price => Some(entity.price()),
            Feature::RatingCount => Some(entity.num_ratings() as f64),
            Feature::Latitude => Some(entity.location()[0]),
            Feature::Longitude => Some(entity.location()[1]),
        }
    }

    /// Value for `entity`, or [`Error::MissingFeature`].
    pub fn value(self, entity: &Entity) -> Result<f64> {
        self.extract(entity).ok_or_else(|| Error::MissingFeature {
            entity: entity.name().to_string(),
            feature: self.name(),
        })
    }
}
