//! Read-only records supplied by the loading layer.
//!
//! An [`Entity`] is a place (a restaurant) with a location, category tags,
//! a price level and the ratings every user gave it. A [`User`] holds that
//! user's own [`Review`]s keyed by entity name.
//!
//! Nothing in this crate mutates a record; every operation borrows them and
//! returns derived values.

use std::borrow::Borrow;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2-D coordinate, `[latitude, longitude]`.
pub type Location = [f64; 2];

/// A place that can be clustered, searched and rated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entity {
    name: String,
    location: Location,
    categories: Vec<String>,
    price: f64,
    ratings: Vec<f64>,
}

impl Entity {
    /// Create an entity. `name` must be unique within a dataset.
    pub fn new(
        name: impl Into<String>,
        location: Location,
        categories: Vec<String>,
        price: f64,
        ratings: Vec<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            categories,
            price,
            ratings,
        }
    }

    /// Unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Coordinates.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Category tags in stored order. Duplicates are preserved.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Price level.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Individual ratings from all users.
    pub fn ratings(&self) -> &[f64] {
        &self.ratings
    }

    /// Mean of all ratings, or `None` when nobody rated this entity.
    pub fn mean_rating(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }
        Some(self.ratings.iter().sum::<f64>() / self.ratings.len() as f64)
    }

    /// Number of ratings.
    pub fn num_ratings(&self) -> usize {
        self.ratings.len()
    }
}

/// One user's rating of one entity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Review {
    entity_name: String,
    rating: f64,
}

impl Review {
    /// Create a review.
    pub fn new(entity_name: impl Into<String>, rating: f64) -> Self {
        Self {
            entity_name: entity_name.into(),
            rating,
        }
    }

    /// Name of the reviewed entity.
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// Rating value.
    pub fn rating(&self) -> f64 {
        self.rating
    }
}

/// A user and their reviews, keyed by entity name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct User {
    name: String,
    reviews: HashMap<String, Review>,
}

impl User {
    /// Create a user. A later review of the same entity replaces an earlier one.
    pub fn new(name: impl Into<String>, reviews: impl IntoIterator<Item = Review>) -> Self {
        let reviews = reviews
            .into_iter()
            .map(|r| (r.entity_name.clone(), r))
            .collect();
        Self {
            name: name.into(),
            reviews,
        }
    }

    /// User name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All reviews, keyed by entity name.
    pub fn reviews(&self) -> &HashMap<String, Review> {
        &self.reviews
    }

    /// This user's rating for the named entity.
    pub fn rating(&self, entity_name: &str) -> Option<f64> {
        self.reviews.get(entity_name).map(Review::rating)
    }

    /// Whether this user reviewed the named entity.
    pub fn has_reviewed(&self, entity_name: &str) -> bool {
        self.reviews.contains_key(entity_name)
    }

    /// The entities in `entities` this user reviewed, in input order.
    pub fn reviewed<'a, E: Borrow<Entity>>(&self, entities: &'a [E]) -> Vec<&'a Entity> {
        entities
            .iter()
            .map(|e| Borrow::<Entity>::borrow(e))
            .filter(|e| self.has_reviewed(e.name()))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn entity(name: &str, location: Location) -> Entity {
        Entity::new(name, location, Vec::new(), 1.0, vec![3.0])
    }

    pub fn priced(name: &str, price: f64, location: Location, ratings: Vec<f64>) -> Entity {
        Entity::new(name, location, Vec::new(), price, ratings)
    }

    pub fn tagged(name: &str, categories: &[&str]) -> Entity {
        Entity::new(
            name,
            [0.0, 0.0],
            categories.iter().map(|c| c.to_string()).collect(),
            1.0,
            vec![3.0],
        )
    }
}
