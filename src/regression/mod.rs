//! Rating prediction by single-feature linear regression.
//!
//! A user's known ratings are regressed against one entity attribute at a
//! time. The attribute whose line explains the most rating variance (highest
//! R²) becomes the user's [`Predictor`].
//!
//! ## Least Squares
//!
//! For samples `(xᵢ, yᵢ)` with `x` a feature value and `y` a rating, the
//! line `y = b·x + a` minimizing `Σ(yᵢ − b·xᵢ − a)²` is
//!
//! ```text
//! b = Sxy / Sxx        a = ȳ − b·x̄
//! ```
//!
//! and `R² = Sxy² / (Sxx·Syy)` is the squared correlation of `x` and `y`.
//!
//! ## Usage
//!
//! ```rust
//! use tastemap::{best_predictor, Entity, Feature, Review, User};
//!
//! let entities = vec![
//!     Entity::new("a", [0.0, 0.0], vec![], 1.0, vec![4.0]),
//!     Entity::new("b", [0.0, 1.0], vec![], 2.0, vec![3.0]),
//!     Entity::new("c", [1.0, 0.0], vec![], 3.0, vec![5.0]),
//! ];
//! let user = User::new("u", vec![Review::new("a", 2.0), Review::new("b", 3.0), Review::new("c", 4.0)]);
//!
//! let model = best_predictor(&user, &entities, &Feature::STANDARD).unwrap();
//! assert_eq!(model.predictor.feature(), Feature::Price);
//! ```

mod feature;
mod ols;
mod select;

pub use feature::Feature;
pub use ols::{find_predictor, least_squares, FittedModel, LineFit, Predictor};
pub use select::best_predictor;
