//! Model selection across candidate features.

use std::borrow::Borrow;

use tracing::debug;

use super::feature::Feature;
use super::ols::{find_predictor, FittedModel};
use crate::error::{Error, Result};
use crate::record::{Entity, User};

/// Fit one model per feature on the entities `user` reviewed and return the
/// one with the highest R².
///
/// Ties go to the feature listed first. A feature whose fit is degenerate
/// (constant over the reviewed entities) is skipped; if every feature is
/// degenerate the last [`Error::DegenerateRegression`] is returned. Any other
/// error aborts the selection.
pub fn best_predictor<E: Borrow<Entity>>(
    user: &User,
    entities: &[E],
    features: &[Feature],
) -> Result<FittedModel> {
    if features.is_empty() {
        return Err(Error::EmptyInput);
    }

    let reviewed = user.reviewed(entities);
    let mut best: Option<FittedModel> = None;
    let mut degenerate: Option<Error> = None;

    for &feature in features {
        match find_predictor(user, &reviewed, feature) {
            Ok(model) => {
                debug!(
                    feature = feature.name(),
                    r_squared = model.r_squared,
                    "candidate fitted"
                );
                if best.map_or(true, |b| model.r_squared > b.r_squared) {
                    best = Some(model);
                }
            }
            Err(err @ Error::DegenerateRegression { .. }) => {
                debug!(feature = feature.name(), error = %err, "candidate skipped");
                degenerate = Some(err);
            }
            Err(err) => return Err(err),
        }
    }

    match (best, degenerate) {
        (Some(model), _) => Ok(model),
        (None, Some(err)) => Err(err),
        (None, None) => Err(Error::EmptyInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fixtures::priced;
    use crate::record::Review;

    fn sample() -> (User, Vec<Entity>) {
        // Ratings equal price exactly; latitude is orthogonal to them.
        let entities = vec![
            priced("a", 1.0, [1.0, 5.0], vec![2.0]),
            priced("b", 2.0, [-1.0, 5.0], vec![4.0, 1.0]),
            priced("c", 3.0, [-1.0, 5.0], vec![3.0]),
            priced("d", 4.0, [1.0, 5.0], vec![5.0, 5.0, 2.0]),
            priced("unreviewed", 9.0, [0.0, 0.0], vec![]),
        ];
        let user = User::new(
            "u",
            vec![
                Review::new("a", 1.0),
                Review::new("b", 2.0),
                Review::new("c", 3.0),
                Review::new("d", 4.0),
            ],
        );
        (user, entities)
    }

    #[test]
    fn test_selects_perfect_feature() {
        let (user, entities) = sample();

        let model =
            best_predictor(&user, &entities, &[Feature::Latitude, Feature::Price]).unwrap();
        assert_eq!(model.predictor.feature(), Feature::Price);
        assert!((model.r_squared - 1.0).abs() < 1e-9);

        let model =
            best_predictor(&user, &entities, &[Feature::Price, Feature::Latitude]).unwrap();
        assert_eq!(model.predictor.feature(), Feature::Price);
    }

    #[test]
    fn test_tie_prefers_first_feature() {
        // Price and rating count carry identical values, so their R² match.
        let entities = vec![
            priced("a", 1.0, [0.0, 0.0], vec![1.0]),
            priced("b", 2.0, [0.0, 1.0], vec![1.0, 2.0]),
            priced("c", 3.0, [0.0, 0.0], vec![1.0, 2.0, 3.0]),
        ];
        let user = User::new(
            "u",
            vec![
                Review::new("a", 1.0),
                Review::new("b", 3.0),
                Review::new("c", 2.0),
            ],
        );

        let model =
            best_predictor(&user, &entities, &[Feature::RatingCount, Feature::Price]).unwrap();
        assert_eq!(model.predictor.feature(), Feature::RatingCount);

        let model =
            best_predictor(&user, &entities, &[Feature::Price, Feature::RatingCount]).unwrap();
        assert_eq!(model.predictor.feature(), Feature::Price);
    }

    #[test]
    fn test_uncorrelated_feature_scores_zero() {
        let (user, entities) = sample();
        let lat = best_predictor(&user, &entities, &[Feature::Latitude]).unwrap();
        assert!(lat.r_squared.abs() < 1e-9);
    }

    #[test]
    fn test_skips_constant_feature() {
        let (user, entities) = sample();
        // Longitude is 5.0 for every reviewed entity.
        let model = best_predictor(
            &user,
            &entities,
            &[Feature::Longitude, Feature::Latitude],
        )
        .unwrap();
        assert_eq!(model.predictor.feature(), Feature::Latitude);
    }

    #[test]
    fn test_all_degenerate_is_an_error() {
        let (user, entities) = sample();
        assert!(matches!(
            best_predictor(&user, &entities, &[Feature::Longitude]),
            Err(Error::DegenerateRegression { .. })
        ));

        let flat = User::new(
            "flat",
            vec![Review::new("a", 3.0), Review::new("b", 3.0)],
        );
        assert!(matches!(
            best_predictor(&flat, &entities, &Feature::STANDARD),
            Err(Error::DegenerateRegression { .. })
        ));
    }

    #[test]
    fn test_empty_features_error() {
        let (user, entities) = sample();
        assert_eq!(
            best_predictor(&user, &entities, &[]).unwrap_err(),
            Error::EmptyInput
        );
    }
}
