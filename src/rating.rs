//! Complete rating maps for a user.

use std::borrow::Borrow;
use std::collections::HashMap;

use tracing::debug;

use crate::error::Result;
use crate::record::{Entity, User};
use crate::regression::{best_predictor, Feature};

/// Rate every entity in `entities` for `user`.
///
/// Reviewed entities get the user's own rating, unchanged. The rest get the
/// prediction of the best single-feature model, which is trained on the
/// user's reviews across the whole `dataset` rather than just `entities`.
/// The model is only fitted when at least one entity needs a prediction.
///
/// Returns a map from entity name to rating.
pub fn rate_all<E, D>(
    user: &User,
    entities: &[E],
    dataset: &[D],
    features: &[Feature],
) -> Result<HashMap<String, f64>>
where
    E: Borrow<Entity>,
    D: Borrow<Entity>,
{
    let mut ratings = HashMap::with_capacity(entities.len());
    let mut unreviewed: Vec<&Entity> = Vec::new();

    for e in entities {
        let entity = Borrow::<Entity>::borrow(e);
        match user.rating(entity.name()) {
            Some(rating) => {
                ratings.insert(entity.name().to_string(), rating);
            }
            None => unreviewed.push(entity),
        }
    }

    if !unreviewed.is_empty() {
        let model = best_predictor(user, dataset, features)?;
        debug!(
            user = user.name(),
            feature = model.predictor.feature().name(),
            r_squared = model.r_squared,
            known = ratings.len(),
            predicted = unreviewed.len(),
            "rating entities"
        );
        for entity in unreviewed {
            ratings.insert(entity.name().to_string(), model.predictor.evaluate(entity)?);
        }
    }

    Ok(ratings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::record::fixtures::priced;
    use crate::record::Review;

    fn dataset() -> Vec<Entity> {
        vec![
            priced("a", 1.0, [0.0, 0.0], vec![1.0]),
            priced("b", 2.0, [1.0, 0.0], vec![5.0]),
            priced("c", 3.0, [0.0, 1.0], vec![2.0]),
            priced("d", 4.0, [2.0, 2.0], vec![4.0]),
            priced("e", 2.5, [3.0, 3.0], vec![3.0]),
        ]
    }

    fn user() -> User {
        // rating = price + 0.5, except "b" which the line does not fit
        User::new(
            "u",
            vec![
                Review::new("a", 1.5),
                Review::new("b", 2.0),
                Review::new("c", 3.5),
                Review::new("d", 4.5),
            ],
        )
    }

    #[test]
    fn test_known_ratings_are_exact() {
        let data = dataset();
        let ratings = rate_all(&user(), &data, &data, &[Feature::Price]).unwrap();

        assert_eq!(ratings.len(), 5);
        assert_eq!(ratings["a"], 1.5);
        assert_eq!(ratings["b"], 2.0);
        assert_eq!(ratings["c"], 3.5);
        assert_eq!(ratings["d"], 4.5);
    }

    #[test]
    fn test_unknown_ratings_use_model() {
        let data = dataset();
        let u = user();
        let model = best_predictor(&u, &data, &[Feature::Price]).unwrap();
        let expected = model.predictor.evaluate(&data[4]).unwrap();

        let ratings = rate_all(&u, &data, &data, &[Feature::Price]).unwrap();
        assert_eq!(ratings["e"], expected);
    }

    #[test]
    fn test_trains_on_dataset_not_subset() {
        let data = dataset();
        let u = user();
        // Only "a" and "e" are requested; "a" alone could not support a fit.
        let subset: Vec<&Entity> = vec![&data[0], &data[4]];

        let ratings = rate_all(&u, &subset, &data, &[Feature::Price]).unwrap();
        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings["a"], 1.5);

        let model = best_predictor(&u, &data, &[Feature::Price]).unwrap();
        assert_eq!(ratings["e"], model.predictor.evaluate(&data[4]).unwrap());
    }

    #[test]
    fn test_no_model_needed_when_all_reviewed() {
        let data = dataset();
        let flat = User::new("flat", vec![Review::new("a", 3.0), Review::new("c", 3.0)]);
        let requested = vec![&data[0], &data[2]];

        // Constant ratings would make any fit degenerate.
        let ratings = rate_all(&flat, &requested, &data, &Feature::STANDARD).unwrap();
        assert_eq!(ratings["a"], 3.0);
        assert_eq!(ratings["c"], 3.0);

        let err = rate_all(&flat, &data, &data, &Feature::STANDARD).unwrap_err();
        assert!(matches!(err, Error::DegenerateRegression { .. }));
    }
}
