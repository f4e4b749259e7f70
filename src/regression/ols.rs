//! Single-feature ordinary least squares.
//!
//! Fits `y ≈ b·x + a` where `x` is a [`Feature`] of each reviewed entity and
//! `y` is the user's rating of it:
//!
//! ```text
//! Sxx = Σ(xᵢ − x̄)²     Syy = Σ(yᵢ − ȳ)²     Sxy = Σ(xᵢ − x̄)(yᵢ − ȳ)
//! b   = Sxy / Sxx       a   = ȳ − b·x̄        R² = Sxy² / (Sxx·Syy)
//! ```
//!
//! Both sums of squares must be nonzero. A constant feature or a constant
//! rating is reported as [`Error::DegenerateRegression`].

use std::borrow::Borrow;

use ndarray::Array1;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::feature::Feature;
use crate::error::{Error, Result};
use crate::record::{Entity, User};

/// A fitted line: slope, intercept and goodness of fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    /// Slope `b`.
    pub slope: f64,
    /// Intercept `a`.
    pub intercept: f64,
    /// Coefficient of determination, in [0, 1].
    pub r_squared: f64,
}

/// Least squares fit of `ys` against `xs`.
///
/// ```rust
/// use tastemap::regression::least_squares;
///
/// let fit = least_squares(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
/// assert!((fit.slope - 2.0).abs() < 1e-12);
/// assert!((fit.intercept - 1.0).abs() < 1e-12);
/// ```
pub fn least_squares(xs: &[f64], ys: &[f64]) -> Result<LineFit> {
    if xs.len() != ys.len() {
        return Err(Error::InvalidParameter {
            name: "ys",
            message: "must have the same length as xs",
        });
    }

    let xs = Array1::from(xs.to_vec());
    let ys = Array1::from(ys.to_vec());
    let (mean_x, mean_y) = match (xs.mean(), ys.mean()) {
        (Some(mx), Some(my)) => (mx, my),
        _ => return Err(Error::EmptyInput),
    };

    if is_constant(&xs) {
        return Err(Error::DegenerateRegression {
            reason: "feature values are constant",
        });
    }
    if is_constant(&ys) {
        return Err(Error::DegenerateRegression {
            reason: "ratings are constant",
        });
    }

    let dx = &xs - mean_x;
    let dy = &ys - mean_y;
    let sxx = dx.dot(&dx);
    let syy = dy.dot(&dy);
    let sxy = dx.dot(&dy);

    // Distinct values can still underflow to a zero sum of squares.
    if sxx == 0.0 || syy == 0.0 {
        return Err(Error::DegenerateRegression {
            reason: "sum of squares underflowed to zero",
        });
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    let r_squared = (sxy * sxy / (sxx * syy)).clamp(0.0, 1.0);

    if !(slope.is_finite() && intercept.is_finite() && r_squared.is_finite()) {
        return Err(Error::DegenerateRegression {
            reason: "fit is not finite",
        });
    }

    Ok(LineFit {
        slope,
        intercept,
        r_squared,
    })
}

fn is_constant(values: &Array1<f64>) -> bool {
    values.iter().all(|&v| v == values[0])
}

/// A linear rating predictor over one feature.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Predictor {
    feature: Feature,
    slope: f64,
    intercept: f64,
}

impl Predictor {
    /// Create a predictor `slope · feature(entity) + intercept`.
    pub fn new(feature: Feature, slope: f64, intercept: f64) -> Self {
        Self {
            feature,
            slope,
            intercept,
        }
    }

    /// Input feature.
    pub fn feature(&self) -> Feature {
        self.feature
    }

    /// Slope.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Predicted rating for `entity`.
    pub fn evaluate(&self, entity: &Entity) -> Result<f64> {
        Ok(self.slope * self.feature.value(entity)? + self.intercept)
    }
}

/// A predictor together with its R² on the training sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FittedModel {
    /// The fitted predictor.
    pub predictor: Predictor,
    /// Fraction of rating variance explained, in [0, 1].
    pub r_squared: f64,
}

/// Fit `user`'s ratings of `entities` against `feature`.
///
/// Every entity must have been reviewed by `user`; filter with
/// [`User::reviewed`] first.
pub fn find_predictor<E: Borrow<Entity>>(
    user: &User,
    entities: &[E],
    feature: Feature,
) -> Result<FittedModel> {
    let mut xs = Vec::with_capacity(entities.len());
    let mut ys = Vec::with_capacity(entities.len());

    for e in entities {
        let entity = Borrow::<Entity>::borrow(e);
        let rating = user
            .rating(entity.name())
            .ok_or_else(|| Error::MissingReview {
                entity: entity.name().to_string(),
            })?;
        xs.push(feature.value(entity)?);
        ys.push(rating);
    }

    let fit = least_squares(&xs, &ys)?;

    Ok(FittedModel {
        predictor: Predictor::new(feature, fit.slope, fit.intercept),
        r_squared: fit.r_squared,
    })
}
