//! # Golden-angle (Fibonacci) lattice on the unit sphere
//!
//! Points are placed along a spiral: the azimuth advances by the golden angle
//! `γ = π·(3 − √5)` at each step while the height `z` decreases linearly from
//! `1 − 1/n` to `1/n − 1`. Spacing `z` uniformly (rather than the polar angle) gives
//! an almost uniform areal density, with no randomness involved.
//!
//! ```text
//! θᵢ = γ·i
//! zᵢ = linspace(1 − 1/n, 1/n − 1, n)[i]
//! rᵢ = √(1 − zᵢ²)
//! pᵢ = (rᵢ·cos θᵢ, rᵢ·sin θᵢ, zᵢ)
//! ```

use nalgebra::Vector3;

use crate::constants::{GOLDEN_ANGLE, MIN_POINTS};
use crate::edpoints_errors::EdPointsError;

/// Evenly spaced values over the closed interval `[start, stop]`.
///
/// A finite iterator which can be restarted by cloning it before consumption.
/// When a single sample is requested the sequence is `[stop]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Linspace {
    start: f64,
    stop: f64,
    step: f64,
    n: usize,
    index: usize,
}

impl Linspace {
    /// Create the sequence.
    ///
    /// Arguments
    /// ---------
    /// * `start`: first value.
    /// * `stop`: last value (inclusive).
    /// * `n`: number of samples.
    ///
    /// Errors
    /// ----------
    /// * [`EdPointsError::InvalidArgument`] if `n` is negative.
    pub fn new(start: f64, stop: f64, n: i64) -> Result<Self, EdPointsError> {
        let n = usize::try_from(n).map_err(|_| {
            EdPointsError::InvalidArgument("`n` must be a positive integer.".into())
        })?;

        let step = if n > 1 {
            (stop - start) / (n - 1) as f64
        } else {
            0.0
        };

        Ok(Linspace {
            start,
            stop,
            step,
            n,
            index: 0,
        })
    }
}

impl Iterator for Linspace {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.n {
            return None;
        }
        let value = if self.n == 1 {
            self.stop
        } else {
            self.start + self.step * self.index as f64
        };
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.n - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Linspace {}

/// Collect a [`Linspace`] into a vector.
///
/// ```
/// use edpoints::lattice::linspace;
///
/// assert_eq!(
///     linspace(10.0, 50.0, 6).unwrap(),
///     vec![10.0, 18.0, 26.0, 34.0, 42.0, 50.0]
/// );
/// assert_eq!(linspace(3.0, 7.0, 1).unwrap(), vec![7.0]);
/// ```
pub fn linspace(start: f64, stop: f64, n: i64) -> Result<Vec<f64>, EdPointsError> {
    Ok(Linspace::new(start, stop, n)?.collect())
}

/// Generate `n_points` almost equidistant points on the unit sphere, in cartesian form.
///
/// Arguments
/// ---------
/// * `n_points`: number of points to generate, at least [`MIN_POINTS`].
///
/// Returns
/// --------
/// * A vector of exactly `n_points` unit vectors. The output is fully deterministic.
///
/// Errors
/// ----------
/// * [`EdPointsError::InvalidArgument`] if `n_points < 3`.
///
/// See also
/// ------------
/// * [`linspace`] – Height sampling along the polar axis.
/// * [`crate::ellipsoid::cartesian_to_ecef`] – Next stage of the pipeline.
pub fn generate_points(n_points: usize) -> Result<Vec<Vector3<f64>>, EdPointsError> {
    if n_points < MIN_POINTS {
        return Err(EdPointsError::InvalidArgument(
            "`n_points` must be larger than 2".into(),
        ));
    }

    let n = n_points as f64;
    let z_vals = Linspace::new(1.0 - 1.0 / n, 1.0 / n - 1.0, n_points as i64)?;

    Ok(z_vals
        .enumerate()
        .map(|(i, z)| {
            let theta = GOLDEN_ANGLE * i as f64;
            let radius = (1.0 - z * z).sqrt();
            Vector3::new(radius * theta.cos(), radius * theta.sin(), z)
        })
        .collect())
}
