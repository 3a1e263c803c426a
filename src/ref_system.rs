//! # Axis rotation between the generation frame and the geodetic frame
//!
//! The lattice is generated with the polar axis along `z`, whereas the closed-form
//! ellipsoid solution of Gade (2010) puts the polar axis along `x` and treats `(y, z)` as
//! the equatorial plane. [`RotationMatrix::GADE`] is the fixed basis change between both
//! frames:
//!
//! ```text
//!       | 0  0  1 |
//! R  =  | 0  1  0 |        x' = R · x
//!       |-1  0  0 |
//! ```
//!
//! `R` is a signed permutation, hence orthogonal: the inverse rotation is `Rᵀ`
//! ([`RotationMatrix::transpose`]).
//!
//! Two entry points are provided:
//!
//! * [`RotationMatrix::rotate`] – typed, infallible product on [`Vector3`], used by the pipeline.
//! * [`xyz_dot_matrix`] – untyped product on slices, validating the dimensions of both operands.
//!
//! ## See also
//! ------------
//! * Gade, K. (2010). *A Non-singular Horizontal Position Representation*. The Journal of
//!   Navigation, 63(3), 395–417.

use nalgebra::{Matrix3, Vector3};

use crate::edpoints_errors::EdPointsError;

/// Fixed 3×3 rotation applied before and after the ellipsoid projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix(Matrix3<f64>);

impl RotationMatrix {
    /// The basis change `[[0, 0, 1], [0, 1, 0], [-1, 0, 0]]` from Gade (2010).
    pub const GADE: RotationMatrix = RotationMatrix(Matrix3::new(
        0.0, 0.0, 1.0, //
        0.0, 1.0, 0.0, //
        -1.0, 0.0, 0.0,
    ));

    /// Underlying row-major matrix.
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.0
    }

    /// Transposed matrix, i.e. the reverse rotation for an orthogonal `R`.
    pub fn transpose(&self) -> Self {
        RotationMatrix(self.0.transpose())
    }

    /// Apply the rotation: `result_i = Σ_j vector_j · R[i][j]`.
    #[inline]
    pub fn rotate(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.0 * vector
    }
}

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::GADE
    }
}

impl TryFrom<&[Vec<f64>]> for RotationMatrix {
    type Error = EdPointsError;

    /// Build a rotation matrix from row-major rows.
    ///
    /// Errors
    /// ----------
    /// * [`EdPointsError::DimensionMismatch`] unless there are exactly 3 rows of 3 entries.
    /// * [`EdPointsError::TypeMismatch`] if an entry is NaN or infinite.
    fn try_from(rows: &[Vec<f64>]) -> Result<Self, Self::Error> {
        if rows.len() != 3 {
            return Err(EdPointsError::DimensionMismatch {
                expected: 3,
                found: rows.len(),
            });
        }
        if let Some(row) = rows.iter().find(|row| row.len() != 3) {
            return Err(EdPointsError::DimensionMismatch {
                expected: 3,
                found: row.len(),
            });
        }
        if rows.iter().flatten().any(|v| !v.is_finite()) {
            return Err(EdPointsError::TypeMismatch(
                "rotation matrix entries must be finite numbers".into(),
            ));
        }

        Ok(RotationMatrix(Matrix3::from_fn(|i, j| rows[i][j])))
    }
}

/// Matrix-vector product on untyped rows.
///
/// Computes `result_i = Σ_j vector_j · matrix[i][j]`, the same product as
/// [`RotationMatrix::rotate`], for callers holding plain slices.
///
/// Arguments
/// ---------
/// * `vector`: the coordinate to rotate.
/// * `matrix`: a square matrix given as row-major rows.
///
/// Returns
/// --------
/// * The rotated coordinate, with as many components as `matrix` has rows.
///
/// Errors
/// ----------
/// * [`EdPointsError::DimensionMismatch`] if `matrix` is not square or if `vector.len()`
///   differs from the row length.
pub fn xyz_dot_matrix(vector: &[f64], matrix: &[Vec<f64>]) -> Result<Vec<f64>, EdPointsError> {
    let dim = matrix.len();
    if let Some(row) = matrix.iter().find(|row| row.len() != dim) {
        return Err(EdPointsError::DimensionMismatch {
            expected: dim,
            found: row.len(),
        });
    }
    if vector.len() != dim {
        return Err(EdPointsError::DimensionMismatch {
            expected: dim,
            found: vector.len(),
        });
    }

    Ok(matrix
        .iter()
        .map(|row| row.iter().zip(vector).map(|(m, v)| v * m).sum())
        .collect())
}

/// Lift an untyped coordinate row into a [`Vector3`].
///
/// Errors
/// ----------
/// * [`EdPointsError::DimensionMismatch`] unless `coordinate` has exactly 3 components.
pub fn vector3_from_slice(coordinate: &[f64]) -> Result<Vector3<f64>, EdPointsError> {
    match coordinate {
        [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
        _ => Err(EdPointsError::DimensionMismatch {
            expected: 3,
            found: coordinate.len(),
        }),
    }
}

/// Reject coordinates holding NaN or infinite components.
pub(crate) fn ensure_finite(coordinates: &[Vector3<f64>], what: &str) -> Result<(), EdPointsError> {
    match coordinates
        .iter()
        .position(|c| c.iter().any(|v| !v.is_finite()))
    {
        Some(idx) => Err(EdPointsError::TypeMismatch(format!(
            "{what} coordinate at index {idx} is not a finite number"
        ))),
        None => Ok(()),
    }
}
