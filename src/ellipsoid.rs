//! # Projection of unit-sphere directions onto the reference ellipsoid
//!
//! For every direction produced by the lattice, [`cartesian_to_ecef`] finds the point of the
//! reference ellipsoid whose **geodetic vertical** is that direction, then returns the
//! direction from Earth's center to that point. The solution is closed-form (no Newton or
//! Bowring iteration): it follows equation 23 of Gade (2010), itself a depressed
//! cubic/quartic decomposition in the spirit of Vermeille's geodetic solution.
//!
//! ## Output semantics
//!
//! The input is first scaled to planetary size by the equatorial radius, but the final
//! result is renormalized to unit length. What this module calls "ECEF" is therefore a
//! unit **direction**, not a position in meters.
//!
//! ## See also
//! ------------
//! * [`crate::ref_system::RotationMatrix`] – Frame change wrapped around the solution.
//! * [`crate::geodetic::ecef_to_geodetic`] – Next stage of the pipeline.

use nalgebra::Vector3;
use tracing::debug;

use crate::constants::{Meter, EARTH_MAJOR_AXIS, EARTH_MINOR_AXIS};
use crate::edpoints_errors::EdPointsError;
use crate::parallel::map_points;
use crate::ref_system::{ensure_finite, RotationMatrix};

/// Shape of a reference ellipsoid of revolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipsoidShape {
    equatorial_radius: Meter,
    polar_radius: Meter,
}

impl EllipsoidShape {
    /// Create a new ellipsoid from its two radii, in meters.
    ///
    /// Errors
    /// ----------
    /// * [`EdPointsError::TypeMismatch`] if a radius is NaN or infinite.
    /// * [`EdPointsError::InvalidArgument`] if a radius is not strictly positive.
    pub fn new(equatorial_radius: Meter, polar_radius: Meter) -> Result<Self, EdPointsError> {
        for (name, value) in [
            ("equatorial_radius", equatorial_radius),
            ("polar_radius", polar_radius),
        ] {
            if !value.is_finite() {
                return Err(EdPointsError::TypeMismatch(format!(
                    "`{name}` must be a finite number, got {value}"
                )));
            }
            if value <= 0.0 {
                return Err(EdPointsError::InvalidArgument(format!(
                    "`{name}` must be strictly positive, got {value}"
                )));
            }
        }

        Ok(EllipsoidShape {
            equatorial_radius,
            polar_radius,
        })
    }

    /// The WGS-84 ellipsoid.
    pub fn wgs84() -> Self {
        EllipsoidShape {
            equatorial_radius: EARTH_MAJOR_AXIS,
            polar_radius: EARTH_MINOR_AXIS,
        }
    }

    pub fn equatorial_radius(&self) -> Meter {
        self.equatorial_radius
    }

    pub fn polar_radius(&self) -> Meter {
        self.polar_radius
    }

    /// Flattening `f = (a − b) / a`.
    pub fn flattening(&self) -> f64 {
        (self.equatorial_radius - self.polar_radius) / self.equatorial_radius
    }

    /// First eccentricity squared `e² = 2f − f²`.
    pub fn e_squared(&self) -> f64 {
        let f = self.flattening();
        f * 2.0 - f.powi(2)
    }
}

impl Default for EllipsoidShape {
    fn default() -> Self {
        Self::wgs84()
    }
}

/// Project unit-sphere cartesian coordinates onto the ellipsoid and return the
/// earth-centered unit directions of the projected points.
///
/// For each input point `c`, with `a` the equatorial radius and `e²` the eccentricity squared:
///
/// ```text
/// (X, Y, Z) = R · (a·c)                      X along the polar axis
/// p = (Y² + Z²) / a²        q = (1 − e²)·X² / a²
/// r = (p + q − e⁴) / 6      s = e⁴·p·q / (4r³)
/// t = ∛(1 + s + √(s(2 + s)))
/// u = r(1 + t + 1/t)        v = √(u² + e⁴q)
/// w = e²(u + v − q) / (2v)  k = √(u + v + w²) − w
/// ```
///
/// The ellipsoid point `(X, k/(k+e²)·Y, k/(k+e²)·Z)`, scaled to unit norm, is rotated back with
/// `Rᵀ` and renormalized.
///
/// Arguments
/// ---------
/// * `coordinates`: unit-sphere cartesian coordinates, e.g. from [`crate::lattice::generate_points`].
/// * `shape`: reference ellipsoid.
/// * `rotation`: frame change into the solution frame, see [`RotationMatrix::GADE`].
///
/// Returns
/// --------
/// * One unit direction per input, index-aligned with `coordinates`.
///
/// Errors
/// ----------
/// * [`EdPointsError::TypeMismatch`] if a coordinate holds NaN or infinite components.
/// * [`EdPointsError::InvalidArgument`] if a coordinate is the zero vector (no direction), or if
///   the closed form has no real solution for a point, which happens for strongly flattened
///   shapes (`e² > (√5 − 1)/2` near the poles) or inputs far shorter than unit length.
pub fn cartesian_to_ecef(
    coordinates: &[Vector3<f64>],
    shape: &EllipsoidShape,
    rotation: &RotationMatrix,
) -> Result<Vec<Vector3<f64>>, EdPointsError> {
    ensure_finite(coordinates, "cartesian")?;
    if let Some(idx) = coordinates.iter().position(|c| c.norm_squared() == 0.0) {
        return Err(EdPointsError::InvalidArgument(format!(
            "cartesian coordinate at index {idx} is the zero vector"
        )));
    }

    let e_squared = shape.e_squared();
    let reverse = rotation.transpose();
    debug!(
        n_points = coordinates.len(),
        flattening = shape.flattening(),
        e_squared,
        "projecting cartesian coordinates onto the ellipsoid"
    );

    let projected = map_points(coordinates, |coord| {
        project_direction(
            coord,
            shape.equatorial_radius,
            e_squared,
            rotation,
            &reverse,
        )
    });

    projected
        .into_iter()
        .enumerate()
        .map(|(idx, direction)| {
            direction.ok_or_else(|| {
                EdPointsError::InvalidArgument(format!(
                    "cartesian coordinate at index {idx} has no closed-form projection on the \
                     ellipsoid (equatorial radius {} m, polar radius {} m)",
                    shape.equatorial_radius, shape.polar_radius
                ))
            })
        })
        .collect()
}

fn project_direction(
    coord: &Vector3<f64>,
    equatorial_radius: Meter,
    e_squared: f64,
    rotation: &RotationMatrix,
    reverse: &RotationMatrix,
) -> Option<Vector3<f64>> {
    let scaled = rotation.rotate(&(coord * equatorial_radius));
    let (x, y, z) = (scaled.x, scaled.y, scaled.z);

    let e4 = e_squared.powi(2);
    let a2 = equatorial_radius.powi(2);

    let rr_squared = y.powi(2) + z.powi(2);
    let rr = rr_squared.sqrt();

    let p = rr_squared / a2;
    let q = (1.0 - e_squared) / a2 * x.powi(2);
    let r = (p + q - e4) / 6.0;
    let s = e4 * p * q / (4.0 * r.powi(3));
    let t = (1.0 + s + (s * (2.0 + s)).sqrt()).powf(1.0 / 3.0);
    let u = r * (1.0 + t + 1.0 / t);
    let v = (u.powi(2) + e4 * q).sqrt();
    let w = e_squared * (u + v - q) / (2.0 * v);
    let k = (u + v + w.powi(2)).sqrt() - w;

    let pre = 1.0 / ((k * rr / (k + e_squared)).powi(2) + x.powi(2)).sqrt();
    let on_ellipsoid = Vector3::new(
        pre * x,
        pre * k / (k + e_squared) * y,
        pre * k / (k + e_squared) * z,
    );

    // a negative radicand or a vanishing cube root turns the whole chain into NaN
    let direction = reverse.rotate(&on_ellipsoid) / on_ellipsoid.norm();
    direction.iter().all(|c| c.is_finite()).then_some(direction)
}

#[cfg(test)]
mod ellipsoid_test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::lattice::generate_points;

    #[test]
    fn test_shape_constants() {
        let wgs84 = EllipsoidShape::default();
        assert_eq!(wgs84.equatorial_radius(), 6378137.0);
        assert_eq!(wgs84.polar_radius(), 6356752.3);
        assert_relative_eq!(wgs84.flattening(), 1.0 / 298.257, max_relative = 1e-5);
        assert_relative_eq!(wgs84.e_squared(), 0.006694384, epsilon = 1e-8);

        let sphere = EllipsoidShape::new(1000.0, 1000.0).unwrap();
        assert_eq!(sphere.flattening(), 0.0);
        assert_eq!(sphere.e_squared(), 0.0);
    }

    #[test]
    fn test_shape_invalid_radii() {
        assert!(matches!(
            EllipsoidShape::new(f64::NAN, 6356752.3),
            Err(EdPointsError::TypeMismatch(_))
        ));
        assert!(matches!(
            EllipsoidShape::new(6378137.0, f64::INFINITY),
            Err(EdPointsError::TypeMismatch(_))
        ));
        assert!(matches!(
            EllipsoidShape::new(0.0, 6356752.3),
            Err(EdPointsError::InvalidArgument(_))
        ));
        assert!(matches!(
            EllipsoidShape::new(6378137.0, -1.0),
            Err(EdPointsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_cartesian_to_ecef_results() {
        let results = [
            (
                [0.9732830948042264, -0.09485361020175874, -0.20910000000000006],
                [0.9729955014300911, -0.09482558210802891, -0.21044681792481235],
            ),
            (
                [-0.44459823051156266, -0.027754700970959778, -0.8953],
                [-0.4422141872630115, -0.0276058735512257, -0.8964845388119017],
            ),
            (
                [0.717728373321176, -0.15911496513445436, 0.6779],
                [0.7155117676469192, -0.1586235603806696, 0.6803539346920405],
            ),
            (
                [0.5256372653699255, 0.7446729317320636, -0.4113],
                [0.5250373380026654, 0.7438230116429894, -0.41359777689613886],
            ),
            (
                [0.40902883446967564, 0.8240811868817166, 0.3919],
                [0.40860490759589346, 0.82322709022188, 0.3941309267405542],
            ),
        ];

        let input: Vec<Vector3<f64>> = results.iter().map(|(c, _)| Vector3::from(*c)).collect();
        let ecef = cartesian_to_ecef(
            &input,
            &EllipsoidShape::wgs84(),
            &RotationMatrix::GADE,
        )
        .unwrap();

        assert_eq!(ecef.len(), results.len());
        for (out, (_, expected)) in ecef.iter().zip(results.iter()) {
            assert_relative_eq!(*out, Vector3::from(*expected), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_poles_and_equator_are_fixed() {
        let input = vec![
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
        ];
        let ecef =
            cartesian_to_ecef(&input, &EllipsoidShape::wgs84(), &RotationMatrix::GADE).unwrap();

        for (out, expected) in ecef.iter().zip(input.iter()) {
            assert_relative_eq!(*out, *expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sphere_is_identity() {
        let input = generate_points(50).unwrap();
        let sphere = EllipsoidShape::new(6371000.0, 6371000.0).unwrap();
        let ecef = cartesian_to_ecef(&input, &sphere, &RotationMatrix::GADE).unwrap();

        for (out, expected) in ecef.iter().zip(input.iter()) {
            assert_relative_eq!(*out, *expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_output_is_unit_and_moves_toward_poles() {
        let input = generate_points(500).unwrap();
        let ecef =
            cartesian_to_ecef(&input, &EllipsoidShape::wgs84(), &RotationMatrix::GADE).unwrap();

        for (out, inp) in ecef.iter().zip(input.iter()) {
            assert_relative_eq!(out.norm(), 1.0, epsilon = 1e-12);
            // oblateness pushes every off-equator direction toward its pole
            assert!(out.z.abs() >= inp.z.abs());
        }
    }

    #[test]
    fn test_cartesian_to_ecef_invalid_coordinates() {
        let shape = EllipsoidShape::wgs84();
        let rot = RotationMatrix::GADE;

        assert!(matches!(
            cartesian_to_ecef(&[Vector3::new(f64::NAN, 0.0, 1.0)], &shape, &rot),
            Err(EdPointsError::TypeMismatch(_))
        ));
        assert_eq!(
            cartesian_to_ecef(
                &[Vector3::new(0.0, 0.0, 1.0), Vector3::zeros()],
                &shape,
                &rot
            ),
            Err(EdPointsError::InvalidArgument(
                "cartesian coordinate at index 1 is the zero vector".into()
            ))
        );
        assert!(cartesian_to_ecef(&[], &shape, &rot).unwrap().is_empty());
    }

    #[test]
    fn test_cartesian_to_ecef_strongly_flattened_shape() {
        let input = generate_points(200).unwrap();
        let flat = EllipsoidShape::new(6378137.0, 3_000_000.0).unwrap();

        assert_eq!(
            cartesian_to_ecef(&input, &flat, &RotationMatrix::GADE),
            Err(EdPointsError::InvalidArgument(
                "cartesian coordinate at index 0 has no closed-form projection on the \
                 ellipsoid (equatorial radius 6378137 m, polar radius 3000000 m)"
                    .into()
            ))
        );

        let disc = EllipsoidShape::new(1000.0, 10.0).unwrap();
        assert!(matches!(
            cartesian_to_ecef(&input, &disc, &RotationMatrix::GADE),
            Err(EdPointsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_cartesian_to_ecef_short_vector() {
        let result = cartesian_to_ecef(
            &[Vector3::new(0.0, 0.0, 1.0), Vector3::new(1e-3, 0.0, 1e-3)],
            &EllipsoidShape::wgs84(),
            &RotationMatrix::GADE,
        );
        assert!(matches!(
            result,
            Err(EdPointsError::InvalidArgument(msg)) if msg.contains("index 1")
        ));
    }

    #[test]
    fn test_moderate_flattening_stays_finite() {
        let input = generate_points(200).unwrap();
        let shape = EllipsoidShape::new(6378137.0, 5_000_000.0).unwrap();
        let ecef = cartesian_to_ecef(&input, &shape, &RotationMatrix::GADE).unwrap();

        for out in &ecef {
            assert_relative_eq!(out.norm(), 1.0, epsilon = 1e-12);
        }
    }
}
