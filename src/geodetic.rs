//! # ECEF directions to geodetic longitude/latitude
//!
//! Inverse of the frame change applied in [`crate::ellipsoid`]: each unit direction is rotated
//! into the Gade (2010) frame (polar axis along `x`) and read off with equations 5 and 6 of
//! the same paper.

use nalgebra::Vector3;
use serde::Serialize;
use tracing::debug;

use crate::constants::Degree;
use crate::edpoints_errors::EdPointsError;
use crate::parallel::map_points;
use crate::ref_system::{ensure_finite, RotationMatrix};

/// Geodetic position on the reference ellipsoid, in degrees.
///
/// `longitude ∈ (-180, 180]`, `latitude ∈ [-90, 90]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeodeticPoint {
    pub longitude: Degree,
    pub latitude: Degree,
}

impl GeodeticPoint {
    pub fn new(longitude: Degree, latitude: Degree) -> Self {
        GeodeticPoint {
            longitude,
            latitude,
        }
    }
}

/// GeoJSON position order: `[longitude, latitude]`.
impl From<GeodeticPoint> for [f64; 2] {
    fn from(point: GeodeticPoint) -> Self {
        [point.longitude, point.latitude]
    }
}

/// Convert earth-centered unit directions to geodetic coordinates.
///
/// With `(x', y', z') = R · d`:
///
/// ```text
/// longitude = atan2(y', −z')
/// latitude  = atan2(x', √(y'² + z'²))
/// ```
///
/// Arguments
/// ---------
/// * `coordinates`: directions as returned by [`crate::ellipsoid::cartesian_to_ecef`].
/// * `rotation`: the same frame change used for the projection.
///
/// Returns
/// --------
/// * One [`GeodeticPoint`] per input, index-aligned with `coordinates`.
///
/// Errors
/// ----------
/// * [`EdPointsError::TypeMismatch`] if a coordinate holds NaN or infinite components.
pub fn ecef_to_geodetic(
    coordinates: &[Vector3<f64>],
    rotation: &RotationMatrix,
) -> Result<Vec<GeodeticPoint>, EdPointsError> {
    ensure_finite(coordinates, "ECEF")?;
    debug!(
        n_points = coordinates.len(),
        "converting ECEF directions to geodetic coordinates"
    );

    Ok(map_points(coordinates, |coord| {
        direction_to_geodetic(coord, rotation)
    }))
}

fn direction_to_geodetic(coord: &Vector3<f64>, rotation: &RotationMatrix) -> GeodeticPoint {
    let rotated = rotation.rotate(coord);

    let lon_rad = rotated.y.atan2(-rotated.z);
    let eq_comp = (rotated.y.powi(2) + rotated.z.powi(2)).sqrt();
    let lat_rad = rotated.x.atan2(eq_comp);

    let mut longitude = lon_rad.to_degrees();
    // atan2(-0.0, x<0) yields -180
    if longitude == -180.0 {
        longitude = 180.0;
    }

    GeodeticPoint::new(longitude, lat_rad.to_degrees())
}
