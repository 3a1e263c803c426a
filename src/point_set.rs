//! # Equidistant point set
//!
//! [`PointSet`] runs the whole pipeline once at construction and keeps its three
//! index-aligned outputs:
//!
//! ```text
//! generate_points ──► cartesian ──► cartesian_to_ecef ──► ecef ──► ecef_to_geodetic ──► geodetic
//! ```
//!
//! `cartesian[i]`, `ecef[i]` and `geodetic[i]` always describe the same physical point.
//! The set is immutable once built: either all `n` points are produced, or construction fails
//! and nothing is returned.
//!
//! ## Example
//!
//! ```rust
//! use edpoints::point_set::{PointSet, PointSetParams};
//!
//! let params = PointSetParams::builder()
//!     .n_points(100)
//!     .equatorial_radius(6_378_137.0)
//!     .polar_radius(6_356_752.3)
//!     .build()?;
//! let points = PointSet::from_params(&params)?;
//!
//! assert_eq!(points.len(), 100);
//! for (_xyz, _ecef, lonlat) in points.iter() {
//!     assert!((-90.0..=90.0).contains(&lonlat.latitude));
//! }
//! # Ok::<(), edpoints::edpoints_errors::EdPointsError>(())
//! ```

use itertools::izip;
use nalgebra::Vector3;
use tracing::debug;

use crate::constants::{Meter, EARTH_MAJOR_AXIS, EARTH_MINOR_AXIS, MIN_POINTS};
use crate::edpoints_errors::EdPointsError;
use crate::ellipsoid::{cartesian_to_ecef, EllipsoidShape};
use crate::geodetic::{ecef_to_geodetic, GeodeticPoint};
use crate::lattice::generate_points;
use crate::ref_system::RotationMatrix;

/// Validated inputs of a [`PointSet`].
#[derive(Debug, Clone, PartialEq)]
pub struct PointSetParams {
    n_points: usize,
    shape: EllipsoidShape,
}

impl PointSetParams {
    pub fn builder() -> PointSetParamsBuilder {
        PointSetParamsBuilder::new()
    }

    pub fn n_points(&self) -> usize {
        self.n_points
    }

    pub fn shape(&self) -> &EllipsoidShape {
        &self.shape
    }
}

/// Builder for [`PointSetParams`]; defaults to the WGS-84 ellipsoid and no points.
#[derive(Debug, Clone)]
pub struct PointSetParamsBuilder {
    n_points: i64,
    equatorial_radius: Meter,
    polar_radius: Meter,
}

impl Default for PointSetParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PointSetParamsBuilder {
    pub fn new() -> Self {
        Self {
            n_points: 0,
            equatorial_radius: EARTH_MAJOR_AXIS,
            polar_radius: EARTH_MINOR_AXIS,
        }
    }

    pub fn n_points(mut self, v: i64) -> Self {
        self.n_points = v;
        self
    }
    pub fn equatorial_radius(mut self, v: Meter) -> Self {
        self.equatorial_radius = v;
        self
    }
    pub fn polar_radius(mut self, v: Meter) -> Self {
        self.polar_radius = v;
        self
    }

    /// Validate and freeze the parameters.
    ///
    /// Errors
    /// ----------
    /// * [`EdPointsError::InvalidArgument`] if `n_points <= 2` or a radius is not strictly positive.
    /// * [`EdPointsError::TypeMismatch`] if a radius is NaN or infinite.
    pub fn build(self) -> Result<PointSetParams, EdPointsError> {
        let n_points = usize::try_from(self.n_points)
            .ok()
            .filter(|n| *n >= MIN_POINTS)
            .ok_or_else(|| {
                EdPointsError::InvalidArgument("`n_points` must be larger than 2".into())
            })?;

        Ok(PointSetParams {
            n_points,
            shape: EllipsoidShape::new(self.equatorial_radius, self.polar_radius)?,
        })
    }
}

/// Almost equidistant points on the globe in cartesian, ECEF-direction and geodetic form.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    cartesian: Vec<Vector3<f64>>,
    ecef: Vec<Vector3<f64>>,
    geodetic: Vec<GeodeticPoint>,
}

impl PointSet {
    /// Generate `n_points` points and project them on `shape`.
    ///
    /// Arguments
    /// -----------------
    /// * `n_points`: number of points, must be larger than 2.
    /// * `shape`: reference ellipsoid, see [`EllipsoidShape::wgs84`].
    ///
    /// Return
    /// ----------
    /// * The complete point set, or an [`EdPointsError`] if an argument is invalid.
    ///
    /// See also
    /// ------------
    /// * [`generate_points`] – Lattice on the unit sphere.
    /// * [`cartesian_to_ecef`] – Closed-form ellipsoid projection.
    /// * [`ecef_to_geodetic`] – Longitude/latitude conversion.
    pub fn new(n_points: usize, shape: EllipsoidShape) -> Result<Self, EdPointsError> {
        let rotation = RotationMatrix::GADE;

        let cartesian = generate_points(n_points)?;
        let ecef = cartesian_to_ecef(&cartesian, &shape, &rotation)?;
        let geodetic = ecef_to_geodetic(&ecef, &rotation)?;
        debug!(n_points, "point set generated");

        Ok(PointSet {
            cartesian,
            ecef,
            geodetic,
        })
    }

    pub fn from_params(params: &PointSetParams) -> Result<Self, EdPointsError> {
        Self::new(params.n_points, params.shape)
    }

    /// Unit-sphere cartesian coordinates.
    pub fn cartesian(&self) -> &[Vector3<f64>] {
        &self.cartesian
    }

    /// Earth-centered unit directions of the points projected on the ellipsoid.
    pub fn ecef(&self) -> &[Vector3<f64>] {
        &self.ecef
    }

    /// Longitude/latitude in degrees.
    pub fn geodetic(&self) -> &[GeodeticPoint] {
        &self.geodetic
    }

    pub fn len(&self) -> usize {
        self.cartesian.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cartesian.is_empty()
    }

    /// Iterate over index-aligned `(cartesian, ecef, geodetic)` triples.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&Vector3<f64>, &Vector3<f64>, &GeodeticPoint)> + '_ {
        izip!(&self.cartesian, &self.ecef, &self.geodetic)
    }
}
