//! # Command-line surface
//!
//! ```text
//! edpoints N [-f FILE] [-r EQUATORIAL_RADIUS] [-p POLAR_RADIUS] [-g | -c | -e] [-v...]
//! ```
//!
//! * `N` – number of points, must be larger than 2.
//! * `-f/--file-name` – destination file; without it the selected sequence is printed to
//!   stdout as CSV (header included).
//! * `-r/--equatorial-radius`, `-p/--polar-radius` – ellipsoid radii in meters (WGS-84 by default).
//! * `-g/--geojson` (requires `-f`), `-c/--cartesian`, `-e/--ecef` – mutually exclusive output
//!   selection; geodetic CSV when none is given.

use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser};
use tracing::info;

use crate::constants::{Meter, EARTH_MAJOR_AXIS, EARTH_MINOR_AXIS};
use crate::edpoints_errors::EdPointsError;
use crate::point_set::{PointSet, PointSetParams};
use crate::writers::{write_geodetic_csv, write_xyz_csv};

/// Generate (almost) equidistant points on the globe
#[derive(Debug, Parser)]
#[command(name = "edpoints", version)]
#[command(group(
    ArgGroup::new("format")
        .args(["geojson", "cartesian", "ecef"])
        .multiple(false)
))]
pub struct Cli {
    /// Number of points to be generated
    #[arg(value_name = "N", allow_negative_numbers = true, value_parser = parse_point_count)]
    pub n_points: i64,

    /// Path to a file for the result to be stored
    #[arg(short = 'f', long = "file-name")]
    pub file_name: Option<PathBuf>,

    /// Custom equatorial radius in meters (default: WGS-84)
    #[arg(short = 'r', long, default_value_t = EARTH_MAJOR_AXIS, value_parser = parse_radius)]
    pub equatorial_radius: Meter,

    /// Custom polar radius in meters (default: WGS-84)
    #[arg(short = 'p', long, default_value_t = EARTH_MINOR_AXIS, value_parser = parse_radius)]
    pub polar_radius: Meter,

    /// Store the geodetic coordinates as GeoJSON (requires --file-name)
    #[arg(short = 'g', long, requires = "file_name")]
    pub geojson: bool,

    /// Output the cartesian coordinates instead of the geodetic ones
    #[arg(short = 'c', long)]
    pub cartesian: bool,

    /// Output the ECEF coordinates instead of the geodetic ones
    #[arg(short = 'e', long)]
    pub ecef: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Sequence and encoding selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    GeodeticCsv,
    CartesianCsv,
    EcefCsv,
    GeoJson,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.geojson {
            OutputFormat::GeoJson
        } else if self.cartesian {
            OutputFormat::CartesianCsv
        } else if self.ecef {
            OutputFormat::EcefCsv
        } else {
            OutputFormat::GeodeticCsv
        }
    }
}

/// Parse the point count, reporting non-integers as [`EdPointsError::TypeMismatch`].
pub fn parse_point_count(value: &str) -> Result<i64, EdPointsError> {
    value.trim().parse::<i64>().map_err(|_| {
        EdPointsError::TypeMismatch(format!("`N` must be an integer, got '{value}'"))
    })
}

/// Parse a radius, reporting non-numeric input as [`EdPointsError::TypeMismatch`].
pub fn parse_radius(value: &str) -> Result<Meter, EdPointsError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            EdPointsError::TypeMismatch(format!("radius must be a number, got '{value}'"))
        })
}

/// Execute the command: build the point set and write the selected sequence.
///
/// Arguments
/// -----------------
/// * `cli`: parsed arguments.
/// * `stdout`: sink used when no `--file-name` is given.
///
/// Errors
/// ----------
/// * [`EdPointsError::InvalidArgument`] for an invalid point count or radius, or when GeoJSON
///   output is requested without a file. Checked before any point is computed.
/// * I/O and serialization errors from the writers, propagated unchanged.
pub fn run<W: Write>(cli: &Cli, stdout: W) -> Result<(), EdPointsError> {
    let format = cli.output_format();
    if format == OutputFormat::GeoJson && cli.file_name.is_none() {
        return Err(EdPointsError::InvalidArgument(
            "If `-g`/`--geojson` is given, `-f`/`--file-name` must also be specified.".into(),
        ));
    }

    let params = PointSetParams::builder()
        .n_points(cli.n_points)
        .equatorial_radius(cli.equatorial_radius)
        .polar_radius(cli.polar_radius)
        .build()?;

    info!(
        n_points = params.n_points(),
        equatorial_radius = params.shape().equatorial_radius(),
        polar_radius = params.shape().polar_radius(),
        ?format,
        "generating points"
    );
    let points = PointSet::from_params(&params)?;

    match &cli.file_name {
        Some(path) => match format {
            OutputFormat::GeoJson => points.write_geodetic_to_geojson(path),
            OutputFormat::CartesianCsv => points.write_cartesian_to_csv(path, true),
            OutputFormat::EcefCsv => points.write_ecef_to_csv(path, true),
            OutputFormat::GeodeticCsv => points.write_geodetic_to_csv(path, true),
        },
        None => match format {
            OutputFormat::CartesianCsv => write_xyz_csv(stdout, points.cartesian(), true),
            OutputFormat::EcefCsv => write_xyz_csv(stdout, points.ecef(), true),
            _ => write_geodetic_csv(stdout, points.geodetic(), true),
        },
    }
}
