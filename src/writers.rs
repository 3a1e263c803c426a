//! # CSV and GeoJSON output
//!
//! Writers consume the sequences held by a [`PointSet`] and never modify them.
//!
//! | Sequence    | CSV header            | GeoJSON                          |
//! |-------------|-----------------------|----------------------------------|
//! | `cartesian` | `x,y,z`               | –                                |
//! | `ecef`      | `x,y,z`               | –                                |
//! | `geodetic`  | `longitude,latitude`  | `MultiPoint` of `[lon, lat]`     |
//!
//! The generic writers accept any [`std::io::Write`] so the CLI can stream to stdout;
//! the `PointSet` convenience methods create (or truncate) a file at the given path.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use nalgebra::Vector3;
use serde::Serialize;
use tracing::info;

use crate::edpoints_errors::EdPointsError;
use crate::geodetic::GeodeticPoint;
use crate::point_set::PointSet;

#[derive(Debug, Serialize)]
struct XyzRecord {
    x: f64,
    y: f64,
    z: f64,
}

impl From<&Vector3<f64>> for XyzRecord {
    fn from(v: &Vector3<f64>) -> Self {
        XyzRecord {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

#[derive(Debug, Serialize)]
struct MultiPoint {
    #[serde(rename = "type")]
    kind: &'static str,
    coordinates: Vec<[f64; 2]>,
}

fn write_records<W, T, I>(writer: W, records: I, header: bool) -> Result<(), EdPointsError>
where
    W: Write,
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(header)
        .from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `x,y,z` rows, used for both the cartesian and the ECEF sequences.
pub fn write_xyz_csv<W: Write>(
    writer: W,
    coordinates: &[Vector3<f64>],
    header: bool,
) -> Result<(), EdPointsError> {
    write_records(writer, coordinates.iter().map(XyzRecord::from), header)
}

/// Write `longitude,latitude` rows.
pub fn write_geodetic_csv<W: Write>(
    writer: W,
    coordinates: &[GeodeticPoint],
    header: bool,
) -> Result<(), EdPointsError> {
    write_records(writer, coordinates, header)
}

/// Write a GeoJSON `MultiPoint` geometry:
/// `{"type":"MultiPoint","coordinates":[[lon,lat],...]}`.
pub fn write_geodetic_geojson<W: Write>(
    mut writer: W,
    coordinates: &[GeodeticPoint],
) -> Result<(), EdPointsError> {
    let geometry = MultiPoint {
        kind: "MultiPoint",
        coordinates: coordinates.iter().map(|p| (*p).into()).collect(),
    };
    serde_json::to_writer(&mut writer, &geometry)?;
    writer.flush()?;
    Ok(())
}

fn create_file(path: &Path) -> Result<BufWriter<File>, EdPointsError> {
    Ok(BufWriter::new(File::create(path)?))
}

impl PointSet {
    /// Write the cartesian coordinates to a CSV file, with an optional `x,y,z` header row.
    pub fn write_cartesian_to_csv<P: AsRef<Path>>(
        &self,
        path: P,
        header: bool,
    ) -> Result<(), EdPointsError> {
        let path = path.as_ref();
        write_xyz_csv(create_file(path)?, self.cartesian(), header)?;
        info!(path = %path.display(), rows = self.len(), "cartesian CSV written");
        Ok(())
    }

    /// Write the ECEF directions to a CSV file, with an optional `x,y,z` header row.
    pub fn write_ecef_to_csv<P: AsRef<Path>>(
        &self,
        path: P,
        header: bool,
    ) -> Result<(), EdPointsError> {
        let path = path.as_ref();
        write_xyz_csv(create_file(path)?, self.ecef(), header)?;
        info!(path = %path.display(), rows = self.len(), "ECEF CSV written");
        Ok(())
    }

    /// Write the geodetic coordinates to a CSV file, with an optional
    /// `longitude,latitude` header row.
    pub fn write_geodetic_to_csv<P: AsRef<Path>>(
        &self,
        path: P,
        header: bool,
    ) -> Result<(), EdPointsError> {
        let path = path.as_ref();
        write_geodetic_csv(create_file(path)?, self.geodetic(), header)?;
        info!(path = %path.display(), rows = self.len(), "geodetic CSV written");
        Ok(())
    }

    /// Write the geodetic coordinates to a GeoJSON file.
    pub fn write_geodetic_to_geojson<P: AsRef<Path>>(&self, path: P) -> Result<(), EdPointsError> {
        let path = path.as_ref();
        write_geodetic_geojson(create_file(path)?, self.geodetic())?;
        info!(path = %path.display(), points = self.len(), "GeoJSON written");
        Ok(())
    }
}
