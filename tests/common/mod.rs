use approx::assert_relative_eq;
use edpoints::constants::{Kilometer, HAVERSINE_EARTH_RADIUS_KM};
use edpoints::geodetic::GeodeticPoint;
use nalgebra::Vector3;
use rayon::prelude::*;

pub fn assert_vectors_close(actual: &[Vector3<f64>], expected: &[[f64; 3]], epsilon: f64) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_relative_eq!(*a, Vector3::from(*e), epsilon = epsilon);
    }
}

/// Great-circle distance between the points of index `i` and `j` of the precomputed
/// `(longitude, sin φ, cos φ)` table, in kilometers.
fn haversine(table: &[(f64, f64, f64)], i: usize, j: usize) -> Kilometer {
    let (lon1, sin_lat1, cos_lat1) = table[i];
    let (lon2, sin_lat2, cos_lat2) = table[j];
    let delta_lng = lon2 - lon1;
    let (sin_delta_lng, cos_delta_lng) = delta_lng.sin_cos();

    HAVERSINE_EARTH_RADIUS_KM
        * ((cos_lat2 * sin_delta_lng).powi(2)
            + (cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta_lng).powi(2))
        .sqrt()
        .atan2(sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta_lng)
}

/// Maximum relative deviation of the nearest-neighbour great-circle distances from their mean.
///
/// The deviation is the smaller of `mean − min` and `max − mean`, divided by the mean.
/// Nearest neighbours are searched exhaustively (O(n²)), one point per rayon task.
pub fn max_nn_distance_percentage_deviation(points: &[GeodeticPoint]) -> f64 {
    let table: Vec<(f64, f64, f64)> = points
        .iter()
        .map(|p| {
            let (sin_lat, cos_lat) = p.latitude.to_radians().sin_cos();
            (p.longitude.to_radians(), sin_lat, cos_lat)
        })
        .collect();

    let distances: Vec<Kilometer> = (0..table.len())
        .into_par_iter()
        .map(|i| {
            (0..table.len())
                .map(|j| haversine(&table, i, j))
                .filter(|d| *d > 0.0)
                .fold(f64::INFINITY, f64::min)
        })
        .collect();

    let nnd_min = distances.iter().copied().fold(f64::INFINITY, f64::min);
    let nnd_max = distances.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let nnd_mean = distances.iter().sum::<f64>() / distances.len() as f64;

    let max_dev = (nnd_mean - nnd_min).min(nnd_max - nnd_mean);
    max_dev / nnd_mean
}
