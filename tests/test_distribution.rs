mod common;

use common::max_nn_distance_percentage_deviation;
use edpoints::edpoints_errors::EdPointsError;
use edpoints::ellipsoid::EllipsoidShape;
use edpoints::point_set::{PointSet, PointSetParams};

#[test]
fn test_max_percentage_deviation_less_than_4_percent() {
    for n in [3, 10, 100, 1000, 10000] {
        let points = PointSet::new(n, EllipsoidShape::wgs84()).unwrap();
        let deviation = max_nn_distance_percentage_deviation(points.geodetic());
        assert!(
            deviation <= 0.04,
            "{n} points: nearest-neighbour deviation {deviation} above 4%"
        );
    }
}

#[test]
fn test_edpoints_npoints_less_than_3() {
    for n in [-1, 0, 1, 2] {
        assert_eq!(
            PointSetParams::builder().n_points(n).build(),
            Err(EdPointsError::InvalidArgument(
                "`n_points` must be larger than 2".into()
            ))
        );
    }
}

#[test]
fn test_custom_ellipsoid_keeps_distribution() {
    let params = PointSetParams::builder()
        .n_points(400)
        .equatorial_radius(3_396_190.0)
        .polar_radius(3_376_200.0)
        .build()
        .unwrap();
    let points = PointSet::from_params(&params).unwrap();

    assert_eq!(points.len(), 400);
    assert!(max_nn_distance_percentage_deviation(points.geodetic()) <= 0.04);
}
