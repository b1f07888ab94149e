use sat2d::math::{Point, Real, Vector};
use sat2d::na::RealField;
use sat2d::shape::{Polygon, PolygonError};

fn pentagon() -> Polygon {
    Polygon::new(
        Point::new(3.0, -2.0),
        [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 1.5),
            Point::new(1.0, 3.0),
            Point::new(-1.0, 1.5),
        ],
    )
}

#[test]
fn reset_angle_then_rotate_matches_a_single_rotation() {
    let theta = 0.7;

    let mut reference = pentagon();
    let _ = reference.rotate(theta);

    let mut polygon = pentagon();
    let _ = polygon
        .set_angle(1.3)
        .set_angle(-Real::frac_pi_4())
        .set_angle(2.0)
        .set_angle(0.0)
        .rotate(theta)
        .set_angle(0.0);

    assert_eq!(polygon.calc_points(), reference.calc_points());
    assert_eq!(polygon.normals(), reference.normals());
}

#[test]
fn normals_are_outward_unit_vectors() {
    let polygon = pentagon().with_angle(0.4).with_offset(Vector::new(-1.0, -1.0));
    let centroid = polygon.centroid().unwrap();

    for i in 0..polygon.len() {
        let normal = polygon.normals()[i];
        let edge = polygon.edges()[i];
        assert_relative_eq!(normal.norm(), 1.0, epsilon = 1.0e-6);
        assert_relative_eq!(normal.dot(&edge), 0.0, epsilon = 1.0e-5);
        // The centroid is behind every edge.
        assert!((centroid - polygon.calc_points()[i]).dot(&normal) < 0.0);
    }
}

#[test]
fn centroid_follows_offset_and_angle() {
    let square = Polygon::new(
        Point::origin(),
        [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ],
    );
    assert_relative_eq!(square.centroid().unwrap(), Point::new(1.0, 1.0), epsilon = 1.0e-6);

    let moved = square
        .with_offset(Vector::new(1.0, 0.0))
        .with_angle(Real::frac_pi_2());
    assert_relative_eq!(moved.centroid().unwrap(), Point::new(-1.0, 2.0), epsilon = 1.0e-5);
}

#[test]
fn validating_constructor() {
    assert!(Polygon::try_new(Point::origin(), pentagon().points().iter().copied()).is_ok());
    assert_eq!(
        Polygon::try_new(Point::origin(), [Point::origin(), Point::new(1.0, 0.0)]).unwrap_err(),
        PolygonError::NotEnoughVertices(2)
    );
    assert_eq!(
        Polygon::try_new(
            Point::origin(),
            [
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(1.0, 1.0),
            ]
        )
        .unwrap_err(),
        PolygonError::DegenerateEdge(2)
    );
}

#[test]
fn centroid_of_a_tiny_square() {
    let side = 1.0e-4;
    let square = Polygon::new(
        Point::origin(),
        [
            Point::new(0.0, 0.0),
            Point::new(side, 0.0),
            Point::new(side, side),
            Point::new(0.0, side),
        ],
    );
    let centroid = square.centroid().unwrap();
    assert_relative_eq!(centroid, Point::new(side / 2.0, side / 2.0), max_relative = 1.0e-4);

    // Collinear vertices are still rejected, whatever their scale.
    let flat = Polygon::new(
        Point::origin(),
        [
            Point::new(0.0, 0.0),
            Point::new(side, side),
            Point::new(2.0 * side, 2.0 * side),
        ],
    );
    assert_eq!(flat.centroid(), Err(PolygonError::ZeroArea));
}
