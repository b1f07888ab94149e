use sat2d::math::{Point, Real, Vector};
use sat2d::na::RealField;
use sat2d::query::details::{test_circle_polygon, test_polygon_circle};
use sat2d::query::Response;
use sat2d::shape::{Aabb, Circle, Polygon, ShapeType};

fn square(size: Real) -> Polygon {
    Aabb::new(Point::origin(), size, size).to_polygon()
}

#[test]
fn circle_far_from_an_edge() {
    let circle = Circle::new(Point::new(3.0, 1.0), 0.5);
    assert!(!test_polygon_circle(&square(2.0), &circle, None));
    assert!(!test_circle_polygon(&circle, &square(2.0), None));
}

#[test]
fn circle_against_an_edge() {
    let polygon = square(2.0);
    let circle = Circle::new(Point::new(2.5, 1.0), 1.0);
    let mut response = Response::new();

    assert!(test_polygon_circle(&polygon, &circle, Some(&mut response)));
    assert_eq!(response.a, Some(ShapeType::Polygon));
    assert_eq!(response.b, Some(ShapeType::Circle));
    assert_relative_eq!(response.overlap, 0.5);
    assert_relative_eq!(response.overlap_n, Vector::x());
    assert_relative_eq!(response.overlap_v, Vector::new(0.5, 0.0));
    assert!(!response.a_in_b);
    assert!(!response.b_in_a);
}

#[test]
fn circle_against_a_vertex() {
    let polygon = square(2.0);
    let circle = Circle::new(Point::new(3.0, 3.0), 1.5);
    let mut response = Response::new();

    assert!(test_polygon_circle(&polygon, &circle, Some(&mut response)));
    assert_relative_eq!(response.overlap, 1.5 - Real::sqrt(2.0), epsilon = 1.0e-6);
    assert_relative_eq!(
        response.overlap_n,
        Vector::new(1.0, 1.0).normalize(),
        epsilon = 1.0e-6
    );

    // Inside the corner's bounding box, but out of reach of the vertex.
    let circle = Circle::new(Point::new(3.2, 3.2), 1.5);
    assert!(!test_polygon_circle(&polygon, &circle, None));
}

#[test]
fn circle_inside_polygon() {
    let polygon = square(10.0);
    let circle = Circle::new(Point::new(5.0, 5.0), 1.0);
    let mut response = Response::new();

    assert!(test_polygon_circle(&polygon, &circle, Some(&mut response)));
    assert!(!response.a_in_b);
    assert!(response.b_in_a);
    assert_relative_eq!(response.overlap, 6.0);

    let _ = response.clear();
    assert!(test_circle_polygon(&circle, &polygon, Some(&mut response)));
    assert!(response.a_in_b);
    assert!(!response.b_in_a);
}

#[test]
fn polygon_inside_circle() {
    let polygon = square(1.0);
    let circle = Circle::new(Point::new(0.5, 0.5), 5.0);
    let mut response = Response::new();

    assert!(test_polygon_circle(&polygon, &circle, Some(&mut response)));
    assert!(response.a_in_b);
    assert!(!response.b_in_a);
    assert_relative_eq!(response.overlap, 5.5);
}

#[test]
fn circle_polygon_mirrors_polygon_circle() {
    let polygon = square(2.0);
    let circle = Circle::new(Point::new(2.5, 1.0), 1.0);
    let mut response = Response::new();

    assert!(test_circle_polygon(&circle, &polygon, Some(&mut response)));
    assert_eq!(response.a, Some(ShapeType::Circle));
    assert_eq!(response.b, Some(ShapeType::Polygon));
    assert_relative_eq!(response.overlap, 0.5);
    assert_relative_eq!(response.overlap_n, -Vector::x());
    assert_relative_eq!(response.overlap_v, Vector::new(-0.5, 0.0));
}

#[test]
fn rotated_polygon_against_circle() {
    // A unit square standing on its corner, centered at (1, 1).
    let polygon = Polygon::new(
        Point::new(1.0, 1.0),
        [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ],
    )
    .with_offset(Vector::new(-0.5, -0.5))
    .with_angle(Real::frac_pi_4());
    let half_diagonal = Real::sqrt(2.0) / 2.0;

    let circle = Circle::new(Point::new(1.0 + half_diagonal + 0.5, 1.0), 0.4);
    assert!(!test_polygon_circle(&polygon, &circle, None));

    let circle = Circle::new(Point::new(1.0 + half_diagonal + 0.3, 1.0), 0.4);
    let mut response = Response::new();
    assert!(test_polygon_circle(&polygon, &circle, Some(&mut response)));
    assert_relative_eq!(response.overlap, 0.1, epsilon = 1.0e-5);
    assert_relative_eq!(response.overlap_n, Vector::x(), epsilon = 1.0e-5);
}
