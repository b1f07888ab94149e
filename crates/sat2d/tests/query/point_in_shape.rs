use sat2d::math::{Point, Real};
use sat2d::query::details::{point_in_circle, point_in_polygon};
use sat2d::shape::{Aabb, Circle, Polygon};

fn unit_square() -> Polygon {
    Polygon::new(
        Point::origin(),
        [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ],
    )
}

#[test]
fn point_in_unit_square() {
    let square = unit_square();
    assert!(point_in_polygon(&Point::new(0.5, 0.5), &square));
    assert!(!point_in_polygon(&Point::new(2.0, 2.0), &square));
    assert!(!point_in_polygon(&Point::new(-0.1, 0.5), &square));
    assert!(point_in_polygon(&Point::new(0.99, 0.01), &square));
}

#[test]
fn point_in_moved_polygon() {
    let mut square = unit_square();
    square.pos = Point::new(-5.0, 3.0);
    assert!(point_in_polygon(&Point::new(-4.5, 3.5), &square));
    assert!(!point_in_polygon(&Point::new(0.5, 0.5), &square));

    let centered = Aabb::new(Point::new(-1.0, -1.0), 2.0, 2.0).to_polygon();
    let samples: [(Real, Real, bool); 4] = [
        (0.0, 0.0, true),
        (0.9, -0.9, true),
        (1.1, 0.0, false),
        (0.0, -1.5, false),
    ];
    for (x, y, inside) in samples {
        assert_eq!(point_in_polygon(&Point::new(x, y), &centered), inside);
    }
}

#[test]
fn point_in_circle_boundary() {
    let circle = Circle::new(Point::new(1.0, 1.0), 2.0);
    assert!(point_in_circle(&Point::new(1.0, 1.0), &circle));
    assert!(point_in_circle(&Point::new(3.0, 1.0), &circle));
    assert!(!point_in_circle(&Point::new(3.0, 3.0), &circle));
}
