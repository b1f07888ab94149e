use oorandom::Rand32;
use sat2d::math::{Point, Real, Vector};
use sat2d::query::details::test_circle_circle;
use sat2d::query::Response;
use sat2d::shape::{Circle, ShapeType};

#[test]
fn circles_at_distance_three() {
    let a = Circle::new(Point::origin(), 2.0);
    let b = Circle::new(Point::new(3.0, 0.0), 2.0);
    let mut response = Response::new();

    assert!(test_circle_circle(&a, &b, Some(&mut response)));
    assert_relative_eq!(response.overlap, 1.0);
    assert_relative_eq!(response.overlap_n, Vector::x());
    assert_relative_eq!(response.overlap_v, Vector::x());
    assert_eq!(response.a, Some(ShapeType::Circle));
    assert_eq!(response.b, Some(ShapeType::Circle));
    assert!(!response.a_in_b);
    assert!(!response.b_in_a);
}

#[test]
fn touching_circles_intersect() {
    let a = Circle::new(Point::new(1.0, 1.0), 1.0);
    let b = Circle::new(Point::new(1.0, 4.0), 2.0);
    let mut response = Response::new();

    assert!(test_circle_circle(&a, &b, Some(&mut response)));
    assert_relative_eq!(response.overlap, 0.0);
    assert_relative_eq!(response.overlap_n, Vector::y());

    let c = Circle::new(Point::new(1.0, 4.01), 2.0);
    assert!(!test_circle_circle(&a, &c, None));
}

#[test]
fn nested_circles() {
    let small = Circle::new(Point::new(0.5, 0.0), 1.0);
    let big = Circle::new(Point::origin(), 3.0);
    let mut response = Response::new();

    assert!(test_circle_circle(&small, &big, Some(&mut response)));
    assert!(response.a_in_b);
    assert!(!response.b_in_a);
    assert_relative_eq!(response.overlap, 3.5);
    assert_relative_eq!(response.overlap_n, -Vector::x());

    assert!(test_circle_circle(&big, &small, Some(&mut response)));
    assert!(!response.a_in_b);
    assert!(response.b_in_a);
}

#[test]
fn overlap_iff_centers_are_close_enough() {
    let mut rng = Rand32::new(7);
    let mut random = move |scale: Real| rng.rand_float() as Real * scale;

    for _ in 0..1000 {
        let a = Circle::new(Point::new(random(10.0), random(10.0)), random(3.0));
        let b = Circle::new(Point::new(random(10.0), random(10.0)), random(3.0));
        let distance = (b.pos - a.pos).norm();
        let expected = distance <= a.radius + b.radius;

        assert_eq!(test_circle_circle(&a, &b, None), expected);
        assert_eq!(test_circle_circle(&b, &a, None), expected);

        let mut response = Response::new();
        if test_circle_circle(&a, &b, Some(&mut response)) {
            assert_relative_eq!(
                response.overlap,
                a.radius + b.radius - distance,
                epsilon = 1.0e-5
            );
        }
    }
}
