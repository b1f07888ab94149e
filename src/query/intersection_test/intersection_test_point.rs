use crate::math::{Point, Real};
use crate::query::sat::convex_convex_overlap;
use crate::query::Response;
use crate::shape::{Aabb, Circle, ConvexView, Polygon};

/// Side of the square standing for a point in the point-in-polygon test.
const POINT_SIZE: Real = 1.0e-6;

/// Is the point `p` inside of the circle (or on its boundary)?
#[inline]
pub fn point_in_circle(p: &Point, circle: &Circle) -> bool {
    (p - circle.pos).norm_squared() <= circle.radius * circle.radius
}

/// Is the point `p` inside of the convex polygon?
pub fn point_in_polygon(p: &Point, polygon: &Polygon) -> bool {
    point_in_convex(p, &polygon.view())
}

/// Is the point `p` inside of the convex shape described by `convex`?
///
/// A tiny square is placed at `p` and the point is inside if the square is fully
/// contained by the shape.
pub fn point_in_convex(p: &Point, convex: &ConvexView) -> bool {
    let geometry = Aabb::new(*p, POINT_SIZE, POINT_SIZE).geometry();
    let mut response = Response::new();

    convex_convex_overlap(&geometry.view(*p), convex, Some(&mut response)) && response.a_in_b
}
