use crate::query::sat::convex_convex_overlap;
use crate::query::Response;
use crate::shape::{Polygon, ShapeType};

/// Intersection test between two convex polygons.
///
/// If they overlap and a response is given, it is filled with the minimum
/// translation vector separating `a` from `b`.
pub fn test_polygon_polygon(a: &Polygon, b: &Polygon, mut response: Option<&mut Response>) -> bool {
    if !convex_convex_overlap(&a.view(), &b.view(), response.as_deref_mut()) {
        return false;
    }

    if let Some(response) = response {
        response.finish(ShapeType::Polygon, ShapeType::Polygon);
    }

    true
}
