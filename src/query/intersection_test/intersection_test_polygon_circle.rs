use crate::query::sat::convex_circle_overlap;
use crate::query::Response;
use crate::shape::{Circle, Polygon, ShapeType};

/// Intersection test between a convex polygon and a circle.
///
/// If they overlap and a response is given, it is filled with the minimum
/// translation vector separating the polygon from the circle.
pub fn test_polygon_circle(
    polygon: &Polygon,
    circle: &Circle,
    mut response: Option<&mut Response>,
) -> bool {
    if !convex_circle_overlap(&polygon.view(), circle, response.as_deref_mut()) {
        return false;
    }

    if let Some(response) = response {
        response.finish(ShapeType::Polygon, ShapeType::Circle);
    }

    true
}

/// Intersection test between a circle and a convex polygon.
///
/// Same as [`test_polygon_circle`] with the roles of the shapes swapped in the
/// response.
pub fn test_circle_polygon(
    circle: &Circle,
    polygon: &Polygon,
    mut response: Option<&mut Response>,
) -> bool {
    // Swap before the query so flags accumulated from previous queries keep
    // their meaning, then swap back.
    if let Some(response) = response.as_deref_mut() {
        response.swap_shapes();
    }

    let result = test_polygon_circle(polygon, circle, response.as_deref_mut());

    if let Some(response) = response {
        response.swap_shapes();
    }

    result
}
