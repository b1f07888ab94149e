use crate::math::Vector;
use crate::query::Response;
use crate::shape::{Circle, ShapeType};

#[cfg(not(feature = "std"))]
use na::ComplexField; // for .sqrt()

/// Intersection test between two circles.
///
/// Touching circles are considered overlapping. If the circles overlap and a
/// response is given, it is filled with the minimum translation vector
/// separating `a` from `b`.
pub fn test_circle_circle(a: &Circle, b: &Circle, response: Option<&mut Response>) -> bool {
    let difference = b.pos - a.pos;
    let total_radius = a.radius + b.radius;
    let distance_squared = difference.norm_squared();

    if distance_squared > total_radius * total_radius {
        return false;
    }

    if let Some(response) = response {
        let distance = distance_squared.sqrt();

        response.overlap = total_radius - distance;
        response.overlap_n = if distance > 0.0 {
            difference / distance
        } else {
            log::debug!("Coincident circle centers, separating along the x axis.");
            Vector::x()
        };
        response.a_in_b = a.radius <= b.radius && distance <= b.radius - a.radius;
        response.b_in_a = b.radius <= a.radius && distance <= a.radius - b.radius;
        response.finish(ShapeType::Circle, ShapeType::Circle);
    }

    true
}
