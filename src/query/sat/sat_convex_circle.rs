use crate::math::Real;
use crate::query::sat::{voronoi_region, VoronoiRegion};
use crate::query::Response;
use crate::shape::{Circle, ConvexView};
use crate::utils::VectorOps;

#[cfg(not(feature = "std"))]
use na::ComplexField; // for .abs()

/// Checks whether a convex polygon and a circle overlap.
///
/// For each edge of the polygon, the circle center is classified into the Voronoi
/// regions of that edge. If it is beyond one of the edge's endpoints (and before the
/// adjacent edge), the candidate axis goes from that vertex to the center; otherwise
/// the candidate axis is the edge normal. The test exits as soon as the circle is
/// found to be separated from one of these features.
///
/// If the shapes overlap and a response is given, it holds the minimum overlap,
/// pointing from the polygon toward the circle, and the containment flags on
/// return. Its shape tags and `overlap_v` are not updated.
pub fn convex_circle_overlap(
    polygon: &ConvexView,
    circle: &Circle,
    mut response: Option<&mut Response>,
) -> bool {
    // The circle position relative to the polygon.
    let circle_pos = circle.pos - polygon.pos;
    let radius = circle.radius;
    let radius2 = radius * radius;
    let points = polygon.points;
    let len = points.len();

    if polygon.is_empty() {
        return false;
    }

    for i in 0..len {
        let next = if i == len - 1 { 0 } else { i + 1 };
        let prev = if i == 0 { len - 1 } else { i - 1 };
        let mut overlap: Real = 0.0;
        let mut overlap_n = None;

        let edge = polygon.edges[i];
        // The circle center relative to the start of the edge.
        let point = circle_pos - points[i].coords;

        // If the distance between the center and the vertex is bigger than the
        // radius, the polygon is not fully inside of the circle.
        if let Some(response) = response.as_deref_mut() {
            if point.norm_squared() > radius2 {
                response.a_in_b = false;
            }
        }

        match voronoi_region(&edge, &point) {
            VoronoiRegion::Left => {
                // Also need to be in the right region of the previous edge to be
                // in the region of the current vertex.
                let prev_point = circle_pos - points[prev].coords;

                if voronoi_region(&polygon.edges[prev], &prev_point) == VoronoiRegion::Right {
                    let dist = point.norm();
                    if dist > radius {
                        return false;
                    }

                    if let Some(response) = response.as_deref_mut() {
                        response.b_in_a = false;
                        overlap_n = Some(point.normalized_or_zero());
                        overlap = radius - dist;
                    }
                }
            }
            VoronoiRegion::Right => {
                // Also need to be in the left region of the next edge to be in the
                // region of the next vertex.
                let next_point = circle_pos - points[next].coords;

                if voronoi_region(&polygon.edges[next], &next_point) == VoronoiRegion::Left {
                    let dist = next_point.norm();
                    if dist > radius {
                        return false;
                    }

                    if let Some(response) = response.as_deref_mut() {
                        response.b_in_a = false;
                        overlap_n = Some(next_point.normalized_or_zero());
                        overlap = radius - dist;
                    }
                }
            }
            VoronoiRegion::Middle => {
                let normal = polygon.normals[i];
                // Signed distance between the center and the edge line.
                let dist = point.dot(&normal);

                if dist > 0.0 && dist.abs() > radius {
                    return false;
                }

                if let Some(response) = response.as_deref_mut() {
                    overlap_n = Some(normal);
                    overlap = radius - dist;
                    // The center is outside of the polygon, or too close to the edge.
                    if dist >= 0.0 || overlap < 2.0 * radius {
                        response.b_in_a = false;
                    }
                }
            }
        }

        if let (Some(overlap_n), Some(response)) = (overlap_n, response.as_deref_mut()) {
            if overlap.abs() < response.overlap.abs() {
                response.overlap = overlap;
                response.overlap_n = overlap_n;
            }
        }
    }

    true
}
