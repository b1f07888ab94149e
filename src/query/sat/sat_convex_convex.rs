use crate::math::Vector;
use crate::query::sat::is_separating_axis;
use crate::query::Response;
use crate::shape::ConvexView;

/// Checks whether two convex polygons overlap.
///
/// Every edge normal of `a`, then of `b`, is tested as a separating axis and the
/// test exits on the first axis that separates the polygons. Normals of zero-length
/// edges are skipped. A polygon without any vertex overlaps nothing.
///
/// If the polygons overlap and a response is given, it holds the minimum overlap
/// axis and the containment flags on return. Its shape tags and `overlap_v` are
/// not updated.
pub fn convex_convex_overlap(
    a: &ConvexView,
    b: &ConvexView,
    mut response: Option<&mut Response>,
) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    for normal in a.normals.iter().chain(b.normals.iter()) {
        if *normal == Vector::zeros() {
            continue;
        }

        if is_separating_axis(
            &a.pos,
            &b.pos,
            a.points,
            b.points,
            normal,
            response.as_deref_mut(),
        ) {
            return false;
        }
    }

    true
}
