use crate::math::{Point, Real, Vector};
use crate::query::Response;
use crate::utils::Interval;

/// Checks whether the given axis separates two convex point sets.
///
/// Both point sets are projected onto `axis`, which must be a unit vector.
/// `a_points` are relative to `a_pos` and `b_points` to `b_pos`.
///
/// Returns `true` if `axis` is a separating axis, meaning the shapes cannot
/// intersect. Otherwise returns `false` and, if a response is given, updates its
/// containment flags and records `axis` if its overlap is the smallest found so far.
pub fn is_separating_axis(
    a_pos: &Point,
    b_pos: &Point,
    a_points: &[Point],
    b_points: &[Point],
    axis: &Vector,
    response: Option<&mut Response>,
) -> bool {
    let projected_offset = (b_pos - a_pos).dot(axis);
    let range_a = Interval::of_projection(a_points, axis);
    // Move B's range to its position relative to A.
    let range_b = Interval::of_projection(b_points, axis).translated(projected_offset);

    if range_a.is_disjoint(&range_b) {
        return true;
    }

    if let Some(response) = response {
        let overlap;

        if range_a.min() < range_b.min() {
            // A starts further left than B.
            response.a_in_b = false;

            if range_a.max() < range_b.max() {
                overlap = range_a.max() - range_b.min();
                response.b_in_a = false;
            } else {
                // B is fully inside A.
                overlap = shortest_exit(&range_a, &range_b);
            }
        } else {
            response.b_in_a = false;

            if range_a.max() > range_b.max() {
                overlap = range_a.min() - range_b.max();
                response.a_in_b = false;
            } else {
                // A is fully inside B.
                overlap = shortest_exit(&range_a, &range_b);
            }
        }

        response.record_axis(axis, overlap);
    }

    false
}

/// The signed overlap of the shortest way out when one range contains the other.
#[inline]
fn shortest_exit(range_a: &Interval, range_b: &Interval) -> Real {
    let option1 = range_a.max() - range_b.min();
    let option2 = range_b.max() - range_a.min();

    if option1 < option2 {
        option1
    } else {
        -option2
    }
}
