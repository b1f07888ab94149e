use crate::math::*;
use crate::utils::VectorOps;

/// Computes the direction pointing toward the right-hand-side of an oriented segment.
///
/// For the edges of a counter-clockwise polygon this is the outward normal.
/// Returns `None` if the segment is degenerate.
#[inline]
#[cfg(feature = "dim2")]
pub fn ccw_face_normal(pts: [&Point; 2]) -> Option<UnitVector> {
    let ab = *pts[1] - *pts[0];
    UnitVector::try_new(ab.perp_cw(), DEFAULT_EPSILON)
}
