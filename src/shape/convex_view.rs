use crate::math::{Point, Vector};

/// A read-only view of the geometry of a positioned convex polygon.
///
/// This is what the SAT engine actually consumes. `points`, `edges` and `normals`
/// are expressed relative to `pos` and must have the same length, with
/// `edges[i] = points[i + 1] - points[i]` (wrapping) and `normals[i]` the outward
/// unit normal of `edges[i]`.
#[derive(Copy, Clone, Debug)]
pub struct ConvexView<'a> {
    /// The origin of the polygon.
    pub pos: Point,
    /// The vertices, counter-clockwise, relative to `pos`.
    pub points: &'a [Point],
    /// The edges of the polygon.
    pub edges: &'a [Vector],
    /// The outward unit normals of the edges.
    pub normals: &'a [Vector],
}

impl ConvexView<'_> {
    /// The number of vertices of this polygon.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Does this view contain no vertex at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
