use crate::math::Vector;

/// The region of the plane a point lies in, relative to a line segment.
///
/// ```text
///            |       (0)      |
///     (-1)  [S]--------------[E]  (1)
///            |       (0)      |
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum VoronoiRegion {
    /// Before the start point of the segment.
    Left = -1,
    /// Between the start and end points of the segment.
    Middle = 0,
    /// After the end point of the segment.
    Right = 1,
}

/// Classifies `point` into the Voronoi regions of the segment `line`.
///
/// Both the segment and the point are relative to the segment's start point.
#[inline]
pub fn voronoi_region(line: &Vector, point: &Vector) -> VoronoiRegion {
    let len2 = line.norm_squared();
    let dp = point.dot(line);

    if dp < 0.0 {
        VoronoiRegion::Left
    } else if dp > len2 {
        VoronoiRegion::Right
    } else {
        VoronoiRegion::Middle
    }
}
