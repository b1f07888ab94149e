//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};
use crate::shape::{ConvexView, Polygon};

/// An axis-aligned box with a width and a height.
///
/// `pos` is the corner with the smallest coordinates, so the box covers
/// `[pos.x, pos.x + w] x [pos.y, pos.y + h]`. This is both a shape that can be
/// tested for overlap, and the bounding box returned by [`Polygon::aabb`] and
/// [`Circle::aabb`](crate::shape::Circle::aabb).
///
/// Both `w` and `h` are expected to be non-negative.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The corner of the box with the smallest coordinates.
    pub pos: Point,
    /// The extent of the box along the `x` axis.
    pub w: Real,
    /// The extent of the box along the `y` axis.
    pub h: Real,
}

/// The polygonal geometry of an [`Aabb`], relative to its `pos`.
///
/// Stored inline so that boxes can be fed to the SAT engine without any heap
/// allocation.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct AabbGeometry {
    /// The four corners, counter-clockwise, starting at `(0, 0)`.
    pub points: [Point; 4],
    /// The four edges.
    pub edges: [Vector; 4],
    /// The four outward normals.
    pub normals: [Vector; 4],
}

impl AabbGeometry {
    /// A view of this geometry placed at `pos`.
    #[inline]
    pub fn view(&self, pos: Point) -> ConvexView<'_> {
        ConvexView {
            pos,
            points: &self.points,
            edges: &self.edges,
            normals: &self.normals,
        }
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Aabb::new(Point::origin(), 0.0, 0.0)
    }
}

impl Aabb {
    /// Creates a new box with its smallest corner at `pos`.
    #[inline]
    pub fn new(pos: Point, w: Real, h: Real) -> Self {
        Aabb { pos, w, h }
    }

    /// Creates the smallest box containing both given corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let mins = a.inf(&b);
        let maxs = a.sup(&b);
        Aabb::new(mins, maxs.x - mins.x, maxs.y - mins.y)
    }

    /// The corner with the smallest coordinates.
    #[inline]
    pub fn mins(&self) -> Point {
        self.pos
    }

    /// The corner with the largest coordinates.
    #[inline]
    pub fn maxs(&self) -> Point {
        self.pos + Vector::new(self.w, self.h)
    }

    /// The center of this box.
    #[inline]
    pub fn center(&self) -> Point {
        self.pos + Vector::new(self.w, self.h) * 0.5
    }

    /// Do these two boxes overlap? Boxes that only touch are considered overlapping.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        let (mins1, maxs1) = (self.mins(), self.maxs());
        let (mins2, maxs2) = (other.mins(), other.maxs());
        mins1.x <= maxs2.x && mins2.x <= maxs1.x && mins1.y <= maxs2.y && mins2.y <= maxs1.y
    }

    /// The corners, edges and outward normals of this box, relative to `pos`.
    ///
    /// The normals are the four coordinate axes, even for a box with a zero width
    /// or height.
    pub fn geometry(&self) -> AabbGeometry {
        let (w, h) = (self.w, self.h);
        AabbGeometry {
            points: [
                Point::origin(),
                Point::new(w, 0.0),
                Point::new(w, h),
                Point::new(0.0, h),
            ],
            edges: [
                Vector::new(w, 0.0),
                Vector::new(0.0, h),
                Vector::new(-w, 0.0),
                Vector::new(0.0, -h),
            ],
            normals: [-Vector::y(), Vector::x(), Vector::y(), -Vector::x()],
        }
    }

    /// A new polygon covering the same area as this box.
    ///
    /// Its vertices are `(0, 0), (w, 0), (w, h), (0, h)` relative to `pos`.
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.pos, self.geometry().points)
    }
}

impl From<&Aabb> for Polygon {
    fn from(aabb: &Aabb) -> Self {
        aabb.to_polygon()
    }
}

impl From<Aabb> for Polygon {
    fn from(aabb: Aabb) -> Self {
        aabb.to_polygon()
    }
}
