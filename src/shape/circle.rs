use crate::math::{Point, Real, Vector};
use crate::shape::{Aabb, Polygon};

/// A circle with a position and a radius.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Circle {
    /// The center of the circle.
    pub pos: Point,
    /// The radius of the circle.
    pub radius: Real,
}

impl Default for Circle {
    fn default() -> Self {
        Circle::new(Point::origin(), 0.0)
    }
}

impl Circle {
    /// Creates a new circle centered at `pos`.
    #[inline]
    pub fn new(pos: Point, radius: Real) -> Circle {
        Circle { pos, radius }
    }

    /// The axis-aligned bounding box of this circle.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        let r = self.radius;
        Aabb::new(self.pos - Vector::new(r, r), r * 2.0, r * 2.0)
    }

    /// The axis-aligned bounding box of this circle, as a polygon.
    ///
    /// Returns a new `Polygon` each time this is called.
    pub fn aabb_polygon(&self) -> Polygon {
        self.aabb().to_polygon()
    }
}
