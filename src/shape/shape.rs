use crate::math::Point;
use crate::shape::{Aabb, Circle, Polygon};
use downcast_rs::{impl_downcast, DowncastSync};

/// Enum representing the type of a shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// A convex polygon.
    Polygon = 0,
    /// An axis-aligned box.
    Aabb,
    /// A circle.
    Circle,
    /// A custom user-defined shape.
    Custom,
}

/// Enum representing the shape with its actual type.
#[derive(Copy, Clone, Debug)]
pub enum TypedShape<'a> {
    /// A convex polygon.
    Polygon(&'a Polygon),
    /// An axis-aligned box.
    Aabb(&'a Aabb),
    /// A circle.
    Circle(&'a Circle),
    /// A custom user-defined shape with a type identified by a number.
    Custom(u32),
}

/// Trait implemented by shapes usable with the dynamic queries of this crate.
///
/// The built-in shapes are [`Polygon`], [`Aabb`] and [`Circle`]. Other types can
/// implement this trait, but the default queries will report them as unsupported.
pub trait Shape: DowncastSync {
    /// The position of this shape: the origin of its vertices, or its center.
    fn position(&self) -> Point;

    /// Computes the world-space axis-aligned bounding box of this shape.
    fn compute_aabb(&self) -> Aabb;

    /// Gets the type tag of this shape.
    fn shape_type(&self) -> ShapeType;

    /// Gets the underlying shape as an enum.
    fn as_typed_shape(&self) -> TypedShape<'_>;
}

impl_downcast!(sync Shape);

impl dyn Shape {
    /// Converts this abstract shape to the given shape, if it is one.
    pub fn as_shape<T: Shape>(&self) -> Option<&T> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a polygon, if it is one.
    pub fn as_polygon(&self) -> Option<&Polygon> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to an axis-aligned box, if it is one.
    pub fn as_aabb(&self) -> Option<&Aabb> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a circle, if it is one.
    pub fn as_circle(&self) -> Option<&Circle> {
        self.downcast_ref()
    }
}

impl Shape for Polygon {
    fn position(&self) -> Point {
        self.pos
    }

    fn compute_aabb(&self) -> Aabb {
        self.aabb()
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Polygon
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Polygon(self)
    }
}

impl Shape for Aabb {
    fn position(&self) -> Point {
        self.pos
    }

    fn compute_aabb(&self) -> Aabb {
        *self
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Aabb
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Aabb(self)
    }
}

impl Shape for Circle {
    fn position(&self) -> Point {
        self.pos
    }

    fn compute_aabb(&self) -> Aabb {
        self.aabb()
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Circle
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Circle(self)
    }
}
