//! Shapes supported by sat2d.

pub use self::aabb::{Aabb, AabbGeometry};
pub use self::circle::Circle;
pub use self::convex_view::ConvexView;
pub use self::polygon::{Polygon, PolygonError};
#[doc(inline)]
pub use self::shape::{Shape, ShapeType, TypedShape};

mod aabb;
mod circle;
mod convex_view;
mod polygon;
mod shape;
