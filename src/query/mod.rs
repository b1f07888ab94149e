//! Overlap queries between 2D shapes.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::intersection_test()`](intersection_test()) to determine if two shapes are
//!   overlapping and, optionally, compute the minimum translation vector separating them.
//! * [`query::contains_point()`](contains_point()) to determine if a point is inside of a shape.
//!
//! Both take shapes as `&dyn Shape` and return [`Unsupported`] for shapes they cannot handle.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are more specific versions of the ones described above.
//! For example `test_circle_circle` tests two shapes known at compile-time to be circles.
//! They are less convenient to use than the most generic version but will be slightly faster due to the lack of dynamic dispatch.
//! The specific functions have the form `test_[shape1]_[shape2]()`, or `point_in_[shape]()` for point queries.
//!
//! The [`sat`] submodule exposes the lower-level building blocks shared by all these queries.

pub use self::error::Unsupported;
pub use self::intersection_test::{contains_point, intersection_test};
pub use self::response::Response;

mod error;
mod intersection_test;
mod response;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::intersection_test::{
        point_in_circle, point_in_convex, point_in_polygon, test_circle_circle,
        test_circle_polygon, test_polygon_circle, test_polygon_polygon,
    };
    pub use super::sat::is_separating_axis;
}
