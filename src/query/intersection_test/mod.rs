//! Implementation details of the `intersection_test` function.

pub use self::intersection_test::{contains_point, intersection_test};
pub use self::intersection_test_circle_circle::test_circle_circle;
pub use self::intersection_test_point::{point_in_circle, point_in_convex, point_in_polygon};
pub use self::intersection_test_polygon_circle::{test_circle_polygon, test_polygon_circle};
pub use self::intersection_test_polygon_polygon::test_polygon_polygon;

mod intersection_test_circle_circle;
mod intersection_test_point;
mod intersection_test_polygon_circle;
mod intersection_test_polygon_polygon;
