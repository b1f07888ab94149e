use core::fmt;

/// Error indicating that a geometric query is not supported between certain shape combinations.
///
/// The dynamic queries [`intersection_test`](crate::query::intersection_test) and
/// [`contains_point`](crate::query::contains_point) handle every combination of
/// [`Polygon`](crate::shape::Polygon), [`Aabb`](crate::shape::Aabb) and
/// [`Circle`](crate::shape::Circle). This error is returned when one of the shapes is
/// a user-defined [`Shape`](crate::shape::Shape) implementation.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use sat2d::math::Point;
/// use sat2d::query::{intersection_test, Unsupported};
/// use sat2d::shape::{Aabb, Circle};
///
/// let circle = Circle::new(Point::new(1.0, 1.0), 0.5);
/// let aabb = Aabb::new(Point::origin(), 1.0, 1.0);
///
/// match intersection_test(&circle, &aabb, None) {
///     Ok(true) => println!("Overlapping"),
///     Ok(false) => println!("Separated"),
///     Err(Unsupported) => println!("This query is not supported between these shapes"),
/// }
/// # }
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Unsupported;

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad("query not supported between these shapes")
    }
}

impl core::error::Error for Unsupported {}
