//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! The **Separating Axis Theorem** states that two convex shapes do **not**
//! intersect if and only if there exists an axis onto which their projections
//! do not overlap.
//!
//! For two convex polygons, the only candidate axes to test are the normals of
//! their edges. For a polygon and a circle, the candidates are the edge normals
//! and the directions from the polygon vertices to the circle center. Which one is
//! relevant for a given edge is found by classifying the circle center into the
//! [`VoronoiRegion`]s of that edge.
//!
//! When no separating axis exists, the axis with the smallest overlap gives the
//! minimum translation vector, recorded into a [`Response`](crate::query::Response).
//!
//! The functions of this module work on [`ConvexView`](crate::shape::ConvexView)s
//! and do not tag the response with the shape types. See
//! [`crate::query::details`] for the shape-typed versions.

pub use self::sat_axis::is_separating_axis;
pub use self::sat_convex_circle::convex_circle_overlap;
pub use self::sat_convex_convex::convex_convex_overlap;
pub use self::voronoi::{voronoi_region, VoronoiRegion};

mod sat_axis;
mod sat_convex_circle;
mod sat_convex_convex;
mod voronoi;
