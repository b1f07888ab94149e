use crate::math::{Real, Vector};
use crate::shape::ShapeType;

#[cfg(not(feature = "std"))]
use na::ComplexField; // for .abs()

/// The result of an intersection query between two shapes `a` and `b`.
///
/// A response records the minimum translation vector that separates the two
/// shapes, along with containment information. It is filled by the queries of
/// [`crate::query::details`] and [`crate::query::intersection_test`] when the shapes
/// overlap, and is meant to be reused across many queries to avoid repeated
/// initializations.
///
/// Queries never reset the response: values accumulate (the smallest overlap
/// wins, containment flags can only be turned off). Call [`Response::clear`]
/// before reusing a response for an unrelated pair of shapes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Response {
    /// The type of the first shape tested.
    pub a: Option<ShapeType>,
    /// The type of the second shape tested.
    pub b: Option<ShapeType>,
    /// Unit vector along the axis of minimum overlap, pointing from `a` toward `b`.
    pub overlap_n: Vector,
    /// The minimum translation vector: `overlap_n * overlap`.
    ///
    /// Subtracting this vector from the position of `a` separates the two shapes.
    pub overlap_v: Vector,
    /// Is `a` fully inside of `b`?
    pub a_in_b: bool,
    /// Is `b` fully inside of `a`?
    pub b_in_a: bool,
    /// The magnitude of the minimum overlap found so far.
    pub overlap: Real,
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

impl Response {
    /// Creates a new, cleared, response.
    pub fn new() -> Self {
        Response {
            a: None,
            b: None,
            overlap_n: Vector::zeros(),
            overlap_v: Vector::zeros(),
            a_in_b: true,
            b_in_a: true,
            overlap: Real::INFINITY,
        }
    }

    /// Resets this response so it can be reused for a new query.
    ///
    /// Sets both containment flags to `true` and the overlap to infinity.
    pub fn clear(&mut self) -> &mut Self {
        self.a_in_b = true;
        self.b_in_a = true;
        self.overlap = Real::INFINITY;
        self
    }

    /// Records `axis` as the minimum overlap axis if `|overlap|` is smaller than
    /// the best overlap found so far.
    ///
    /// A negative `overlap` means the push direction is `-axis`.
    pub(crate) fn record_axis(&mut self, axis: &Vector, overlap: Real) {
        let abs_overlap = overlap.abs();

        if abs_overlap < self.overlap {
            self.overlap = abs_overlap;
            self.overlap_n = if overlap < 0.0 { -*axis } else { *axis };
        }
    }

    /// Tags the shapes and computes the final translation vector.
    pub(crate) fn finish(&mut self, a: ShapeType, b: ShapeType) {
        self.a = Some(a);
        self.b = Some(b);
        self.overlap_v = self.overlap_n * self.overlap;
    }

    /// Swaps the roles of `a` and `b`.
    pub(crate) fn swap_shapes(&mut self) {
        core::mem::swap(&mut self.a, &mut self.b);
        core::mem::swap(&mut self.a_in_b, &mut self.b_in_a);
        self.overlap_n = -self.overlap_n;
        self.overlap_v = -self.overlap_v;
    }
}
