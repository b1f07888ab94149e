use crate::math::{Point, Real, Vector};

/// A closed interval `[min, max]` of the real line.
///
/// Used to represent the projection of a point set onto an axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval(pub Real, pub Real);

impl Interval {
    /// Projects (flattens) `points` onto `axis`.
    ///
    /// The axis is expected to be a unit vector for the bounds to be actual lengths.
    /// An empty point set yields the inverted interval `[Real::MAX, -Real::MAX]` which
    /// is disjoint from every other interval.
    pub fn of_projection(points: &[Point], axis: &Vector) -> Self {
        let mut result = Interval(Real::MAX, -Real::MAX);

        for pt in points {
            let dot = pt.coords.dot(axis);
            if dot < result.0 {
                result.0 = dot;
            }
            if dot > result.1 {
                result.1 = dot;
            }
        }

        result
    }

    /// The lower bound of this interval.
    #[inline]
    pub fn min(&self) -> Real {
        self.0
    }

    /// The upper bound of this interval.
    #[inline]
    pub fn max(&self) -> Real {
        self.1
    }

    /// The width of this interval.
    #[inline]
    pub fn width(&self) -> Real {
        self.1 - self.0
    }

    /// This interval shifted by `shift`.
    #[inline]
    #[must_use]
    pub fn translated(self, shift: Real) -> Self {
        Interval(self.0 + shift, self.1 + shift)
    }

    /// Does this interval contain the given value?
    #[inline]
    pub fn contains(&self, t: Real) -> bool {
        self.0 <= t && t <= self.1
    }

    /// Returns `true` if the two intervals share no value.
    ///
    /// Intervals that merely touch are not disjoint.
    #[inline]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.1 < other.0 || other.1 < self.0
    }
}
