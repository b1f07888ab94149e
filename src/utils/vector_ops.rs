use crate::math::{Real, Rotation, Vector};

/// Value-returning 2D vector algebra complementing the nalgebra API.
///
/// Every operation consumes `self` and returns the result, so operations
/// compose without aliasing the operand:
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use sat2d::math::Vector;
/// use sat2d::utils::VectorOps;
///
/// let edge = Vector::new(2.0, 0.0);
/// let normal = edge.perp_cw().normalized_or_zero();
/// assert_eq!(normal, Vector::new(0.0, -1.0));
/// # }
/// ```
///
/// Addition, subtraction, uniform scaling, dot products and lengths are
/// provided by nalgebra directly (`+`, `-`, `*`, `dot`, `norm_squared`, `norm`).
pub trait VectorOps: Sized {
    /// Rotates this vector by -90 degrees: `(x, y)` becomes `(y, -x)`.
    ///
    /// Applied to an edge of a counter-clockwise polygon, this yields a vector
    /// pointing outside of the polygon.
    fn perp_cw(self) -> Self;

    /// Rotates this vector counter-clockwise by `angle` radians.
    fn rotated(self, angle: Real) -> Self;

    /// This vector pointing in the opposite direction.
    fn reversed(self) -> Self;

    /// This vector divided by its length, or unchanged if its length is zero.
    fn normalized_or_zero(self) -> Self;

    /// Scales each component independently.
    fn scaled_xy(self, xs: Real, ys: Real) -> Self;

    /// The projection of this vector onto `other`.
    ///
    /// Results in NaN components if `other` has a zero length.
    fn projected_on(self, other: &Self) -> Self;

    /// The projection of this vector onto the unit vector `axis`.
    fn projected_on_unit(self, axis: &Self) -> Self;

    /// The reflection of this vector across the line directed by `axis`.
    ///
    /// Results in NaN components if `axis` has a zero length.
    fn reflected(self, axis: &Self) -> Self;

    /// The reflection of this vector across the line directed by the unit vector `axis`.
    fn reflected_on_unit(self, axis: &Self) -> Self;
}

impl VectorOps for Vector {
    #[inline]
    fn perp_cw(self) -> Self {
        Vector::new(self.y, -self.x)
    }

    #[inline]
    fn rotated(self, angle: Real) -> Self {
        if angle == 0.0 {
            self
        } else {
            Rotation::new(angle) * self
        }
    }

    #[inline]
    fn reversed(self) -> Self {
        -self
    }

    #[inline]
    fn normalized_or_zero(self) -> Self {
        let len = self.norm();
        if len > 0.0 {
            self / len
        } else {
            self
        }
    }

    #[inline]
    fn scaled_xy(self, xs: Real, ys: Real) -> Self {
        Vector::new(self.x * xs, self.y * ys)
    }

    #[inline]
    fn projected_on(self, other: &Self) -> Self {
        let amt = self.dot(other) / other.norm_squared();
        *other * amt
    }

    #[inline]
    fn projected_on_unit(self, axis: &Self) -> Self {
        *axis * self.dot(axis)
    }

    #[inline]
    fn reflected(self, axis: &Self) -> Self {
        self.projected_on(axis) * 2.0 - self
    }

    #[inline]
    fn reflected_on_unit(self, axis: &Self) -> Self {
        self.projected_on_unit(axis) * 2.0 - self
    }
}
