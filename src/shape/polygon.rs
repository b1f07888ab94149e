use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::{Aabb, ConvexView};
use crate::utils::{self, VectorOps};
use smallvec::SmallVec;

/// Error that can occur while validating a polygon or computing its centroid.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// The polygon has less than three vertices.
    #[error("a polygon needs at least 3 vertices, got {0}.")]
    NotEnoughVertices(usize),
    /// The edge starting at the given vertex has a zero length.
    #[error("the edge starting at vertex {0} has a zero length.")]
    DegenerateEdge(usize),
    /// All the vertices of the polygon are aligned.
    #[error("the polygon has a zero area.")]
    ZeroArea,
}

/// A convex polygon with any number of vertices.
///
/// The vertices are given counter-clockwise, relative to `pos`. Before being used
/// for any geometric query, every vertex is first shifted by [`Self::offset`] then
/// rotated by [`Self::angle`] around `pos`. These transformed vertices, along with
/// the edges and outward normals they induce, are cached and recomputed by every
/// method that modifies the vertices, the offset or the angle.
///
/// The `pos` field can be changed directly: it does not affect the cached geometry.
///
/// Note that the vertices are counter-clockwise with respect to the coordinate system.
/// On a screen with the origin at the top-left corner they will appear clockwise.
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(from = "PolygonData", into = "PolygonData")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    /// The origin of the polygon. All the vertices are relative to this point.
    pub pos: Point,
    angle: Real,
    offset: Vector,
    points: SmallVec<[Point; 4]>,
    calc_points: SmallVec<[Point; 4]>,
    edges: SmallVec<[Vector; 4]>,
    normals: SmallVec<[Vector; 4]>,
}

impl Default for Polygon {
    fn default() -> Self {
        Polygon::new(Point::origin(), core::iter::empty())
    }
}

impl Polygon {
    /// Creates a new polygon from its counter-clockwise vertices, relative to `pos`.
    ///
    /// Neither convexity nor the vertex count are checked. See [`Self::try_new`]
    /// for a validating constructor.
    pub fn new(pos: Point, points: impl IntoIterator<Item = Point>) -> Self {
        let mut result = Polygon {
            pos,
            angle: 0.0,
            offset: Vector::zeros(),
            points: points.into_iter().collect(),
            calc_points: SmallVec::new(),
            edges: SmallVec::new(),
            normals: SmallVec::new(),
        };
        result.recalc();
        result
    }

    /// Creates a new polygon, checking it has at least three vertices and no
    /// zero-length edge.
    ///
    /// Convexity and winding are not checked.
    pub fn try_new(
        pos: Point,
        points: impl IntoIterator<Item = Point>,
    ) -> Result<Self, PolygonError> {
        let result = Self::new(pos, points);
        let len = result.points.len();

        if len < 3 {
            return Err(PolygonError::NotEnoughVertices(len));
        }

        for i in 0..len {
            let pts = [&result.calc_points[i], &result.calc_points[(i + 1) % len]];
            if utils::ccw_face_normal(pts).is_none() {
                return Err(PolygonError::DegenerateEdge(i));
            }
        }

        Ok(result)
    }

    /// The rotation angle (in radians) applied to the vertices.
    #[inline]
    pub fn angle(&self) -> Real {
        self.angle
    }

    /// The offset applied to the vertices before the rotation.
    #[inline]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    /// The vertices of this polygon, as given by the user.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The vertices after application of the offset and angle, relative to `pos`.
    #[inline]
    pub fn calc_points(&self) -> &[Point] {
        &self.calc_points
    }

    /// The edges of the polygon: `edges()[i]` goes from `calc_points()[i]` to the next vertex.
    #[inline]
    pub fn edges(&self) -> &[Vector] {
        &self.edges
    }

    /// The outward unit normals of the edges.
    ///
    /// The normal of a zero-length edge is the zero vector.
    #[inline]
    pub fn normals(&self) -> &[Vector] {
        &self.normals
    }

    /// The number of vertices of this polygon.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Does this polygon have no vertex at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The geometric view of this polygon consumed by the SAT engine.
    #[inline]
    pub fn view(&self) -> ConvexView<'_> {
        ConvexView {
            pos: self.pos,
            points: &self.calc_points,
            edges: &self.edges,
            normals: &self.normals,
        }
    }

    /// Replaces the vertices of this polygon.
    pub fn set_points(&mut self, points: impl IntoIterator<Item = Point>) -> &mut Self {
        self.points.clear();
        self.points.extend(points);
        self.recalc();
        self
    }

    /// Sets the rotation angle (in radians) applied to the vertices.
    pub fn set_angle(&mut self, angle: Real) -> &mut Self {
        self.angle = angle;
        self.recalc();
        self
    }

    /// Sets the offset applied to the vertices before the rotation.
    pub fn set_offset(&mut self, offset: Vector) -> &mut Self {
        self.offset = offset;
        self.recalc();
        self
    }

    /// This polygon with its rotation angle set to `angle`.
    #[must_use]
    pub fn with_angle(mut self, angle: Real) -> Self {
        self.angle = angle;
        self.recalc();
        self
    }

    /// This polygon with its offset set to `offset`.
    #[must_use]
    pub fn with_offset(mut self, offset: Vector) -> Self {
        self.offset = offset;
        self.recalc();
        self
    }

    /// Rotates the vertices counter-clockwise around `pos`.
    ///
    /// This modifies the original vertices: the current angle is applied on top
    /// of this rotation.
    pub fn rotate(&mut self, angle: Real) -> &mut Self {
        for pt in &mut self.points {
            pt.coords = pt.coords.rotated(angle);
        }

        self.recalc();
        self
    }

    /// Translates the vertices relative to `pos`.
    ///
    /// This is mostly useful to change the "center" of the polygon. To move the
    /// whole polygon, change `pos` instead. The offset is applied on top of this
    /// translation.
    pub fn translate(&mut self, x: Real, y: Real) -> &mut Self {
        let shift = Vector::new(x, y);
        for pt in &mut self.points {
            *pt += shift;
        }

        self.recalc();
        self
    }

    /// The axis-aligned bounding box of this polygon, in world space.
    ///
    /// An empty polygon yields a zero-sized box at `pos`.
    pub fn aabb(&self) -> Aabb {
        let Some(first) = self.calc_points.first() else {
            return Aabb::new(self.pos, 0.0, 0.0);
        };

        let (mins, maxs) = self.calc_points[1..]
            .iter()
            .fold((*first, *first), |(mins, maxs), pt| {
                (mins.inf(pt), maxs.sup(pt))
            });

        Aabb::new(self.pos + mins.coords, maxs.x - mins.x, maxs.y - mins.y)
    }

    /// The centroid of this polygon, relative to `pos`.
    ///
    /// The current offset and angle are taken into account.
    /// See <https://en.wikipedia.org/wiki/Centroid#Of_a_polygon>.
    pub fn centroid(&self) -> Result<Point, PolygonError> {
        let len = self.calc_points.len();
        if len < 3 {
            return Err(PolygonError::NotEnoughVertices(len));
        }

        let mut cx: Real = 0.0;
        let mut cy: Real = 0.0;
        let mut area2: Real = 0.0;

        for i in 0..len {
            let p1 = &self.calc_points[i];
            let p2 = &self.calc_points[(i + 1) % len];
            let a = p1.x * p2.y - p1.y * p2.x;
            cx += (p1.x + p2.x) * a;
            cy += (p1.y + p2.y) * a;
            area2 += a;
        }

        // The tolerance scales with the squared extent of the polygon.
        let aabb = self.aabb();
        let tolerance = (aabb.w * aabb.w + aabb.h * aabb.h) * DEFAULT_EPSILON;

        if relative_eq!(area2, 0.0, epsilon = tolerance) {
            return Err(PolygonError::ZeroArea);
        }

        let denom = area2 * 3.0;
        Ok(Point::new(cx / denom, cy / denom))
    }

    fn recalc(&mut self) {
        let (offset, angle) = (self.offset, self.angle);
        let len = self.points.len();

        self.calc_points.clear();
        self.calc_points.extend(
            self.points
                .iter()
                .map(|pt| Point::from((pt.coords + offset).rotated(angle))),
        );

        self.edges.clear();
        self.normals.clear();

        for i in 0..len {
            let edge = self.calc_points[(i + 1) % len] - self.calc_points[i];
            let normal = edge.perp_cw().normalized_or_zero();

            if len > 1 && normal == Vector::zeros() {
                log::debug!("Polygon edge {} has a zero length, its normal is undefined.", i);
            }

            self.edges.push(edge);
            self.normals.push(normal);
        }
    }
}

/// The serialized form of a polygon: everything except the cached geometry.
#[cfg(feature = "serde-serialize")]
#[derive(Serialize, Deserialize)]
struct PolygonData {
    pos: Point,
    angle: Real,
    offset: Vector,
    points: SmallVec<[Point; 4]>,
}

#[cfg(feature = "serde-serialize")]
impl From<PolygonData> for Polygon {
    fn from(data: PolygonData) -> Self {
        Polygon::new(data.pos, data.points)
            .with_offset(data.offset)
            .with_angle(data.angle)
    }
}

#[cfg(feature = "serde-serialize")]
impl From<Polygon> for PolygonData {
    fn from(poly: Polygon) -> Self {
        PolygonData {
            pos: poly.pos,
            angle: poly.angle,
            offset: poly.offset,
            points: poly.points,
        }
    }
}
