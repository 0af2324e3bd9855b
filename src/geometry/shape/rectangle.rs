use crate::error::{GeometryError, Result};
use crate::geometry::Segment;
use crate::math::{Point2, Vector2};

/// An axis-aligned rectangle spanning `origin` to `origin + dimensions`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    origin: Point2,
    dimensions: Vector2,
}

impl Rectangle {
    /// Creates a new rectangle from its minimum corner and its size.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is negative or not finite.
    pub fn new(origin: Point2, dimensions: Vector2) -> Result<Self> {
        for (parameter, value) in [("width", dimensions.x), ("height", dimensions.y)] {
            if !value.is_finite() || value < 0.0 {
                return Err(GeometryError::ParameterOutOfRange {
                    parameter,
                    value,
                    min: 0.0,
                    max: f64::INFINITY,
                }
                .into());
            }
        }
        if !(origin.x.is_finite() && origin.y.is_finite()) {
            return Err(GeometryError::Degenerate("rectangle origin is not finite".into()).into());
        }
        Ok(Self { origin, dimensions })
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the width and height.
    #[must_use]
    pub fn dimensions(&self) -> &Vector2 {
        &self.dimensions
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Point2 {
        self.origin + self.dimensions
    }

    /// Boundary segments in the order bottom, right, top, left
    /// (counter-clockwise from the origin corner).
    #[must_use]
    pub fn segments(&self) -> [Segment; 4] {
        let o = self.origin;
        let br = Point2::new(o.x + self.dimensions.x, o.y);
        let tr = self.max();
        let tl = Point2::new(o.x, o.y + self.dimensions.y);
        [
            Segment::new(o, br),
            Segment::new(br, tr),
            Segment::new(tr, tl),
            Segment::new(tl, o),
        ]
    }

    /// Checks whether `point` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, point: &Point2, eps: f64) -> bool {
        let max = self.max();
        point.x >= self.origin.x - eps
            && point.x <= max.x + eps
            && point.y >= self.origin.y - eps
            && point.y <= max.y + eps
    }
}
