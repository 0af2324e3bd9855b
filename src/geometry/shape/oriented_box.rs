use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

/// A rectangle rotated so that its local X axis points along `axis`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox {
    center: Point2,
    axis: Vector2,
    half_extents: Vector2,
}

impl OrientedBox {
    /// Creates a new oriented box.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the box
    /// * `axis` - Direction of the local X axis (normalized here)
    /// * `half_extents` - Half width and half height along the local axes
    ///
    /// # Errors
    ///
    /// Returns an error if `axis` is zero-length or a half extent is negative.
    pub fn new(center: Point2, axis: Vector2, half_extents: Vector2) -> Result<Self> {
        let len = axis.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        if half_extents.x < 0.0 || half_extents.y < 0.0 {
            return Err(GeometryError::Degenerate("box half extents must be non-negative".into()).into());
        }
        Ok(Self {
            center,
            axis: axis / len,
            half_extents,
        })
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the unit local X axis.
    #[must_use]
    pub fn axis(&self) -> &Vector2 {
        &self.axis
    }

    /// Returns the unit local Y axis (the X axis rotated a quarter turn CCW).
    #[must_use]
    pub fn ortho_axis(&self) -> Vector2 {
        Vector2::new(-self.axis.y, self.axis.x)
    }

    /// Returns the half extents along the local axes.
    #[must_use]
    pub fn half_extents(&self) -> &Vector2 {
        &self.half_extents
    }

    /// Expresses a world point in the box frame (relative to the center).
    #[must_use]
    pub fn to_local(&self, point: &Point2) -> Vector2 {
        let d = point - self.center;
        Vector2::new(d.dot(&self.axis), d.dot(&self.ortho_axis()))
    }
}
