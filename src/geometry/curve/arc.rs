use crate::error::{GeometryError, Result};
use crate::math::arc_2d::{angle_in_sweep, degrees_at_point, point_at_degrees};
use crate::math::Point2;

use super::Segment;

/// A circular arc in the XY plane.
///
/// Sweeps from `angle0` to `angle1` (in degrees) around `center`. When
/// `angle1 < angle0` the arc runs clockwise. The endpoints are derived from
/// the angles and are not stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    center: Point2,
    radius: f64,
    angle0: f64,
    angle1: f64,
}

impl Arc {
    /// Upper bound on the chord count accepted by [`Arc::explode`].
    pub const MAX_EXPLODE_STEPS: u32 = 1 << 20;

    /// Creates a new arc.
    ///
    /// A zero radius is accepted; every sample of such an arc is its center.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative or any value is not finite.
    pub fn new(center: Point2, radius: f64, angle0: f64, angle1: f64) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "radius",
                value: radius,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        if !(center.x.is_finite() && center.y.is_finite() && angle0.is_finite() && angle1.is_finite())
        {
            return Err(GeometryError::Degenerate("arc has non-finite center or angles".into()).into());
        }
        Ok(Self {
            center,
            radius,
            angle0,
            angle1,
        })
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the start angle in degrees.
    #[must_use]
    pub fn angle0(&self) -> f64 {
        self.angle0
    }

    /// Returns the end angle in degrees.
    #[must_use]
    pub fn angle1(&self) -> f64 {
        self.angle1
    }

    /// Signed sweep `angle1 - angle0` in degrees.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.angle1 - self.angle0
    }

    /// Start point, at `angle0`.
    #[must_use]
    pub fn p0(&self) -> Point2 {
        self.point_at_angle(self.angle0)
    }

    /// End point, at `angle1`.
    #[must_use]
    pub fn p1(&self) -> Point2 {
        self.point_at_angle(self.angle1)
    }

    /// Arc length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius * self.sweep().abs().to_radians()
    }

    /// Point on the supporting circle at `angle` degrees.
    #[must_use]
    pub fn point_at_angle(&self, angle: f64) -> Point2 {
        point_at_degrees(&self.center, self.radius, angle)
    }

    /// Angle of `point` around the center, in degrees in `[0, 360)`.
    #[must_use]
    pub fn angle_at_point(&self, point: &Point2) -> f64 {
        degrees_at_point(&self.center, point)
    }

    /// Checks whether `angle` (degrees) lies within the arc's sweep.
    #[must_use]
    pub fn contains_angle(&self, angle: f64, eps: f64) -> bool {
        angle_in_sweep(angle, self.angle0, self.sweep(), eps)
    }

    /// Approximates the arc with `step_count` chords of equal angular span.
    ///
    /// The chords are ordered from `angle0` to `angle1`, and each chord
    /// starts exactly where the previous one ends.
    ///
    /// # Errors
    ///
    /// Returns an error if `step_count` is zero or exceeds
    /// [`Arc::MAX_EXPLODE_STEPS`].
    pub fn explode(&self, step_count: u32) -> Result<Vec<Segment>> {
        if step_count == 0 || step_count > Self::MAX_EXPLODE_STEPS {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "step_count",
                value: f64::from(step_count),
                min: 1.0,
                max: f64::from(Self::MAX_EXPLODE_STEPS),
            }
            .into());
        }

        let step = self.sweep() / f64::from(step_count);
        let mut segments = Vec::with_capacity(step_count as usize);
        let mut prev = self.p0();
        for i in 1..=step_count {
            let next = if i == step_count {
                self.p1()
            } else {
                self.point_at_angle(self.angle0 + step * f64::from(i))
            };
            segments.push(Segment::new(prev, next));
            prev = next;
        }
        Ok(segments)
    }
}
