use tracing::{debug, trace};

use crate::error::{OperationError, Result};
use crate::geometry::{Ray, Rectangle, Segment};
use crate::math::intersect_2d::{segment_ray_intersect_2d, Intersection};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Parameters controlling hatch generation.
#[derive(Debug, Clone, Copy)]
pub struct HatchParams {
    /// Angle of the stepping direction in degrees; hatch lines run perpendicular to it.
    pub angle_degrees: f64,
    /// Distance between neighbouring hatch lines.
    pub spacing: f64,
    /// Tolerance for intersection tests and for merging coincident hits.
    pub tolerance: f64,
    /// Also emit a second pass rotated by 90 degrees.
    pub cross: bool,
}

impl Default for HatchParams {
    fn default() -> Self {
        Self {
            angle_degrees: 45.0,
            spacing: 1.0,
            tolerance: TOLERANCE,
            cross: false,
        }
    }
}

impl HatchParams {
    /// Sets the hatch angle in degrees.
    #[must_use]
    pub fn angle(mut self, angle_degrees: f64) -> Self {
        self.angle_degrees = angle_degrees;
        self
    }

    /// Sets the line spacing.
    #[must_use]
    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Enables or disables the second, perpendicular pass.
    #[must_use]
    pub fn cross(mut self, cross: bool) -> Self {
        self.cross = cross;
        self
    }
}

/// Fills a rectangle, optionally with a rectangular hole, with evenly
/// spaced parallel line segments.
///
/// Rays are stepped along `(cos θ, sin θ)` and cast along the perpendicular
/// `(-sin θ, cos θ)`. The hits of each ray with the boundaries are sorted
/// along the ray and paired up into interior segments.
pub struct Hatch {
    outer: Rectangle,
    hole: Option<Rectangle>,
    params: HatchParams,
}

impl Hatch {
    /// Creates a new `Hatch` operation.
    #[must_use]
    pub fn new(outer: Rectangle, hole: Option<Rectangle>, params: HatchParams) -> Self {
        Self {
            outer,
            hole,
            params,
        }
    }

    /// Executes the operation.
    ///
    /// Returns the outer boundary segments, then the hole boundary segments
    /// (if any), then every hatch segment.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the spacing is not a
    /// positive finite number, or the angle or tolerance is not finite.
    pub fn execute(&self) -> Result<Vec<Segment>> {
        let HatchParams {
            angle_degrees,
            spacing,
            tolerance,
            cross,
        } = self.params;
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "hatch spacing must be positive, got {spacing}"
            ))
            .into());
        }
        if !angle_degrees.is_finite() || !tolerance.is_finite() || tolerance < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "hatch angle and tolerance must be finite, got {angle_degrees} and {tolerance}"
            ))
            .into());
        }

        let mut segments: Vec<Segment> = self.outer.segments().to_vec();
        if let Some(hole) = &self.hole {
            segments.extend_from_slice(&hole.segments());
        }
        let boundary_count = segments.len();

        self.hatch_pass(angle_degrees, &mut segments);
        if cross {
            self.hatch_pass(angle_degrees + 90.0, &mut segments);
        }

        debug!(
            angle = angle_degrees,
            spacing,
            hatch_segments = segments.len() - boundary_count,
            "hatch complete"
        );
        Ok(segments)
    }

    /// Casts one family of parallel rays and appends the interior segments.
    fn hatch_pass(&self, angle_degrees: f64, out: &mut Vec<Segment>) {
        let HatchParams {
            spacing, tolerance, ..
        } = self.params;
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        let dir = Vector2::new(cos, sin);
        let dir_ortho = Vector2::new(-sin, cos);

        // Extent of the rectangle along both axes of the hatch frame,
        // measured from the rectangle origin.
        let origin = *self.outer.origin();
        let corners = self.outer.segments().map(|s| s.p0 - origin);
        let along = corners.map(|c| c.dot(&dir));
        let across = corners.map(|c| c.dot(&dir_ortho));
        let along_min = along.iter().copied().fold(f64::INFINITY, f64::min);
        let along_max = along.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let across_min = across.iter().copied().fold(f64::INFINITY, f64::min);

        let step_count = step_count(along_max - along_min, spacing);
        debug!(angle = angle_degrees, step_count, "hatch pass");

        // Rays start one spacing behind the rectangle so every hit lies ahead.
        let base = origin + dir * along_min + dir_ortho * (across_min - spacing);
        for i in 0..step_count {
            let ray = Ray::new(base + dir * (f64::from(i) * spacing), dir_ortho);
            let hits = self.scanline_hits(&ray, tolerance);
            trace!(step = i, hits = hits.len(), "hatch scanline");
            emit_spans(&hits, out);
        }
    }

    /// Boundary hits of `ray`, sorted along the ray with coincident hits merged.
    fn scanline_hits(&self, ray: &Ray, eps: f64) -> Vec<Point2> {
        let mut hits = Vec::with_capacity(8);
        for edge in &self.outer.segments() {
            collect_hit(segment_ray_intersect_2d(edge, ray, eps), &mut hits);
        }
        if let Some(hole) = &self.hole {
            if hits.len() >= 2 {
                for edge in &hole.segments() {
                    collect_hit(segment_ray_intersect_2d(edge, ray, eps), &mut hits);
                }
            }
        }

        hits.sort_by(|a, b| ray.project(a).total_cmp(&ray.project(b)));
        // A ray through a corner hits both edges that meet there.
        hits.dedup_by(|a, b| (*a - *b).norm() <= eps);
        hits
    }
}

/// Number of rays needed to cover `extent` at `spacing`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn step_count(extent: f64, spacing: f64) -> u32 {
    (extent.max(0.0) / spacing).floor().min(f64::from(u32::MAX)) as u32
}

fn collect_hit(hit: Intersection, hits: &mut Vec<Point2>) {
    match hit {
        Intersection::None => {}
        Intersection::Point(p) => hits.push(p),
        // Ray running along an edge.
        Intersection::Segment(s) => {
            hits.push(s.p0);
            hits.push(s.p1);
        }
    }
}

/// Turns sorted scanline hits into interior spans.
fn emit_spans(hits: &[Point2], out: &mut Vec<Segment>) {
    match hits.len() {
        0 | 1 => {}
        // Ray grazes a hole corner; the middle hit does not split the span.
        3 => out.push(Segment::new(hits[0], hits[2])),
        n => {
            out.push(Segment::new(hits[0], hits[1]));
            if n >= 4 {
                out.push(Segment::new(hits[2], hits[3]));
            }
        }
    }
}
