/// 2D arc angle utilities.
///
/// Angles are in degrees and measured counter-clockwise from the +X axis,
/// so a point at angle `θ` on a circle is `center + radius * (cos θ, sin θ)`.
use super::{Point2, Vector2};

/// Wraps an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Evaluates the point at `angle` degrees on the circle `(center, radius)`.
#[must_use]
pub fn point_at_degrees(center: &Point2, radius: f64, angle: f64) -> Point2 {
    let (sin, cos) = angle.to_radians().sin_cos();
    center + Vector2::new(cos, sin) * radius
}

/// Returns the angle of `point` as seen from `center`, in degrees in `[0, 360)`.
///
/// Inverse of [`point_at_degrees`] for points on the circle. A point at the
/// center has no defined angle and maps to `0`.
#[must_use]
pub fn degrees_at_point(center: &Point2, point: &Point2) -> f64 {
    let d = point - center;
    normalize_degrees(d.y.atan2(d.x).to_degrees())
}

/// Checks whether `angle` lies in the sweep from `start` to `start + sweep`
/// (all in degrees). Negative sweeps run clockwise.
#[must_use]
pub fn angle_in_sweep(angle: f64, start: f64, sweep: f64, eps: f64) -> bool {
    if sweep.abs() >= 360.0 - eps {
        return true;
    }
    let delta = if sweep >= 0.0 {
        normalize_degrees(angle - start)
    } else {
        normalize_degrees(start - angle)
    };
    delta <= sweep.abs() + eps || delta >= 360.0 - eps
}
