//! Signed vertical gaps between primitives.
//!
//! Every query measures along +Y from a "lower" primitive to an "above"
//! primitive over the X range they share. A positive gap means the above
//! primitive really is above. `None` means the primitives never share an
//! X position, or no sample produced a gap with the expected sign.
//!
//! Arcs are reduced to [`ARC_SEGMENTS`] chords and handled as segments.

use super::Point2;
use crate::geometry::{Arc, Segment};

/// Number of chords an arc is split into for vertical queries.
pub const ARC_SEGMENTS: u32 = 20;

/// Vertical gap from `point` up to `segment` at `point.x`.
///
/// Returns `None` when `point.x` is outside the segment's X span (widened
/// by `eps`). For a vertical segment the gap is `0` when the point's Y is
/// within the segment's Y range, otherwise the signed gap to the nearest
/// endpoint.
#[must_use]
pub fn point_to_above_segment(point: &Point2, segment: &Segment, eps: f64) -> Option<f64> {
    let (x0, x1) = (segment.p0.x, segment.p1.x);
    if point.x < x0.min(x1) - eps || point.x > x0.max(x1) + eps {
        return None;
    }

    let dx = x1 - x0;
    if dx.abs() < eps {
        let min_y = segment.p0.y.min(segment.p1.y);
        let max_y = segment.p0.y.max(segment.p1.y);
        return Some(if point.y < min_y {
            min_y - point.y
        } else if point.y > max_y {
            max_y - point.y
        } else {
            0.0
        });
    }

    let y = segment.p0.y + (point.x - x0) * (segment.p1.y - segment.p0.y) / dx;
    Some(y - point.y)
}

/// Smallest non-negative gap from `point` up to `arc`.
#[must_use]
pub fn point_to_above_arc(point: &Point2, arc: &Arc, eps: f64) -> Option<f64> {
    chords(arc)
        .iter()
        .filter_map(|chord| point_to_above_segment(point, chord, eps))
        .filter_map(|gap| usable(gap, eps))
        .reduce(f64::min)
}

/// Smallest gap from `lower` up to `upper` over their shared X range.
///
/// Two linear pieces are closest (vertically) at the ends of their shared
/// X range, and each end is an endpoint of one of them. Endpoints of
/// `lower` are measured up to `upper`. Endpoints of `upper` are measured
/// against `lower`, which gives a non-positive value when `upper` is above,
/// so those are negated.
#[must_use]
pub fn segment_to_above_segment(lower: &Segment, upper: &Segment, eps: f64) -> Option<f64> {
    let from_lower = [lower.p0, lower.p1]
        .into_iter()
        .filter_map(|p| point_to_above_segment(&p, upper, eps));
    let from_upper = [upper.p0, upper.p1]
        .into_iter()
        .filter_map(|p| point_to_above_segment(&p, lower, eps))
        .map(|gap| -gap);
    from_lower
        .chain(from_upper)
        .filter_map(|gap| usable(gap, eps))
        .reduce(f64::min)
}

/// Smallest gap from `lower` up to any chord of `upper`.
#[must_use]
pub fn segment_to_above_arc(lower: &Segment, upper: &Arc, eps: f64) -> Option<f64> {
    chords(upper)
        .iter()
        .filter_map(|chord| segment_to_above_segment(lower, chord, eps))
        .reduce(f64::min)
}

/// Smallest gap from any chord of `lower` up to `upper`.
#[must_use]
pub fn arc_to_above_segment(lower: &Arc, upper: &Segment, eps: f64) -> Option<f64> {
    chords(lower)
        .iter()
        .filter_map(|chord| segment_to_above_segment(chord, upper, eps))
        .reduce(f64::min)
}

/// Smallest gap between any chord of `lower` and any chord of `upper`.
#[must_use]
pub fn arc_to_above_arc(lower: &Arc, upper: &Arc, eps: f64) -> Option<f64> {
    let upper_chords = chords(upper);
    chords(lower)
        .iter()
        .flat_map(|low| {
            upper_chords
                .iter()
                .filter_map(move |up| segment_to_above_segment(low, up, eps))
        })
        .reduce(f64::min)
}

/// Keeps gaps with the expected sign, snapping values within `eps` below
/// zero to zero.
fn usable(gap: f64, eps: f64) -> Option<f64> {
    (gap >= -eps).then_some(gap.max(0.0))
}

fn chords(arc: &Arc) -> Vec<Segment> {
    // ARC_SEGMENTS is non-zero, so explode cannot fail.
    arc.explode(ARC_SEGMENTS).unwrap_or_default()
}
