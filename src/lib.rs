//! Planar primitive-query kernel.
//!
//! Closest-distance and intersection queries between points, segments,
//! rays, arcs, circles and boxes, plus arc discretization, vertical gap
//! queries and rectangle hatching.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{PlanarError, Result};
pub use geometry::{Arc, Circle, OrientedBox, Ray, Rectangle, Segment, Triangle};
pub use math::intersect_2d::Intersection;
pub use math::{Point2, Vector2, TOLERANCE};
pub use operations::{Hatch, HatchParams};
