pub mod curve;
pub mod shape;

pub use curve::{Arc, Circle, Ray, Segment};
pub use shape::{OrientedBox, Rectangle, Triangle};
