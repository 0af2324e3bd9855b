mod arc;
mod circle;
mod ray;
mod segment;

pub use arc::Arc;
pub use circle::Circle;
pub use ray::Ray;
pub use segment::Segment;
