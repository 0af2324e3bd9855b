mod oriented_box;
mod rectangle;
mod triangle;

pub use oriented_box::OrientedBox;
pub use rectangle::Rectangle;
pub use triangle::Triangle;
