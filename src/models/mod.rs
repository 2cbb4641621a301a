pub mod point;
pub mod raster;
pub mod rect;

pub use point::{Point, PointI};
pub use raster::Raster;
pub use rect::Rect;
