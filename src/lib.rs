pub mod core;
mod feature;
pub mod format;
mod geometry;
mod linestring;
mod points;
mod polygons;
pub mod proj;

pub use self::feature::*;
pub use self::geometry::*;
pub use self::linestring::*;
pub use self::points::*;
pub use self::polygons::*;
pub use self::core::*;
