pub mod cli_commands;
pub mod core;
mod hull;
mod points;
mod polygons;
pub mod serialization;
mod session;

pub use self::core::*;
pub use self::hull::*;
pub use self::points::*;
pub use self::polygons::*;
pub use self::session::*;
