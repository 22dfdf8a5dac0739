pub mod frame;
pub mod numeric_traits;
pub mod vector2;
pub mod vector3;

pub use frame::*;
pub use vector2::*;
pub use vector3::*;
