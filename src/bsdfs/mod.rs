pub mod create_bsdf;
pub mod dielectric;

pub use create_bsdf::*;
pub use dielectric::*;
