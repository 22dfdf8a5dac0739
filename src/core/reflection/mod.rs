pub mod bsdf;
pub mod fresnel;
pub mod functions;
pub mod lobes;

pub use bsdf::*;
pub use fresnel::*;
pub use functions::*;
pub use lobes::*;
