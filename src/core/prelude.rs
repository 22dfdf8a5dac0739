pub use super::base::*;
pub use super::error::*;
pub use super::geometry::*;
pub use super::interaction::*;
pub use super::misc::*;
pub use super::param_set::*;
pub use super::reflection::*;
pub use super::rng::*;
pub use super::sampler::*;
pub use super::scene::*;
pub use super::spectrum::*;
