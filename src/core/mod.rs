pub mod base;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod misc;
pub mod param_set;
pub mod prelude;
pub mod reflection;
pub mod rng;
pub mod sampler;
pub mod scene;
pub mod spectrum;
