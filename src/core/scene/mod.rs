pub mod scene_context;

pub use scene_context::*;
