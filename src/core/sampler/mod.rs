pub mod sample_generator;

pub use sample_generator::*;
