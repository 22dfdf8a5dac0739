pub mod bsdfs;
pub mod core;
