pub mod surface_scatter_event;

pub use surface_scatter_event::*;
