pub mod albedo_report;
pub mod progressreporter;

pub use albedo_report::*;
pub use progressreporter::*;
