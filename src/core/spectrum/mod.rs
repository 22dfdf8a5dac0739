pub mod rgb;

pub use rgb::*;

pub type Spectrum = RGBSpectrum;
