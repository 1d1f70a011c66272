#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the raster module.
pub mod error;

/// single pixel representation and channel arithmetic helpers.
pub mod pixel;

/// owned row-major pixel grid.
pub mod raster;

pub use crate::error::RasterError;
pub use crate::pixel::{clamp_channel, Rgba};
pub use crate::raster::{Raster, RasterSize};
