#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// filter construction and preset lookup errors.
pub mod error;

/// per-pixel filter variants.
pub mod filter;

/// parallelization utilities for per-pixel work.
pub mod parallel;

/// ordered filter application over rasters.
pub mod pipeline;

/// named filter presets.
pub mod preset;

pub use crate::error::FilterError;
pub use crate::filter::{Alpha, Brightness, Contrast, Filter, Gamma};
pub use crate::pipeline::Pipeline;
pub use crate::preset::Presets;
