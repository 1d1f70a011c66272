//! Composable per-pixel RGBA filter pipelines.
//!
//! The [`raster`] module holds the pixel and raster types the host hands in
//! and gets back; the [`filters`] module holds the filter variants, the
//! pipeline that folds them over every pixel, and the named preset registry.

#[doc(inline)]
pub use pixelgrade_raster as raster;

#[doc(inline)]
pub use pixelgrade_filters as filters;
