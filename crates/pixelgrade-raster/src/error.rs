/// Errors that can occur when constructing or indexing rasters.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RasterError {
    /// Pixel data length does not match the raster dimensions.
    #[error("pixel data length ({0}) does not match the raster size ({1})")]
    InvalidPixelCount(usize, usize),

    /// Raster dimensions must both be non-zero.
    #[error("raster dimensions must be non-zero, got {0}x{1}")]
    ZeroDimension(usize, usize),

    /// Pixel coordinates fall outside the raster bounds.
    #[error("pixel index ({0}, {1}) out of bounds for raster {2}x{3}")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Source and destination raster dimensions differ.
    #[error("source raster {0}x{1} does not match destination raster {2}x{3}")]
    InvalidRasterSize(usize, usize, usize, usize),
}
