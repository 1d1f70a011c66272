use pixelgrade_raster::RasterError;

/// Errors that can occur when constructing filters or resolving presets.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FilterError {
    /// Brightness gain must be a finite, non-negative number.
    #[error("brightness amount must be finite and non-negative, got {0}")]
    InvalidBrightness(f32),

    /// Contrast level must lie strictly inside (-255, 255).
    #[error("contrast amount must be within (-255, 255), got {0}")]
    InvalidContrast(f32),

    /// Gamma value must lie strictly inside (0, 8).
    #[error("gamma amount must be within (0, 8), got {0}")]
    InvalidGamma(f32),

    /// Alpha override must lie within [0, 1].
    #[error("alpha amount must be within [0, 1], got {0}")]
    InvalidAlpha(f32),

    /// No preset is registered under the requested name.
    #[error("no preset registered under name \"{0}\"")]
    PresetNotFound(String),

    /// Raster-level failure while processing.
    #[error(transparent)]
    Raster(#[from] RasterError),
}
