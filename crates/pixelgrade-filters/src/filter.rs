//! Per-pixel filter variants.
//!
//! Every filter is a pure `Rgba -> Rgba` transform parameterized by a fixed
//! `amount` validated at construction. Values derived from `amount` (the
//! contrast correlation factor, the gamma correction exponent, the alpha
//! override byte) are computed once in the constructor, so the per-pixel path
//! is plain arithmetic.
//!
//! The contrast stretch follows the correlation-factor formulation
//!
//! ```text
//! f = 259(c + 255) / (255(259 - c))
//! R' = f(R - 128) + 128
//! ```
//!
//! and gamma correction remaps each color channel through
//! `255 * (R / 255)^(1/g)`.

use pixelgrade_raster::{clamp_channel, Rgba};

use crate::error::FilterError;

/// Midpoint of the channel range the contrast stretch pivots around.
const CHANNEL_MIDPOINT: f32 = 128.0;

/// Scales the red, green and blue channels by a constant gain.
///
/// The alpha channel is left untouched. A gain of `1.0` is the identity,
/// `1.1` brightens by 10% and `0.0` maps every color channel to black; large
/// gains saturate at 255.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Brightness {
    amount: f32,
}

impl Brightness {
    /// Create a brightness filter with the given gain.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidBrightness`] if `amount` is negative or
    /// not finite.
    pub fn new(amount: f32) -> Result<Self, FilterError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(FilterError::InvalidBrightness(amount));
        }

        Ok(Self::new_unchecked(amount))
    }

    pub(crate) fn new_unchecked(amount: f32) -> Self {
        Self { amount }
    }

    /// The gain applied to the color channels.
    pub fn amount(&self) -> f32 {
        self.amount
    }

    fn apply(&self, px: Rgba) -> Rgba {
        let scale = |c: u8| clamp_channel((f32::from(c) * self.amount) as i64);

        Rgba {
            r: scale(px.r),
            g: scale(px.g),
            b: scale(px.b),
            a: px.a,
        }
    }
}

/// Stretches the red, green and blue channels around the channel midpoint.
///
/// The alpha channel is left untouched. Positive amounts increase contrast,
/// negative amounts flatten the image toward mid-gray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contrast {
    amount: f32,
    factor: f32,
}

impl Contrast {
    /// Create a contrast filter with the given level.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidContrast`] if `amount` is not finite or
    /// its magnitude reaches 255, where the correlation factor degenerates.
    pub fn new(amount: f32) -> Result<Self, FilterError> {
        if !amount.is_finite() || amount <= -255.0 || amount >= 255.0 {
            return Err(FilterError::InvalidContrast(amount));
        }

        Ok(Self::new_unchecked(amount))
    }

    pub(crate) fn new_unchecked(amount: f32) -> Self {
        let factor = (259.0 * (amount + 255.0)) / (255.0 * (259.0 - amount));
        Self { amount, factor }
    }

    /// The contrast level this filter was constructed with.
    pub fn amount(&self) -> f32 {
        self.amount
    }

    /// The correlation factor derived from the contrast level.
    pub fn factor(&self) -> f32 {
        self.factor
    }

    fn apply(&self, px: Rgba) -> Rgba {
        let stretch = |c: u8| {
            clamp_channel(
                (self.factor * (f32::from(c) - CHANNEL_MIDPOINT) + CHANNEL_MIDPOINT) as i64,
            )
        };

        Rgba {
            r: stretch(px.r),
            g: stretch(px.g),
            b: stretch(px.b),
            a: px.a,
        }
    }
}

/// Remaps the red, green and blue channels through an inverse-gamma power
/// curve.
///
/// The alpha channel is left untouched. `amount` is the gamma value whose
/// reciprocal is the correction exponent: values below `1.0` darken the
/// midtones, values above `1.0` lift them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gamma {
    amount: f32,
    exponent: f32,
}

impl Gamma {
    /// Create a gamma filter with the given gamma value.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidGamma`] if `amount` is outside the open
    /// interval `(0, 8)`.
    pub fn new(amount: f32) -> Result<Self, FilterError> {
        if !amount.is_finite() || amount <= 0.0 || amount >= 8.0 {
            return Err(FilterError::InvalidGamma(amount));
        }

        Ok(Self::new_unchecked(amount))
    }

    pub(crate) fn new_unchecked(amount: f32) -> Self {
        Self {
            amount,
            exponent: amount.recip(),
        }
    }

    /// The gamma value this filter was constructed with.
    pub fn amount(&self) -> f32 {
        self.amount
    }

    /// The correction exponent `1 / amount`.
    pub fn exponent(&self) -> f32 {
        self.exponent
    }

    fn apply(&self, px: Rgba) -> Rgba {
        let remap =
            |c: u8| clamp_channel((255.0 * (f32::from(c) / 255.0).powf(self.exponent)) as i64);

        Rgba {
            r: remap(px.r),
            g: remap(px.g),
            b: remap(px.b),
            a: px.a,
        }
    }
}

/// Overrides the alpha channel with a constant opacity.
///
/// The color channels are left untouched. This is the only filter that
/// writes alpha; when a chain contains several, the last one wins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Alpha {
    amount: f32,
    value: u8,
}

impl Alpha {
    /// Create an alpha filter with the given opacity, `0.0` fully
    /// transparent and `1.0` fully opaque.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidAlpha`] if `amount` is outside `[0, 1]`.
    pub fn new(amount: f32) -> Result<Self, FilterError> {
        if !amount.is_finite() || !(0.0..=1.0).contains(&amount) {
            return Err(FilterError::InvalidAlpha(amount));
        }

        Ok(Self::new_unchecked(amount))
    }

    pub(crate) fn new_unchecked(amount: f32) -> Self {
        Self {
            amount,
            value: clamp_channel((amount * 255.0) as i64),
        }
    }

    /// The opacity this filter was constructed with.
    pub fn amount(&self) -> f32 {
        self.amount
    }

    /// The alpha byte written to every pixel.
    pub fn value(&self) -> u8 {
        self.value
    }

    fn apply(&self, px: Rgba) -> Rgba {
        Rgba {
            a: self.value,
            ..px
        }
    }
}

/// A single per-pixel adjustment, fixed at construction.
///
/// `Filter` is a closed set of variants matched exhaustively when a pixel is
/// transformed. Instances are immutable and carry no per-call state, so one
/// filter can be shared across any number of concurrent pixel transforms.
///
/// # Examples
///
/// ```
/// use pixelgrade_filters::Filter;
/// use pixelgrade_raster::Rgba;
///
/// let filter = Filter::brightness(1.1).unwrap();
///
/// assert_eq!(
///     filter.apply(Rgba::new(200, 100, 50, 255)),
///     Rgba::new(220, 110, 55, 255)
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Filter {
    /// Scales the color channels by a constant gain.
    Brightness(Brightness),
    /// Stretches the color channels around the channel midpoint.
    Contrast(Contrast),
    /// Remaps the color channels through an inverse-gamma power curve.
    Gamma(Gamma),
    /// Overrides the alpha channel with a constant opacity.
    Alpha(Alpha),
}

impl Filter {
    /// Create a brightness filter. See [`Brightness::new`].
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidBrightness`] for an out-of-domain gain.
    pub fn brightness(amount: f32) -> Result<Self, FilterError> {
        Brightness::new(amount).map(Self::Brightness)
    }

    /// Create a contrast filter. See [`Contrast::new`].
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidContrast`] for an out-of-domain level.
    pub fn contrast(amount: f32) -> Result<Self, FilterError> {
        Contrast::new(amount).map(Self::Contrast)
    }

    /// Create a gamma filter. See [`Gamma::new`].
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidGamma`] for an out-of-domain value.
    pub fn gamma(amount: f32) -> Result<Self, FilterError> {
        Gamma::new(amount).map(Self::Gamma)
    }

    /// Create an alpha override filter. See [`Alpha::new`].
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidAlpha`] for an out-of-domain opacity.
    pub fn alpha(amount: f32) -> Result<Self, FilterError> {
        Alpha::new(amount).map(Self::Alpha)
    }

    /// Short name of the filter kind, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Brightness(_) => "brightness",
            Filter::Contrast(_) => "contrast",
            Filter::Gamma(_) => "gamma",
            Filter::Alpha(_) => "alpha",
        }
    }

    /// Transform a single pixel.
    pub fn apply(&self, pixel: Rgba) -> Rgba {
        match self {
            Filter::Brightness(f) => f.apply(pixel),
            Filter::Contrast(f) => f.apply(pixel),
            Filter::Gamma(f) => f.apply(pixel),
            Filter::Alpha(f) => f.apply(pixel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness_scales_color_channels() -> Result<(), FilterError> {
        let filter = Filter::brightness(1.1)?;
        let out = filter.apply(Rgba::new(200, 100, 50, 255));

        assert_eq!(out, Rgba::new(220, 110, 55, 255));

        Ok(())
    }

    #[test]
    fn test_brightness_identity() -> Result<(), FilterError> {
        let filter = Filter::brightness(1.0)?;

        for c in [0u8, 1, 127, 128, 254, 255] {
            let px = Rgba::new(c, c, c, 17);
            assert_eq!(filter.apply(px), px);
        }

        Ok(())
    }

    #[test]
    fn test_brightness_zero_maps_to_black() -> Result<(), FilterError> {
        let filter = Filter::brightness(0.0)?;
        let out = filter.apply(Rgba::new(200, 100, 50, 90));

        assert_eq!(out, Rgba::new(0, 0, 0, 90));

        Ok(())
    }

    #[test]
    fn test_brightness_saturates() -> Result<(), FilterError> {
        let filter = Filter::brightness(1000.0)?;
        let out = filter.apply(Rgba::new(200, 100, 50, 255));

        assert_eq!(out, Rgba::new(255, 255, 255, 255));

        Ok(())
    }

    #[test]
    fn test_brightness_rejects_bad_amounts() {
        assert_eq!(
            Filter::brightness(-0.1),
            Err(FilterError::InvalidBrightness(-0.1))
        );
        assert!(Filter::brightness(f32::NAN).is_err());
        assert!(Filter::brightness(f32::INFINITY).is_err());
    }

    #[test]
    fn test_contrast_darkens_below_midpoint() -> Result<(), FilterError> {
        // factor = (259 * 383) / (255 * 131), roughly 2.97; a channel of 10
        // stretches to about -222 and saturates at 0
        let filter = Filter::contrast(128.0)?;
        let out = filter.apply(Rgba::new(10, 10, 10, 255));

        assert_eq!(out, Rgba::new(0, 0, 0, 255));

        Ok(())
    }

    #[test]
    fn test_contrast_fixes_midpoint() -> Result<(), FilterError> {
        let filter = Filter::contrast(128.0)?;
        let out = filter.apply(Rgba::new(128, 128, 128, 200));

        assert_eq!(out, Rgba::new(128, 128, 128, 200));

        Ok(())
    }

    #[test]
    fn test_contrast_zero_is_identity() -> Result<(), FilterError> {
        let filter = Filter::contrast(0.0)?;

        for c in [0u8, 10, 128, 200, 255] {
            let px = Rgba::new(c, c, c, 255);
            assert_eq!(filter.apply(px), px);
        }

        Ok(())
    }

    #[test]
    fn test_contrast_factor_hoisted() -> Result<(), FilterError> {
        let filter = Contrast::new(128.0)?;
        let expected = (259.0 * (128.0 + 255.0)) / (255.0 * (259.0 - 128.0));

        assert_eq!(filter.factor(), expected);

        Ok(())
    }

    #[test]
    fn test_contrast_rejects_degenerate_amounts() {
        assert_eq!(
            Filter::contrast(255.0),
            Err(FilterError::InvalidContrast(255.0))
        );
        assert_eq!(
            Filter::contrast(-255.0),
            Err(FilterError::InvalidContrast(-255.0))
        );
        assert!(Filter::contrast(f32::NAN).is_err());
        assert!(Filter::contrast(254.9).is_ok());
    }

    #[test]
    fn test_gamma_brightens_midtones() -> Result<(), FilterError> {
        // 255 * (100 / 255)^0.5 is roughly 159.7, truncated to 159
        let filter = Filter::gamma(2.0)?;
        let out = filter.apply(Rgba::new(100, 100, 100, 255));

        assert_eq!(out, Rgba::new(159, 159, 159, 255));

        Ok(())
    }

    #[test]
    fn test_gamma_identity_within_rounding() -> Result<(), FilterError> {
        let filter = Filter::gamma(1.0)?;

        for c in 0..=255u8 {
            let out = filter.apply(Rgba::new(c, c, c, 255));
            assert!((i16::from(out.r) - i16::from(c)).abs() <= 1);
            assert_eq!(out.a, 255);
        }

        Ok(())
    }

    #[test]
    fn test_gamma_exponent_hoisted() -> Result<(), FilterError> {
        let filter = Gamma::new(0.25)?;

        assert_eq!(filter.exponent(), 4.0);

        Ok(())
    }

    #[test]
    fn test_gamma_rejects_bad_amounts() {
        assert_eq!(Filter::gamma(0.0), Err(FilterError::InvalidGamma(0.0)));
        assert_eq!(Filter::gamma(8.0), Err(FilterError::InvalidGamma(8.0)));
        assert!(Filter::gamma(-1.0).is_err());
        assert!(Filter::gamma(f32::NAN).is_err());
        assert!(Filter::gamma(7.9).is_ok());
    }

    #[test]
    fn test_alpha_overrides_only_alpha() -> Result<(), FilterError> {
        let filter = Filter::alpha(0.8)?;
        let out = filter.apply(Rgba::new(200, 100, 50, 10));

        assert_eq!(out, Rgba::new(200, 100, 50, 204));

        Ok(())
    }

    #[test]
    fn test_alpha_bounds() -> Result<(), FilterError> {
        assert_eq!(Filter::alpha(0.0)?.apply(Rgba::new(1, 2, 3, 99)).a, 0);
        assert_eq!(Filter::alpha(1.0)?.apply(Rgba::new(1, 2, 3, 99)).a, 255);

        Ok(())
    }

    #[test]
    fn test_alpha_rejects_bad_amounts() {
        assert_eq!(Filter::alpha(-0.1), Err(FilterError::InvalidAlpha(-0.1)));
        assert_eq!(Filter::alpha(1.1), Err(FilterError::InvalidAlpha(1.1)));
        assert!(Filter::alpha(f32::NAN).is_err());
    }

    #[test]
    fn test_filter_names() -> Result<(), FilterError> {
        assert_eq!(Filter::brightness(1.0)?.name(), "brightness");
        assert_eq!(Filter::contrast(0.0)?.name(), "contrast");
        assert_eq!(Filter::gamma(1.0)?.name(), "gamma");
        assert_eq!(Filter::alpha(1.0)?.name(), "alpha");

        Ok(())
    }
}
