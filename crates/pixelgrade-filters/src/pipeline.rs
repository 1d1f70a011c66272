use pixelgrade_raster::{Raster, RasterError, Rgba};

use crate::error::FilterError;
use crate::filter::Filter;
use crate::parallel;
use crate::preset::Presets;

/// An ordered sequence of filters applied, in order, to every pixel of a
/// raster.
///
/// Each pixel's final value depends only on its own initial value and the
/// filter sequence; filters are folded left to right, so order matters.
/// An empty pipeline is the identity transform.
///
/// # Examples
///
/// ```
/// use pixelgrade_filters::{Filter, Pipeline};
/// use pixelgrade_raster::{Raster, RasterSize, Rgba};
///
/// let pipeline = Pipeline::new()
///     .with_filter(Filter::brightness(1.1).unwrap())
///     .with_filter(Filter::alpha(0.8).unwrap());
///
/// let src = Raster::from_size_val(
///     RasterSize {
///         width: 4,
///         height: 4,
///     },
///     Rgba::new(200, 100, 50, 255),
/// )
/// .unwrap();
///
/// let out = pipeline.process(&src);
/// assert_eq!(out.get_pixel(0, 0).unwrap(), Rgba::new(220, 110, 55, 204));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pipeline {
    filters: Vec<Filter>,
}

impl Pipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Append a filter, builder style.
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Append a filter.
    pub fn push(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    /// Append a filter resolved by name from a preset registry.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::PresetNotFound`] if nothing is registered under
    /// `name`.
    pub fn push_preset(&mut self, presets: &Presets, name: &str) -> Result<(), FilterError> {
        self.filters.push(presets.get(name)?);
        Ok(())
    }

    /// The filters in application order.
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Number of filters in the pipeline.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// True when the pipeline contains no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Fold every filter, in order, over a single pixel.
    pub fn apply(&self, pixel: Rgba) -> Rgba {
        self.filters
            .iter()
            .fold(pixel, |px, filter| filter.apply(px))
    }

    /// Apply the filter chain to every pixel of `src`, returning a new
    /// raster of the same dimensions.
    ///
    /// Rows are processed in parallel; pixels are independent, so the result
    /// does not depend on scheduling.
    pub fn process(&self, src: &Raster) -> Raster {
        let mut dst = src.clone();

        if self.filters.is_empty() {
            return dst;
        }

        log::debug!(
            "processing {}x{} raster through {} filter(s)",
            src.width(),
            src.height(),
            self.filters.len()
        );

        parallel::par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
            *dst_pixel = self.apply(*src_pixel);
        });

        dst
    }

    /// Apply the filter chain into a preallocated destination raster.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidRasterSize`] if the destination
    /// dimensions differ from the source.
    pub fn process_into(&self, src: &Raster, dst: &mut Raster) -> Result<(), FilterError> {
        if src.size() != dst.size() {
            return Err(RasterError::InvalidRasterSize(
                src.width(),
                src.height(),
                dst.width(),
                dst.height(),
            )
            .into());
        }

        log::debug!(
            "processing {}x{} raster through {} filter(s)",
            src.width(),
            src.height(),
            self.filters.len()
        );

        parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
            *dst_pixel = self.apply(*src_pixel);
        });

        Ok(())
    }
}

impl FromIterator<Filter> for Pipeline {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Filter>> for Pipeline {
    fn from(filters: Vec<Filter>) -> Self {
        Self { filters }
    }
}
