use crate::error::RasterError;
use crate::pixel::Rgba;

/// Raster size in pixels.
///
/// # Examples
///
/// ```
/// use pixelgrade_raster::RasterSize;
///
/// let size = RasterSize {
///     width: 10,
///     height: 20,
/// };
///
/// assert_eq!(size.width, 10);
/// assert_eq!(size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterSize {
    /// Width of the raster in pixels.
    pub width: usize,
    /// Height of the raster in pixels.
    pub height: usize,
}

impl RasterSize {
    /// Total number of pixels.
    pub fn num_pixels(&self) -> usize {
        self.width * self.height
    }
}

impl std::fmt::Display for RasterSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "RasterSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for RasterSize {
    fn from(size: [usize; 2]) -> Self {
        RasterSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// An owned grid of RGBA pixels stored row-major.
///
/// The pixel at `(x, y)` lives at index `y * width + x`. The buffer length
/// always equals `width * height`; constructors validate it and nothing
/// resizes the buffer afterwards, so per-pixel operations only ever rewrite
/// values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    size: RasterSize,
    pixels: Vec<Rgba>,
}

impl Raster {
    /// Create a raster from pixel data.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the pixel data length
    /// does not match `width * height`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelgrade_raster::{Raster, RasterSize, Rgba};
    ///
    /// let raster = Raster::new(
    ///     RasterSize {
    ///         width: 2,
    ///         height: 3,
    ///     },
    ///     vec![Rgba::default(); 6],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(raster.width(), 2);
    /// assert_eq!(raster.height(), 3);
    /// ```
    pub fn new(size: RasterSize, pixels: Vec<Rgba>) -> Result<Self, RasterError> {
        if size.width == 0 || size.height == 0 {
            return Err(RasterError::ZeroDimension(size.width, size.height));
        }

        if pixels.len() != size.num_pixels() {
            return Err(RasterError::InvalidPixelCount(
                pixels.len(),
                size.num_pixels(),
            ));
        }

        Ok(Self { size, pixels })
    }

    /// Create a raster with every pixel set to `val`.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn from_size_val(size: RasterSize, val: Rgba) -> Result<Self, RasterError> {
        Self::new(size, vec![val; size.num_pixels()])
    }

    /// Create a raster from a raw RGBA8 byte buffer, 4 bytes per pixel.
    ///
    /// This is the entry point for host-decoded image data.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the byte length does
    /// not match `width * height * 4`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelgrade_raster::{Raster, RasterSize, Rgba};
    ///
    /// let raster = Raster::from_rgba8(
    ///     RasterSize {
    ///         width: 1,
    ///         height: 1,
    ///     },
    ///     vec![200, 100, 50, 255],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(raster.get_pixel(0, 0).unwrap(), Rgba::new(200, 100, 50, 255));
    /// ```
    pub fn from_rgba8(size: RasterSize, data: Vec<u8>) -> Result<Self, RasterError> {
        if size.width == 0 || size.height == 0 {
            return Err(RasterError::ZeroDimension(size.width, size.height));
        }

        if data.len() != size.num_pixels() * 4 {
            return Err(RasterError::InvalidPixelCount(
                data.len(),
                size.num_pixels() * 4,
            ));
        }

        let pixels = data
            .chunks_exact(4)
            .map(|c| Rgba::new(c[0], c[1], c[2], c[3]))
            .collect();

        Ok(Self { size, pixels })
    }

    /// Consume the raster into a raw RGBA8 byte buffer, 4 bytes per pixel.
    pub fn into_rgba8(self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            data.extend_from_slice(&[px.r, px.g, px.b, px.a]);
        }
        data
    }

    /// The raster dimensions.
    pub fn size(&self) -> RasterSize {
        self.size
    }

    /// Width of the raster in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Height of the raster in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Total number of pixels.
    pub fn num_pixels(&self) -> usize {
        self.pixels.len()
    }

    /// The pixel data as a flat row-major slice.
    pub fn as_slice(&self) -> &[Rgba] {
        &self.pixels
    }

    /// The pixel data as a mutable flat row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    /// The pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates fall outside the raster bounds.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Rgba, RasterError> {
        if x >= self.size.width || y >= self.size.height {
            return Err(RasterError::PixelIndexOutOfBounds(
                x,
                y,
                self.size.width,
                self.size.height,
            ));
        }

        Ok(self.pixels[y * self.size.width + x])
    }
}
