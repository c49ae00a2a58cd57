//! Read-only contract for decoded raster images

use image::{DynamicImage, GenericImageView};

/// Random-access view of a decoded raster image
///
/// Ingestion only ever reads RGB; alpha is ignored. `bits_per_pixel` is the
/// declared storage size of one pixel in the decoded image and lets
/// ingestion reject formats without a full color-plus-alpha layout.
pub trait RasterSource {
    /// Image width in pixels
    fn width(&self) -> u32;

    /// Image height in pixels
    fn height(&self) -> u32;

    /// Declared storage size of one pixel, in bits
    fn bits_per_pixel(&self) -> u32;

    /// Red, green, and blue channel values at pixel `(x, y)`
    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3];
}

impl RasterSource for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::dimensions(self).0
    }

    fn height(&self) -> u32 {
        GenericImageView::dimensions(self).1
    }

    fn bits_per_pixel(&self) -> u32 {
        u32::from(self.color().bits_per_pixel())
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        let pixel = self.get_pixel(x, y);
        [pixel[0], pixel[1], pixel[2]]
    }
}
