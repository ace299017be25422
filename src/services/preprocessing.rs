use image::{imageops, DynamicImage, GenericImageView, ImageBuffer, Luma};

/// Image conditioning for the extraction pipeline: canonical rescale on the
/// way in, per-cell contrast preparation before recognition.
pub struct Preprocessor {
    target_width: u32,
}

impl Preprocessor {
    pub fn new(target_width: u32) -> Self {
        Self { target_width }
    }

    /// Decode raw bytes and rescale to the canonical width, preserving
    /// aspect ratio. Images already at the target width pass through
    /// untouched. Fails when the bytes do not decode to a valid image.
    pub fn normalize(&self, bytes: &[u8]) -> Result<DynamicImage, image::ImageError> {
        let img = image::load_from_memory(bytes)?;

        let (width, height) = img.dimensions();
        if width == self.target_width {
            return Ok(img);
        }

        let scale = self.target_width as f64 / width as f64;
        let new_height = ((height as f64 * scale).round() as u32).max(1);
        Ok(img.resize_exact(self.target_width, new_height, imageops::FilterType::Triangle))
    }

    /// Condition one cell crop for recognition: grayscale, stretch contrast
    /// to the full range, invert polarity. Tuned for the light glowing text
    /// on the dark results screen; accuracy depends on that polarity holding.
    pub fn prepare_cell(&self, region: &DynamicImage) -> DynamicImage {
        let gray = region.to_luma8();
        let stretched = Self::stretch_contrast(&gray);

        let mut prepared = DynamicImage::ImageLuma8(stretched);
        imageops::invert(&mut prepared);
        prepared
    }

    /// Min/max normalization to the full [0, 255] range.
    /// Uniform regions are returned unchanged.
    fn stretch_contrast(gray: &ImageBuffer<Luma<u8>, Vec<u8>>) -> ImageBuffer<Luma<u8>, Vec<u8>> {
        let mut min = u8::MAX;
        let mut max = u8::MIN;
        for pixel in gray.pixels() {
            min = min.min(pixel[0]);
            max = max.max(pixel[0]);
        }

        if max <= min {
            return gray.clone();
        }

        let range = (max - min) as f32;
        ImageBuffer::from_fn(gray.width(), gray.height(), |x, y| {
            let v = gray.get_pixel(x, y)[0];
            Luma([((v - min) as f32 / range * 255.0).round() as u8])
        })
    }
}
