use image::GrayImage;

use crate::{error::Result, traits::MaskPreprocessor};

/// Simple thresholding preprocessor
#[derive(Debug, Clone)]
pub struct ThresholdPreprocessor {
    pub threshold: u8,
}

impl Default for ThresholdPreprocessor {
    fn default() -> Self {
        Self { threshold: 127 }
    }
}

impl MaskPreprocessor for ThresholdPreprocessor {
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage> {
        Ok(imageproc::contrast::threshold(
            image,
            self.threshold,
            imageproc::contrast::ThresholdType::Binary,
        ))
    }
}

/// Gaussian blur preprocessor for noise reduction before thresholding
#[derive(Debug, Clone)]
pub struct GaussianBlurPreprocessor {
    pub sigma: f32,
}

impl Default for GaussianBlurPreprocessor {
    fn default() -> Self {
        Self { sigma: 1.0 }
    }
}

impl MaskPreprocessor for GaussianBlurPreprocessor {
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage> {
        Ok(imageproc::filter::gaussian_blur_f32(image, self.sigma))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn threshold_output_is_binary() {
        let mut img = GrayImage::new(4, 1);
        img.put_pixel(0, 0, Luma([0u8]));
        img.put_pixel(1, 0, Luma([127u8]));
        img.put_pixel(2, 0, Luma([128u8]));
        img.put_pixel(3, 0, Luma([255u8]));

        let out = ThresholdPreprocessor::default()
            .preprocess(&img)
            .expect("threshold succeeds");

        assert_eq!(out.get_pixel(0, 0)[0], 0);
        assert_eq!(out.get_pixel(1, 0)[0], 0);
        assert_eq!(out.get_pixel(2, 0)[0], 255);
        assert_eq!(out.get_pixel(3, 0)[0], 255);
    }

    #[test]
    fn blur_preserves_dimensions() {
        let img = GrayImage::new(8, 6);
        let out = GaussianBlurPreprocessor::default()
            .preprocess(&img)
            .expect("blur succeeds");
        assert_eq!(out.dimensions(), (8, 6));
    }
}
