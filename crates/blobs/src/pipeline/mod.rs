pub mod builder;

use std::path::Path;

use image::GrayImage;
use tracing::debug;

use crate::{
    error::Result,
    grid::Grid,
    traits::{BlobExtractor, BlobFilter, MaskPreprocessor},
    types::BlobReport,
};

/// A flexible blob-detection pipeline with multiple processing stages
pub struct Pipeline {
    preprocessors: Vec<Box<dyn MaskPreprocessor>>,
    extractor: Box<dyn BlobExtractor>,
    filters: Vec<Box<dyn BlobFilter>>,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> builder::PipelineBuilder {
        builder::PipelineBuilder::new()
    }

    /// Create a new pipeline with the given components
    pub fn new(
        preprocessors: Vec<Box<dyn MaskPreprocessor>>,
        extractor: Box<dyn BlobExtractor>,
        filters: Vec<Box<dyn BlobFilter>>,
    ) -> Self {
        Self {
            preprocessors,
            extractor,
            filters,
        }
    }

    /// Process a grayscale image through the entire pipeline
    pub fn process(&self, image: &GrayImage) -> Result<BlobReport> {
        // Step 1: Apply all preprocessors in sequence
        let mut processed_image = image.clone();
        for preprocessor in &self.preprocessors {
            processed_image = preprocessor.preprocess(&processed_image)?;
        }

        // Step 2: Binarize into a boolean grid
        let grid = Grid::from_mask(&processed_image)?;

        // Step 3: Extract component bounding rectangles
        let mut rects = self.extractor.extract(&grid)?;

        // Step 4: Apply all filters in sequence
        for filter in &self.filters {
            filter.filter(&mut rects)?;
        }

        debug!(blobs = rects.len(), "pipeline finished");

        Ok(BlobReport {
            rects,
            image_width: image.width(),
            image_height: image.height(),
        })
    }

    /// Load an image from disk and process it
    pub fn process_path<P: AsRef<Path>>(&self, path: P) -> Result<BlobReport> {
        let image = image::open(path)?.to_luma8();
        self.process(&image)
    }

    /// Get information about the pipeline configuration
    pub fn info(&self) -> String {
        format!(
            "Pipeline: {} preprocessors, 1 extractor, {} filters",
            self.preprocessors.len(),
            self.filters.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::MinSizeFilter;
    use image::Luma;

    fn create_test_image() -> GrayImage {
        let mut img = GrayImage::new(100, 100);
        for y in 20..80 {
            for x in 20..80 {
                img.put_pixel(x, y, Luma([255u8]));
            }
        }
        img
    }

    #[test]
    fn pipeline_finds_single_square() {
        let pipeline = Pipeline::builder().build();
        let image = create_test_image();

        let result = pipeline.process(&image).expect("Should process successfully");
        assert_eq!(result.image_width, 100);
        assert_eq!(result.image_height, 100);
        assert_eq!(result.rects.len(), 1);

        let rect = result.rects[0];
        assert_eq!((rect.x, rect.y), (20, 20));
        assert_eq!((rect.width, rect.height), (60, 60));
    }

    #[test]
    fn pipeline_with_min_size_filter() {
        let mut image = create_test_image();
        // Speckle that should be filtered out.
        image.put_pixel(5, 5, Luma([255u8]));

        let unfiltered = Pipeline::builder().build();
        assert_eq!(
            unfiltered.process(&image).expect("Should process").rects.len(),
            2
        );

        let pipeline = Pipeline::builder()
            .add_filter(MinSizeFilter {
                min_width: 2,
                min_height: 2,
            })
            .build();
        let result = pipeline.process(&image).expect("Should process");
        assert_eq!(result.rects.len(), 1);
    }

    #[test]
    fn gray_levels_below_threshold_are_background() {
        let mut image = create_test_image();
        // Mid-gray patch darker than the default threshold.
        for y in 0..10 {
            for x in 90..100 {
                image.put_pixel(x, y, Luma([100u8]));
            }
        }

        let pipeline = Pipeline::builder().build();
        let result = pipeline.process(&image).expect("Should process");
        assert_eq!(result.rects.len(), 1);
    }
}
