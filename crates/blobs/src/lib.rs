//! # Blob Bounding-Box Extraction Library
//!
//! A trait-based library for finding connected components in binary masks
//! and reporting their axis-aligned bounding rectangles. Components are
//! 8-connected by default (diagonals count) and are reported in row-major
//! discovery order: top-to-bottom, left-to-right.
//!
//! ## Core Features
//!
//! - **Trait-based Architecture**: Implement custom algorithms by implementing traits
//! - **Pipeline System**: Compose preprocessing, extraction and filtering steps
//! - **Queue-driven Flood Fill**: Explicit FIFO frontier, no recursion
//! - **JSON Reports**: Export/import detection results
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use blobs::Pipeline;
//! use image::open;
//!
//! // Create a pipeline with default settings
//! let pipeline = Pipeline::builder()
//!     .build();
//!
//! // Process an image
//! let image = open("mask.png")?.to_luma8();
//! let report = pipeline.process(&image)?;
//!
//! // Export to JSON
//! report.save_json("blobs.json")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Custom Pipeline
//!
//! ```rust,no_run
//! use blobs::{Pipeline, algorithms::*};
//!
//! let pipeline = Pipeline::builder()
//!     .add_preprocessor(GaussianBlurPreprocessor { sigma: 1.0 })
//!     .add_preprocessor(ThresholdPreprocessor { threshold: 150 })
//!     .with_min_size(3, 3)
//!     .build();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Core modules
pub mod algorithms;
pub mod error;
pub mod grid;
pub mod io;
pub mod pipeline;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use algorithms::*;
pub use error::{BlobError, Result};
pub use grid::{Candidate, Grid};
pub use pipeline::{Pipeline, builder::PipelineBuilder};
pub use traits::*;
pub use types::{BlobReport, BoundingRect};

/// Type alias for the default detector configuration
pub type SimpleDetector = StandardBlobDetector<ThresholdPreprocessor, FloodFillExtractor>;

/// Standard blob detector implementation
#[derive(Debug)]
pub struct StandardBlobDetector<P, E>
where
    P: MaskPreprocessor,
    E: BlobExtractor,
{
    pub preprocessor: P,
    pub extractor: E,
}

impl<P, E> StandardBlobDetector<P, E>
where
    P: MaskPreprocessor,
    E: BlobExtractor,
{
    pub fn new(preprocessor: P, extractor: E) -> Self {
        Self {
            preprocessor,
            extractor,
        }
    }
}

impl<P, E> BlobDetector for StandardBlobDetector<P, E>
where
    P: MaskPreprocessor,
    E: BlobExtractor,
{
    fn detect(&self, image: &image::GrayImage) -> Result<Vec<BoundingRect>> {
        let binary_image = self.preprocessor.preprocess(image)?;
        let grid = Grid::from_mask(&binary_image)?;
        self.extractor.extract(&grid)
    }
}

impl Default for SimpleDetector {
    fn default() -> Self {
        Self::new(
            ThresholdPreprocessor::default(),
            FloodFillExtractor::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn create_test_image() -> GrayImage {
        let mut img = GrayImage::new(50, 50);
        for y in 10..20 {
            for x in 10..30 {
                img.put_pixel(x, y, Luma([255u8]));
            }
        }
        for y in 30..45 {
            for x in 35..45 {
                img.put_pixel(x, y, Luma([255u8]));
            }
        }
        img
    }

    #[test]
    fn simple_detector_finds_both_blobs() {
        let detector = SimpleDetector::default();
        let rects = detector
            .detect(&create_test_image())
            .expect("Should detect blobs");

        assert_eq!(rects.len(), 2);
        assert_eq!((rects[0].x, rects[0].y), (10, 10));
        assert_eq!((rects[0].width, rects[0].height), (20, 10));
        assert_eq!((rects[1].x, rects[1].y), (35, 30));
        assert_eq!((rects[1].width, rects[1].height), (10, 15));
    }

    #[test]
    fn custom_detector_with_higher_threshold() {
        let detector = StandardBlobDetector::new(
            ThresholdPreprocessor { threshold: 200 },
            FloodFillExtractor::default(),
        );

        let mut image = create_test_image();
        // Dim blob below the custom threshold.
        for y in 0..5 {
            for x in 0..5 {
                image.put_pixel(x, y, Luma([150u8]));
            }
        }

        let rects = detector.detect(&image).expect("Should detect blobs");
        assert_eq!(rects.len(), 2);
    }
}
