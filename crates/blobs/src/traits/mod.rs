use image::GrayImage;

use crate::{error::Result, grid::Grid, types::BoundingRect};

/// Trait for mask preprocessing algorithms
pub trait MaskPreprocessor: Send + Sync {
    /// Preprocess the input image (e.g., blur, threshold)
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage>;
}

/// Trait for connected-component extraction algorithms
pub trait BlobExtractor: Send + Sync {
    /// Extract one bounding rectangle per connected component, in
    /// row-major discovery order
    fn extract(&self, source: &Grid<bool>) -> Result<Vec<BoundingRect>>;
}

/// Trait for rectangle post-filtering algorithms
pub trait BlobFilter: Send + Sync {
    /// Filter the extracted rectangles in place
    fn filter(&self, rects: &mut Vec<BoundingRect>) -> Result<()>;
}

/// Main trait for blob detection
pub trait BlobDetector: Send + Sync {
    /// Detect blob bounding rectangles in a grayscale image
    fn detect(&self, image: &GrayImage) -> Result<Vec<BoundingRect>>;
}
