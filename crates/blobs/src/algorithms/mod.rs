pub mod extraction;
pub mod filtering;
pub mod preprocessing;

pub use extraction::{Connectivity, FloodFillExtractor};
pub use filtering::MinSizeFilter;
pub use preprocessing::{GaussianBlurPreprocessor, ThresholdPreprocessor};
