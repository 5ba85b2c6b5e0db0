use crate::{
    algorithms::{FloodFillExtractor, GaussianBlurPreprocessor, MinSizeFilter, ThresholdPreprocessor},
    pipeline::Pipeline,
    traits::{BlobExtractor, BlobFilter, MaskPreprocessor},
};

/// Builder for creating detection pipelines with a fluent API
pub struct PipelineBuilder {
    preprocessors: Vec<Box<dyn MaskPreprocessor>>,
    extractor: Option<Box<dyn BlobExtractor>>,
    filters: Vec<Box<dyn BlobFilter>>,
}

impl PipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self {
            preprocessors: Vec::new(),
            extractor: None,
            filters: Vec::new(),
        }
    }

    /// Add a preprocessor to the pipeline
    pub fn add_preprocessor<P>(mut self, preprocessor: P) -> Self
    where
        P: MaskPreprocessor + 'static,
    {
        self.preprocessors.push(Box::new(preprocessor));
        self
    }

    /// Set the extractor (replaces any existing one)
    pub fn set_extractor<E>(mut self, extractor: E) -> Self
    where
        E: BlobExtractor + 'static,
    {
        self.extractor = Some(Box::new(extractor));
        self
    }

    /// Add a rectangle filter to the pipeline
    pub fn add_filter<F>(mut self, filter: F) -> Self
    where
        F: BlobFilter + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    /// Add a minimum-size filter as a post-processing step
    pub fn with_min_size(self, min_width: u32, min_height: u32) -> Self {
        self.add_filter(MinSizeFilter {
            min_width,
            min_height,
        })
    }

    /// Build the pipeline with default components if not specified.
    ///
    /// The default pipeline thresholds at 127 and extracts 8-connected
    /// components.
    pub fn build(self) -> Pipeline {
        let mut preprocessors = self.preprocessors;
        if preprocessors.is_empty() {
            preprocessors.push(Box::new(ThresholdPreprocessor::default()));
        }

        let extractor = self
            .extractor
            .unwrap_or_else(|| Box::new(FloodFillExtractor::default()));

        Pipeline::new(preprocessors, extractor, self.filters)
    }

    /// Build a simple pipeline with basic threshold preprocessing
    pub fn build_simple(threshold: u8) -> Pipeline {
        Self::new()
            .add_preprocessor(ThresholdPreprocessor { threshold })
            .build()
    }

    /// Build a pipeline that denoises before thresholding
    pub fn build_denoised(threshold: u8, sigma: f32) -> Pipeline {
        Self::new()
            .add_preprocessor(GaussianBlurPreprocessor { sigma })
            .add_preprocessor(ThresholdPreprocessor { threshold })
            .build()
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
