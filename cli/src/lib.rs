use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlobKitError {
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Unsupported file format. Please use .json files")]
    UnsupportedFileFormat,
}

/// A single detection job: where to read the mask, how to binarize it,
/// and where to write the results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectJob {
    pub input: String,
    /// Path for the annotated copy of the input; skipped when absent
    pub output_image: Option<String>,
    /// Path for the JSON report; skipped when absent
    pub output_json: Option<String>,
    #[serde(default = "default_threshold")]
    pub threshold: u8,
    /// Gaussian blur applied before thresholding; skipped when absent
    pub blur_sigma: Option<f32>,
    /// Minimum rectangle size to keep; no filtering when absent
    pub min_width: Option<u32>,
    pub min_height: Option<u32>,
}

fn default_threshold() -> u8 {
    127
}

impl DetectJob {
    /// Load a DetectJob configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, BlobKitError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load a DetectJob configuration from a JSON string
    pub fn from_json(content: &str) -> Result<Self, BlobKitError> {
        let job: DetectJob = serde_json::from_str(content)?;
        Ok(job)
    }

    /// Auto-detect file format and load configuration
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BlobKitError> {
        let path_ref = path.as_ref();
        match path_ref.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_file(path),
            _ => Err(BlobKitError::UnsupportedFileFormat),
        }
    }

    /// Save the DetectJob configuration to a JSON file
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<(), BlobKitError> {
        let content = self.to_json()?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Convert the DetectJob to a JSON string
    pub fn to_json(&self) -> Result<String, BlobKitError> {
        Ok(serde_json::to_string_pretty(&self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_job() {
        let job = DetectJob::from_json(r#"{ "input": "sample.png" }"#).expect("valid job");
        assert_eq!(job.input, "sample.png");
        assert_eq!(job.threshold, 127);
        assert!(job.output_image.is_none());
        assert!(job.blur_sigma.is_none());
    }

    #[test]
    fn round_trips_full_job() {
        let job = DetectJob {
            input: "in.png".to_string(),
            output_image: Some("out.png".to_string()),
            output_json: Some("out.json".to_string()),
            threshold: 200,
            blur_sigma: Some(1.5),
            min_width: Some(3),
            min_height: Some(3),
        };

        let json = job.to_json().expect("serializes");
        let parsed = DetectJob::from_json(&json).expect("parses");
        assert_eq!(parsed, job);
    }

    #[test]
    fn rejects_unknown_extension() {
        assert!(matches!(
            DetectJob::from_file("job.yaml"),
            Err(BlobKitError::UnsupportedFileFormat)
        ));
    }
}
