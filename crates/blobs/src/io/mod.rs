use std::path::Path;

use crate::{error::Result, types::BlobReport};

impl BlobReport {
    /// Serialize the report to a pretty-printed JSON string
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save the report to a JSON file
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// Load a report from a JSON string
    pub fn from_json_string(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a report from a JSON file
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_string(&content)
    }
}
