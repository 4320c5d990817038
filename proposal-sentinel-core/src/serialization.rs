use crate::types::Report;
use anyhow::{Context, Result};
use std::path::Path;

impl Report {
    /// JSON with two-space indentation: `{flags, strengths, meta}`
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn save_to_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self
            .to_json_pretty()
            .context("Failed to serialize report")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write JSON report to {}", path.display()))?;
        Ok(())
    }

    pub fn save_to_text(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.render())
            .with_context(|| format!("Failed to write text report to {}", path.display()))?;
        Ok(())
    }

    /// Write both the JSON report and its human-readable rendering
    pub fn save(&self, json_path: impl AsRef<Path>, text_path: impl AsRef<Path>) -> Result<()> {
        self.save_to_json(json_path)?;
        self.save_to_text(text_path)
    }
}
