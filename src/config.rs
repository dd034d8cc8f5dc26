//! Configuration for palette extraction
//!
//! All tunable parameters for the image-to-palette pipeline, with JSON
//! load/save for reproducible runs.
//!
//! ```no_run
//! use chromakit::ExtractionConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ExtractionConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = ExtractionConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::constants::{clustering, sampling};
use serde::{Deserialize, Serialize};

/// Parameters for the load -> sample -> cluster pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Number of representative colors to extract
    pub palette_size: usize,

    /// K-means refinement passes (a fixed budget, not a convergence
    /// check)
    pub refinement_passes: usize,

    /// Every Nth preview pixel enters the sample sequence
    pub sample_stride: usize,

    /// Preview render width cap in pixels; 0 disables scaling
    pub max_preview_width: u32,

    /// Seed for centroid initialization; `None` uses the thread-local
    /// random source. Set for reproducible palettes.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            palette_size: clustering::DEFAULT_PALETTE_SIZE,
            refinement_passes: clustering::REFINEMENT_PASSES,
            sample_stride: sampling::SAMPLE_STRIDE,
            max_preview_width: sampling::MAX_PREVIEW_WIDTH,
            seed: None,
        }
    }
}

impl ExtractionConfig {
    /// Load configuration from a JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
