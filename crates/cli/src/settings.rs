use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use fishcrop_core::metadata::infrastructure::adapter_factory::MetadataSchema;
use fishcrop_core::shared::constants::DEFAULT_MARGIN_FRACTION;

/// Persistent crop defaults; command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropSettings {
    pub schema: MetadataSchema,
    pub increase: f64,
    pub allow_truncated: bool,
}

impl Default for CropSettings {
    fn default() -> Self {
        Self {
            schema: MetadataSchema::default(),
            increase: DEFAULT_MARGIN_FRACTION,
            allow_truncated: true,
        }
    }
}

impl CropSettings {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("fishcrop").join("settings.json"))
    }

    /// Loads `explicit` if given (errors are fatal), otherwise the user config
    /// file if one exists (errors fall back to defaults).
    pub fn load(explicit: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let Some(path) = Self::config_path().filter(|p| p.exists()) else {
            return Ok(Self::default());
        };
        Ok(Self::from_file(&path).unwrap_or_else(|e| {
            log::warn!("Ignoring settings file: {e}");
            Self::default()
        }))
    }

    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let json = fs::read_to_string(path)
            .map_err(|e| format!("failed to read settings {}: {e}", path.display()))?;
        let settings = serde_json::from_str(&json)
            .map_err(|e| format!("invalid settings {}: {e}", path.display()))?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn with_overrides(
        mut self,
        increase: Option<f64>,
        schema: Option<MetadataSchema>,
        reject_truncated: bool,
    ) -> Self {
        if let Some(increase) = increase {
            self.increase = increase;
        }
        if let Some(schema) = schema {
            self.schema = schema;
        }
        if reject_truncated {
            self.allow_truncated = false;
        }
        self
    }
}
