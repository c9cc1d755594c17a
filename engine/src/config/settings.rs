// Engine settings, loaded from a JSON file or falling back to defaults.
use crate::error::EngineError;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EngineSettings {
    /// Category filter used when the caller does not pass one.
    pub default_filter: String,
    /// Destination for the filtered CSV export.
    pub export_file: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            default_filter: "all".to_string(),
            export_file: "extrato_filtrado.csv".to_string(),
        }
    }
}

impl EngineSettings {
    pub fn load_from_file(path: &Path) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| EngineError::ConfigError(format!("{}: {}", path.display(), e)))
    }
}
