use serde::{Deserialize, Serialize};
use std::fs;

/// Runner configuration.
///
/// Only observability knobs live here. Kernel behavior is NEVER configurable:
/// the output contract is a pure function of the kernel id and `n`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
            log_file: "lockstep.log".to_string(),
            use_json: false,
            rotation: "never".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from a YAML file, falling back to defaults when the file is
    /// absent. A present-but-malformed file is a fatal setup error.
    pub fn load_or_default(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => serde_yaml::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse config file {}: {}", path, e)),
            Err(_) => Self::default(),
        }
    }
}
