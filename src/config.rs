//! Tool configuration
//!
//! Reads user preferences from `~/.config/quill/config.yaml`; missing or
//! unparsable config falls back to defaults.

use serde::Deserialize;

/// User-adjustable settings read at startup
#[derive(Debug, Clone, Deserialize)]
pub struct QuillConfig {
    /// Separator used when writing documents back out
    #[serde(default = "default_line_separator")]
    pub line_separator: String,
    /// Default log filter when RUST_LOG is unset (e.g. "warn", "quill=debug")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_line_separator() -> String {
    "\n".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for QuillConfig {
    fn default() -> Self {
        Self {
            line_separator: default_line_separator(),
            log_filter: default_log_filter(),
        }
    }
}

impl QuillConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

}
