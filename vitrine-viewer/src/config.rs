//! On-disk configuration for the viewer.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ordered list of image URLs shown by the carousel.
    pub images: Vec<String>,
    /// Auto-advance period in milliseconds.
    pub period_ms: u64,
    /// Whether tiles pulse. Turning this off also stops the per-frame
    /// redraw while the strip is idle.
    pub pulse: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            period_ms: 3000,
            pulse: true,
            window_width: 1280.0,
            window_height: 720.0,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(config) = serde_json::from_str(&content) {
                    return config;
                }
                log::warn!("ignoring unreadable config at {}", path.display());
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        if let Some(path) = config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vitrine").join("config.json"))
}
