use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::render::{RenderStyle, ShapeRenderer, DEFAULT_STEP_SIZE};
use crate::shapes::PointConsumer;

/// Returns the path to the settings file: `~/.config/shapedraw/settings.json`
pub fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("shapedraw");
    path.push("settings.json");
    path
}

/// Persisted renderer settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererSettings {
    // Sampling
    pub step_size: f64,

    // Style
    pub color: [u8; 3],
    pub particle_size: f32,
    pub force_show: bool,
}

impl Default for RendererSettings {
    fn default() -> Self {
        let style = RenderStyle::default();
        Self {
            step_size: DEFAULT_STEP_SIZE,
            color: style.color,
            particle_size: style.particle_size,
            force_show: style.force,
        }
    }
}

impl RendererSettings {
    /// Load settings from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(settings_path())
    }

    /// Load settings from `path`, falling back to defaults on any error.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to the default location as pretty JSON.
    pub fn save(&self) {
        self.save_to(settings_path());
    }

    /// Save settings to `path` as pretty JSON.
    pub fn save_to(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("Failed to write settings: {}", e);
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Extract current settings from a renderer.
    pub fn from_renderer<C: PointConsumer>(renderer: &ShapeRenderer<C>) -> Self {
        let style = renderer.style();
        Self {
            step_size: renderer.step_size(),
            color: style.color,
            particle_size: style.particle_size,
            force_show: style.force,
        }
    }

    /// Apply loaded settings to a renderer.
    ///
    /// The step size is validated first; on error nothing is changed.
    pub fn apply<C: PointConsumer>(&self, renderer: &mut ShapeRenderer<C>) -> Result<()> {
        renderer.set_step_size(self.step_size)?;
        renderer.set_style(RenderStyle {
            color: self.color,
            particle_size: self.particle_size,
            force: self.force_show,
        });
        Ok(())
    }
}
