//! Toolbar configuration
//!
//! [`ToolbarSettings`] is the serializable part, stored in
//! `~/.config/format-toolbar/config.yaml`. [`ToolbarConfig`] adds the
//! position function, which only exists in code.

use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::element::TextInput;
use crate::geometry::{below_left, Point, DEFAULT_GAP, DEFAULT_Z_INDEX};

/// User-tunable toolbar behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolbarSettings {
    /// Delay between an input losing focus and the toolbar hiding
    #[serde(default = "default_hide_delay_ms")]
    pub hide_delay_ms: u64,
    /// Keep focus in the input when the toolbar is clicked
    #[serde(default = "default_true")]
    pub prevent_close_on_click: bool,
    /// Gap between the input and the toolbar for the default placement
    #[serde(default = "default_gap")]
    pub position_gap: f32,
    /// Stacking order of the toolbar surface
    #[serde(default = "default_z_index")]
    pub z_index: i32,
}

fn default_hide_delay_ms() -> u64 {
    500
}

fn default_true() -> bool {
    true
}

fn default_gap() -> f32 {
    DEFAULT_GAP
}

fn default_z_index() -> i32 {
    DEFAULT_Z_INDEX
}

impl Default for ToolbarSettings {
    fn default() -> Self {
        Self {
            hide_delay_ms: default_hide_delay_ms(),
            prevent_close_on_click: default_true(),
            position_gap: default_gap(),
            z_index: default_z_index(),
        }
    }
}

impl ToolbarSettings {
    /// Load settings from the default config file, or return defaults
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

        match Self::load_from(&path) {
            Ok(settings) => {
                tracing::info!("Loaded toolbar settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load settings from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Save settings to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved toolbar settings to {}", path.display());
        Ok(())
    }

    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }
}

/// Computes where the toolbar goes for a focused input
pub type PositionFn = Rc<dyn Fn(&dyn TextInput) -> Point>;

/// Full toolbar configuration: settings plus placement
#[derive(Clone)]
pub struct ToolbarConfig {
    pub settings: ToolbarSettings,
    /// Custom placement; `None` places the toolbar below the input's left edge
    pub get_position: Option<PositionFn>,
}

impl ToolbarConfig {
    pub fn new(settings: ToolbarSettings) -> Self {
        Self {
            settings,
            get_position: None,
        }
    }

    /// Set a custom position function (builder pattern)
    pub fn with_position<F>(mut self, get_position: F) -> Self
    where
        F: Fn(&dyn TextInput) -> Point + 'static,
    {
        self.get_position = Some(Rc::new(get_position));
        self
    }

    /// Set the hide delay (builder pattern)
    pub fn with_hide_delay(mut self, delay: Duration) -> Self {
        self.settings.hide_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Set whether toolbar clicks keep the input focused (builder pattern)
    pub fn with_prevent_close_on_click(mut self, prevent: bool) -> Self {
        self.settings.prevent_close_on_click = prevent;
        self
    }

    pub fn hide_delay(&self) -> Duration {
        self.settings.hide_delay()
    }

    pub fn prevent_close_on_click(&self) -> bool {
        self.settings.prevent_close_on_click
    }

    /// Toolbar position for `input` under this configuration
    pub fn position_for(&self, input: &dyn TextInput) -> Point {
        match &self.get_position {
            Some(get_position) => get_position(input),
            None => below_left(&input.bounding_rect(), self.settings.position_gap),
        }
    }
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self::new(ToolbarSettings::default())
    }
}

impl std::fmt::Debug for ToolbarConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolbarConfig")
            .field("settings", &self.settings)
            .field("custom_position", &self.get_position.is_some())
            .finish()
    }
}
