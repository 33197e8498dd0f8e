//! Editor configuration.
//!
//! Read from JSON. Every field has a default, so a partial file is valid and
//! a missing file means "all defaults".

use std::path::{Path, PathBuf};

use diapo_core::{DiapoError, RationalTime, Result};
use diapo_panels::Layout;
use diapo_timeline::TransitionNext;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Transition attached to newly added items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionDefaults {
    pub kind: String,
    pub duration_ms: i64,
}

impl Default for TransitionDefaults {
    fn default() -> Self {
        Self {
            kind: "fade".into(),
            duration_ms: 1000,
        }
    }
}

/// Editor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Width of the panel navigation column
    pub nav_width: f32,
    /// Width reserved for a panel body's scroll bar
    pub scroll_bar_width: f32,
    /// Maximum undo steps
    pub history_depth: usize,
    /// Duration given to newly added items
    pub default_item_duration_ms: i64,
    /// Transition given to newly added items; `null` disables it
    pub default_transition: Option<TransitionDefaults>,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            nav_width: 40.0,
            scroll_bar_width: 20.0,
            history_depth: 200,
            default_item_duration_ms: 3000,
            default_transition: Some(TransitionDefaults::default()),
            log_level: "info".into(),
        }
    }
}

impl EditorConfig {
    /// `<config dir>/diapo/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("diapo").join("config.json"))
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let data = std::fs::read(path)?;
        Self::from_json(&data)
    }

    /// Load from the platform default location.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let config: Self = serde_json::from_slice(data)
            .map_err(|e| DiapoError::Config(format!("Invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
            .map_err(|e| DiapoError::Config(format!("Failed to serialize config: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_item_duration_ms <= 0 {
            return Err(DiapoError::Config(format!(
                "default_item_duration_ms must be positive, got {}",
                self.default_item_duration_ms
            )));
        }
        if let Some(t) = &self.default_transition {
            if t.duration_ms <= 0 {
                return Err(DiapoError::Config(format!(
                    "default_transition.duration_ms must be positive, got {}",
                    t.duration_ms
                )));
            }
        }
        if self.nav_width < 0.0 || self.scroll_bar_width < 0.0 {
            return Err(DiapoError::Config("panel widths must not be negative".into()));
        }
        if self.history_depth == 0 {
            return Err(DiapoError::Config("history_depth must be at least 1".into()));
        }
        Ok(())
    }

    /// Panel layout derived from the widths.
    pub fn layout(&self) -> Layout {
        Layout {
            nav_width: self.nav_width,
            scroll_bar_width: self.scroll_bar_width,
        }
    }

    pub fn item_duration(&self) -> RationalTime {
        RationalTime::from_millis(self.default_item_duration_ms)
    }

    /// The default transition, if one is configured.
    pub fn transition(&self) -> Result<Option<TransitionNext>> {
        self.default_transition
            .as_ref()
            .map(|t| TransitionNext::new(t.kind.clone(), RationalTime::from_millis(t.duration_ms)))
            .transpose()
    }
}
