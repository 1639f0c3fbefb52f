// SPDX-License-Identifier: GPL-3.0-only

use crate::app::layout::FooterMetrics;
use crate::app::parameters::AspectRatio;
use crate::backends::camera::{PhotoOptions, RecordOptions};
use crate::constants::{Platform, ZoomProfile, timing, ui};
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Application directory name under the user config dir
const APP_DIR: &str = "camera-control";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Delays used by the controller, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub settle_ms: u64,
    pub cooldown_ms: u64,
    pub focus_indicator_ms: u64,
    pub orientation_debounce_ms: u64,
    pub elapsed_tick_ms: u64,
}

impl TimingConfig {
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn focus_indicator(&self) -> Duration {
        Duration::from_millis(self.focus_indicator_ms)
    }

    pub fn orientation_debounce(&self) -> Duration {
        Duration::from_millis(self.orientation_debounce_ms)
    }

    pub fn elapsed_tick(&self) -> Duration {
        Duration::from_millis(self.elapsed_tick_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            settle_ms: timing::SETTLE_DELAY.as_millis() as u64,
            cooldown_ms: timing::COOLDOWN_DELAY.as_millis() as u64,
            focus_indicator_ms: timing::FOCUS_INDICATOR_EXPIRY.as_millis() as u64,
            orientation_debounce_ms: timing::ORIENTATION_DEBOUNCE.as_millis() as u64,
            elapsed_tick_ms: timing::ELAPSED_TICK.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Platform profile (zoom granularity, hardware zoom ceiling)
    pub platform: Platform,
    /// Overrides the platform zoom profile
    pub zoom: Option<ZoomProfile>,
    pub timing: TimingConfig,
    pub footer: FooterMetrics,
    /// Focus indicator edge length in screen points
    pub indicator_size: f32,
    /// Aspect ratio selected at start
    pub aspect_ratio: AspectRatio,
    pub photo: PhotoOptions,
    pub video: RecordOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            zoom: None,
            timing: TimingConfig::default(),
            footer: FooterMetrics {
                width: ui::FOOTER_WIDTH,
                height: ui::FOOTER_HEIGHT,
            },
            indicator_size: ui::TOUCH_INDICATOR_SIZE,
            aspect_ratio: AspectRatio::default(),
            photo: PhotoOptions::default(),
            video: RecordOptions::default(),
        }
    }
}

impl Config {
    /// Config with the given platform profile and defaults elsewhere
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            ..Self::default()
        }
    }

    /// Effective zoom profile
    pub fn zoom_profile(&self) -> ZoomProfile {
        self.zoom.unwrap_or_else(|| self.platform.zoom_profile())
    }

    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Read(e.to_string()))?;
        let config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Write(e.to_string()))?;
        }
        let contents =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Write(e.to_string()))?;
        std::fs::write(path, contents).map_err(|e| ConfigError::Write(e.to_string()))?;
        debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Load from the default location, falling back to defaults
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "Failed to load config, using defaults"
                );
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let zoom = self.zoom_profile();
        if !(zoom.step > 0.0 && zoom.step <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "zoom step must be in (0, 1], got {}",
                zoom.step
            )));
        }
        if !(zoom.threshold > 0.0 && zoom.threshold <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "zoom threshold must be in (0, 1], got {}",
                zoom.threshold
            )));
        }
        if self.footer.width <= 0.0 || self.footer.height <= 0.0 {
            return Err(ConfigError::Invalid("footer dimensions must be positive".into()));
        }
        if self.indicator_size <= 0.0 {
            return Err(ConfigError::Invalid("indicator size must be positive".into()));
        }
        if self.timing.elapsed_tick_ms == 0 {
            return Err(ConfigError::Invalid("elapsed tick must be non-zero".into()));
        }
        if !(0.0..=1.0).contains(&self.photo.quality) {
            return Err(ConfigError::Invalid(format!(
                "photo quality must be in [0, 1], got {}",
                self.photo.quality
            )));
        }
        if self.video.max_duration_secs == 0 || self.video.max_file_size_bytes == 0 {
            return Err(ConfigError::Invalid("video limits must be non-zero".into()));
        }
        Ok(())
    }
}
