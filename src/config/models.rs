//! Configuration data models
//!
//! Every timing constant and threshold the controllers use lives here so that
//! different page layouts can tune them without touching controller code.

use crate::controller::{
    DEFAULT_AUTO_ADVANCE_INTERVAL_MS, DEFAULT_CONDENSE_THRESHOLD, DEFAULT_EXPAND_THRESHOLD,
    DEFAULT_PAUSE_COOLDOWN_MS, DEFAULT_THROTTLE_MS,
};
use crate::error::{FolioError, Result};
use crate::monitor::DEFAULT_FRAME_INTERVAL_MS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Input capability of the device the page is rendered on
///
/// Supplied by the host instead of probed from the environment, so controller
/// behaviour stays the same under test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    /// Mouse or trackpad: the gallery pages on wheel ticks
    #[default]
    Pointer,
    /// Touch screen: the gallery advances on a timer and pauses on tap
    Touch,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Featured-work gallery tuning
    pub gallery: GallerySettings,
    /// Navbar tuning
    pub header: HeaderSettings,
    /// Log output
    pub logging: LoggingSettings,
}

/// Gallery timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GallerySettings {
    /// Throttle window after an accepted wheel tick, in milliseconds
    pub throttle_ms: u64,
    /// Auto-advance period, in milliseconds
    pub auto_advance_interval_ms: u64,
    /// How long a tap pauses auto-advance, in milliseconds
    pub pause_cooldown_ms: u64,
    /// Input capability used to pick the advance mode
    pub device: DeviceClass,
}

/// Header hysteresis band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderSettings {
    /// Downward scrolls past this offset condense the header
    pub condense_threshold: f64,
    /// Upward scrolls above this offset expand the header
    pub expand_threshold: f64,
    /// Length of one animation frame, in milliseconds
    pub frame_interval_ms: u64,
}

/// Log output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Write logs to `<log_dir>/folio.log` instead of stderr
    pub log_dir: Option<PathBuf>,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            throttle_ms: DEFAULT_THROTTLE_MS,
            auto_advance_interval_ms: DEFAULT_AUTO_ADVANCE_INTERVAL_MS,
            pause_cooldown_ms: DEFAULT_PAUSE_COOLDOWN_MS,
            device: DeviceClass::Pointer,
        }
    }
}

impl Default for HeaderSettings {
    fn default() -> Self {
        Self {
            condense_threshold: DEFAULT_CONDENSE_THRESHOLD,
            expand_threshold: DEFAULT_EXPAND_THRESHOLD,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl GallerySettings {
    /// Throttle window as a `Duration`
    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }

    /// Auto-advance period as a `Duration`
    pub fn auto_advance_interval(&self) -> Duration {
        Duration::from_millis(self.auto_advance_interval_ms)
    }

    /// Tap pause as a `Duration`
    pub fn pause_cooldown(&self) -> Duration {
        Duration::from_millis(self.pause_cooldown_ms)
    }
}

impl HeaderSettings {
    /// Frame length as a `Duration`
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

impl FolioConfig {
    /// Reject values the controllers cannot run with
    pub fn validate(&self) -> Result<()> {
        let durations = [
            ("gallery.throttle_ms", self.gallery.throttle_ms),
            (
                "gallery.auto_advance_interval_ms",
                self.gallery.auto_advance_interval_ms,
            ),
            ("gallery.pause_cooldown_ms", self.gallery.pause_cooldown_ms),
            ("header.frame_interval_ms", self.header.frame_interval_ms),
        ];
        if let Some((field, _)) = durations.iter().find(|(_, ms)| *ms == 0) {
            return Err(FolioError::InvalidDuration(*field));
        }

        let HeaderSettings {
            condense_threshold: condense,
            expand_threshold: expand,
            ..
        } = self.header;
        if !condense.is_finite() || !expand.is_finite() || expand >= condense {
            return Err(FolioError::InvalidThresholds { expand, condense });
        }

        Ok(())
    }
}
