//! Replay trace format
//!
//! A trace is a JSON document describing a gallery, the scroll offset at mount,
//! and a list of timestamped input events:
//!
//! ```json
//! {
//!   "items": [{ "image": "/rac.jpg", "label": "Festival Crowd" }],
//!   "initial_scroll_y": 0,
//!   "events": [
//!     { "at_ms": 0,   "kind": "viewport", "ratio": 1.0 },
//!     { "at_ms": 10,  "kind": "wheel", "delta_y": 100 },
//!     { "at_ms": 40,  "kind": "scroll", "y": 150 },
//!     { "at_ms": 900, "kind": "tap" },
//!     { "at_ms": 2000, "kind": "unmount" }
//!   ]
//! }
//! ```

use crate::controller::GalleryItem;
use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// One input delivered to the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    /// Wheel tick over the gallery
    Wheel {
        /// Vertical delta; positive scrolls down
        delta_y: f64,
    },
    /// Page scroll offset changed
    Scroll {
        /// New offset from the top in device pixels
        y: f64,
    },
    /// Gallery intersection ratio changed
    Viewport {
        /// Fraction of the gallery on screen
        ratio: f64,
    },
    /// Tap or click on the gallery
    Tap,
    /// The page is torn down
    Unmount,
}

/// Input event with its timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedEvent {
    /// Milliseconds since mount
    pub at_ms: u64,
    /// The input
    #[serde(flatten)]
    pub input: InputEvent,
}

impl TimedEvent {
    /// Timestamp as a `Duration`
    pub fn at(&self) -> Duration {
        Duration::from_millis(self.at_ms)
    }
}

/// Complete replay input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// Gallery contents
    #[serde(default)]
    pub items: Vec<GalleryItem>,
    /// Scroll offset when the header mounts
    #[serde(default)]
    pub initial_scroll_y: f64,
    /// Inputs in chronological order
    #[serde(default)]
    pub events: Vec<TimedEvent>,
}

impl Trace {
    /// Parse and validate a trace document
    pub fn from_json(json: &str) -> Result<Self> {
        let trace: Self = serde_json::from_str(json)?;
        trace.validate()?;
        Ok(trace)
    }

    /// Read and parse a trace file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check chronological order and numeric sanity
    pub fn validate(&self) -> Result<()> {
        if !self.initial_scroll_y.is_finite() {
            return Err(FolioError::InvalidTrace(
                "initial_scroll_y must be a finite number".to_string(),
            ));
        }

        for (index, pair) in self.events.windows(2).enumerate() {
            if pair[1].at_ms < pair[0].at_ms {
                return Err(FolioError::InvalidTrace(format!(
                    "event {} at {} ms precedes event {} at {} ms",
                    index + 1,
                    pair[1].at_ms,
                    index,
                    pair[0].at_ms
                )));
            }
        }

        Ok(())
    }
}
