//! Condensing header controller
//!
//! Derives a two-state display mode from the page scroll offset. Two separate
//! thresholds form a hysteresis band so the header does not flap when the
//! offset hovers around a single boundary:
//!
//! ```text
//!            y > last && y > condense
//!  Expanded ───────────────────────────► Condensed
//!     ▲                                      │
//!     └──────────────────────────────────────┘
//!            y < last && y < expand
//! ```
//!
//! Every other input is a self-loop. `last` is updated on every call.

use crate::config::HeaderSettings;
use crate::error::{FolioError, Result};
use tracing::{debug, info};
use uuid::Uuid;

/// Default offset above which a downward scroll condenses the header
pub const DEFAULT_CONDENSE_THRESHOLD: f64 = 120.0;

/// Default offset below which an upward scroll expands the header
pub const DEFAULT_EXPAND_THRESHOLD: f64 = 40.0;

/// Validated hysteresis band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderThresholds {
    condense: f64,
    expand: f64,
}

impl HeaderThresholds {
    /// Build a band; `expand` must be strictly below `condense` and both finite
    pub fn new(condense: f64, expand: f64) -> Result<Self> {
        if !condense.is_finite() || !expand.is_finite() || expand >= condense {
            return Err(FolioError::InvalidThresholds { expand, condense });
        }
        Ok(Self { condense, expand })
    }

    /// Condense threshold
    pub fn condense(&self) -> f64 {
        self.condense
    }

    /// Expand threshold
    pub fn expand(&self) -> f64 {
        self.expand
    }
}

impl Default for HeaderThresholds {
    fn default() -> Self {
        Self {
            condense: DEFAULT_CONDENSE_THRESHOLD,
            expand: DEFAULT_EXPAND_THRESHOLD,
        }
    }
}

impl TryFrom<&HeaderSettings> for HeaderThresholds {
    type Error = FolioError;

    fn try_from(settings: &HeaderSettings) -> Result<Self> {
        Self::new(settings.condense_threshold, settings.expand_threshold)
    }
}

/// Display mode of the header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderMode {
    /// Full header: logo, name and navigation links
    #[default]
    Expanded,
    /// Compact pill: logo and availability badge
    Condensed,
}

/// Snapshot of the header reducer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderState {
    /// Current display mode
    pub mode: HeaderMode,
    /// Offset seen by the previous call
    pub last_scroll_y: f64,
}

impl HeaderState {
    /// Expanded state anchored at the offset observed on mount
    pub fn new(initial_scroll_y: f64) -> Self {
        Self {
            mode: HeaderMode::Expanded,
            last_scroll_y: initial_scroll_y,
        }
    }

    /// Whether the header is condensed
    pub fn is_condensed(&self) -> bool {
        self.mode == HeaderMode::Condensed
    }

    /// Apply one scroll observation
    ///
    /// Pure and idempotent for a repeated offset: a second call with the same
    /// `y` is neither "down" nor "up" past a threshold, so the mode holds.
    #[must_use]
    pub fn reduce(self, y: f64, thresholds: &HeaderThresholds) -> Self {
        let going_down = y > self.last_scroll_y;
        let going_up = y < self.last_scroll_y;

        let mode = if going_down && y > thresholds.condense {
            HeaderMode::Condensed
        } else if going_up && y < thresholds.expand {
            HeaderMode::Expanded
        } else {
            self.mode
        };

        Self {
            mode,
            last_scroll_y: y,
        }
    }
}

/// Header controller owning one scroll subscription
#[derive(Debug)]
pub struct CondensingHeader {
    id: Uuid,
    thresholds: HeaderThresholds,
    state: HeaderState,
    detached: bool,
}

impl CondensingHeader {
    /// Mount the header at the current scroll offset
    pub fn new(thresholds: HeaderThresholds, initial_scroll_y: f64) -> Self {
        let id = Uuid::new_v4();
        let initial = if initial_scroll_y.is_finite() {
            initial_scroll_y
        } else {
            0.0
        };
        info!(
            header = %id,
            condense = thresholds.condense,
            expand = thresholds.expand,
            "Header mounted at offset {}",
            initial
        );
        Self {
            id,
            thresholds,
            state: HeaderState::new(initial),
            detached: false,
        }
    }

    /// Feed a scroll offset; returns the new mode when it changed
    ///
    /// Ignored after [`CondensingHeader::detach`] and for non-finite offsets.
    pub fn on_scroll(&mut self, y: f64) -> Option<HeaderMode> {
        if self.detached {
            return None;
        }
        if !y.is_finite() {
            debug!(header = %self.id, "Ignoring non-finite scroll offset");
            return None;
        }

        let previous = self.state.mode;
        self.state = self.state.reduce(y, &self.thresholds);
        if self.state.mode == previous {
            return None;
        }

        debug!(header = %self.id, y, mode = ?self.state.mode, "Header mode changed");
        Some(self.state.mode)
    }

    /// Whether the header is condensed
    pub fn is_condensed(&self) -> bool {
        self.state.is_condensed()
    }

    /// Current display mode
    pub fn mode(&self) -> HeaderMode {
        self.state.mode
    }

    /// Current reducer state
    pub fn state(&self) -> HeaderState {
        self.state
    }

    /// Band in use
    pub fn thresholds(&self) -> HeaderThresholds {
        self.thresholds
    }

    /// Remove the scroll subscription
    ///
    /// Returns `true` on the first call only.
    pub fn detach(&mut self) -> bool {
        if self.detached {
            return false;
        }
        self.detached = true;
        info!(header = %self.id, "Header scroll listener removed");
        true
    }

    /// Whether the scroll subscription was removed
    pub fn is_detached(&self) -> bool {
        self.detached
    }
}
