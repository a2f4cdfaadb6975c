//! Viewport visibility tracking
//!
//! Turns raw intersection ratios (the fraction of an element inside the
//! viewport) into a visible/hidden signal that only reports changes.

use tracing::debug;

/// Fraction of the element that must be on screen to count as visible
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.5;

/// Visibility observer for one element
#[derive(Debug)]
pub struct ViewportObserver {
    threshold: f64,
    visible: bool,
    disconnected: bool,
}

impl ViewportObserver {
    /// Observer with a custom threshold, clamped to `0.0..=1.0`
    ///
    /// A threshold of `0.0` means any part of the element on screen. A NaN
    /// threshold falls back to [`DEFAULT_VISIBILITY_THRESHOLD`].
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_VISIBILITY_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            visible: false,
            disconnected: false,
        }
    }

    /// Report a new intersection ratio
    ///
    /// Returns the new visibility when it changed.
    pub fn observe(&mut self, ratio: f64) -> Option<bool> {
        if self.disconnected {
            return None;
        }
        // A zero ratio is fully off screen even when the threshold is zero
        let visible = if self.threshold > 0.0 {
            ratio >= self.threshold
        } else {
            ratio > 0.0
        };
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        debug!(ratio, visible, "Viewport visibility changed");
        Some(visible)
    }

    /// Last reported visibility
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Stop observing. Idempotent.
    pub fn disconnect(&mut self) {
        self.disconnected = true;
        self.visible = false;
    }
}

impl Default for ViewportObserver {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBILITY_THRESHOLD)
    }
}
