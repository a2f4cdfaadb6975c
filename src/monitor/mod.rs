//! Input observation module
//!
//! Adapters that sit between raw page signals and the controllers:
//!
//! - [`FrameGate`]: coalesces high-frequency scroll notifications into one
//!   sample per animation frame before they reach the header reducer
//! - [`ViewportObserver`]: converts intersection ratios into a visible/hidden
//!   signal for the gallery
//!
//! Both own at most one pending resource and release it on close/disconnect;
//! closing twice is a no-op.

pub mod frame_gate;
pub mod viewport;

pub use frame_gate::{DEFAULT_FRAME_INTERVAL_MS, FrameGate};
pub use viewport::{DEFAULT_VISIBILITY_THRESHOLD, ViewportObserver};
