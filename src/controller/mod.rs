//! Interactive controllers
//!
//! Two independent, single-owner state reducers:
//!
//! - [`PagedGallery`]: featured-work gallery paged by throttled wheel ticks
//!   (pointer devices) or a wrapping auto-advance timer (touch devices)
//! - [`CondensingHeader`]: navbar that condenses and expands with hysteresis
//!
//! # Event Flow
//!
//! ```text
//! wheel / viewport / tap ──► PagedGallery ──► GalleryIntent ──► rendering layer
//!                                 ▲   │
//!                 on_timer(handle)│   │schedule / cancel
//!                                 │   ▼
//!                               Scheduler
//!
//! scroll offset ──► FrameGate ──► CondensingHeader ──► HeaderMode ──► rendering layer
//! ```
//!
//! Neither controller reads a clock, touches the page, or knows about the
//! other. Teardown cancels everything the controller scheduled, and any timer
//! that still reaches it afterwards is ignored.

pub mod gallery;
pub mod header;

pub use gallery::{
    AdvanceMode, DEFAULT_AUTO_ADVANCE_INTERVAL_MS, DEFAULT_PAUSE_COOLDOWN_MS, DEFAULT_THROTTLE_MS,
    Direction, GalleryIntent, GalleryIntents, GalleryItem, PagedGallery, WheelOutcome,
};
pub use header::{
    CondensingHeader, DEFAULT_CONDENSE_THRESHOLD, DEFAULT_EXPAND_THRESHOLD, HeaderMode, HeaderState,
    HeaderThresholds,
};
