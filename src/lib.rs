//! `folio` - Scroll-driven controllers for a portfolio site
//!
//! Two independent state reducers power the interactive parts of the site:
//! `PagedGallery` pages the featured-work images on throttled wheel ticks or a
//! wrapping auto-advance timer, and `CondensingHeader` condenses the navbar
//! with hysteresis as the page scrolls. Timers are requested through a
//! `Scheduler` so the timing contracts can be exercised on a logical clock.
//!
//! # Layout
//!
//! - [`controller`]: the gallery and header reducers
//! - [`scheduler`]: cancelable timer handles and a logical-clock scheduler
//! - [`monitor`]: frame coalescing and viewport visibility adapters
//! - [`replay`]: trace-driven session used by the `folio-replay` binary
//! - [`config`]: tunable thresholds and durations, persisted as JSON

// Module declarations
pub mod config;
pub mod controller;
pub mod error;
pub mod monitor;
pub mod replay;
pub mod scheduler;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use error::{FolioError, Result};
