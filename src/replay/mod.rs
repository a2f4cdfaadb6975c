//! Trace replay module
//!
//! Drives both controllers from a recorded list of timestamped inputs on a
//! logical clock. Used by the `folio-replay` binary and by integration tests
//! to check timing contracts end to end without a browser.

pub mod session;
pub mod trace;

pub use session::{Emitted, ReplayRecord, ReplaySession};
pub use trace::{InputEvent, TimedEvent, Trace};
