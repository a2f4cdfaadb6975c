#![expect(
    clippy::unwrap_used,
    reason = "Test utilities use .unwrap() for brevity"
)]

//! Shared test utilities for `folio` unit tests.
//!
//! This module provides common test infrastructure used across multiple test modules.
//! It is only compiled during testing (`#[cfg(test)]`).

use crate::config::manager::FOLIO_HOME_ENV;
use crate::controller::GalleryItem;
use std::sync::Mutex;
use tempfile::TempDir;

/// Serializes tests that modify `FOLIO_HOME`, since the process environment
/// is shared by every test thread.
static FOLIO_HOME_LOCK: Mutex<()> = Mutex::new(());

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// RAII guard that points `FOLIO_HOME` at a temp directory for one test and
/// restores the previous value when dropped.
///
/// The lock is held for the guard's lifetime, so only one test at a time sees
/// a modified environment. Tests that read `FOLIO_HOME` must take a guard.
pub struct FolioHomeGuard {
    original: Option<String>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only environment mutation serialized by FOLIO_HOME_LOCK"
)]
impl FolioHomeGuard {
    /// Set `FOLIO_HOME` to `temp_dir` until the guard is dropped
    pub fn new(temp_dir: &TempDir) -> Self {
        // A test that panicked while holding the lock leaves it poisoned; the
        // guard's Drop has already restored the variable by then
        let lock = FOLIO_HOME_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let original = std::env::var(FOLIO_HOME_ENV).ok();
        // SAFETY: FOLIO_HOME_LOCK is held, so no other test touches the
        // variable concurrently, and Drop restores the previous value
        unsafe {
            std::env::set_var(FOLIO_HOME_ENV, temp_dir.path());
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only environment mutation serialized by FOLIO_HOME_LOCK"
)]
impl Drop for FolioHomeGuard {
    fn drop(&mut self) {
        // SAFETY: the lock is still held until this guard's fields drop
        unsafe {
            match &self.original {
                Some(value) => std::env::set_var(FOLIO_HOME_ENV, value),
                None => std::env::remove_var(FOLIO_HOME_ENV),
            }
        }
    }
}

/// Build `count` gallery items named `item-0`, `item-1`, ...
pub fn sample_items(count: usize) -> Vec<GalleryItem> {
    (0..count)
        .map(|i| GalleryItem::new(format!("/img/{i}.jpg"), format!("item-{i}")))
        .collect()
}
