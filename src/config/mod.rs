//! Configuration management module
//!
//! This module handles loading, saving, and validating the tuning values for
//! the gallery and header controllers. Configuration is stored as JSON with
//! atomic writes to prevent corruption.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{DeviceClass, FolioConfig, GallerySettings, HeaderSettings, LoggingSettings};
