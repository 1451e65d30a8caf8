//! Configuration module for Spendbook
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SpendbookPaths;
pub use settings::Settings;
