//! Settings system for chat-keys.
//!
//! This crate provides settings loading, saving, and default values for
//! the shortcut dispatcher. It includes:
//!
//! - The `Settings` struct and its YAML representation
//! - A live `SettingsStore` that hands out lock-free snapshots
//! - The `SettingsLookup` trait consumed by binding resolution
//! - Settings file watching for hot reload

pub mod error;
mod persistence;
pub mod settings;
pub mod store;
mod types;
#[cfg(feature = "watcher")]
pub mod watcher;

pub use error::SettingsError;
pub use settings::Settings;
pub use store::{SettingsLookup, SettingsStore};
pub use types::{LogLevel, MessageComposerSettings, PlatformOverride, UserKeyBinding};
