//! Typed error variants for the chat-keys-config crate.
//!
//! Public load/save functions return `anyhow::Result`; these variants are
//! what sits underneath, so callers that care can match on them:
//!
//! ```rust,no_run
//! use chat_keys_config::SettingsError;
//!
//! fn check_load_err(e: &anyhow::Error) {
//!     if let Some(err) = e.downcast_ref::<SettingsError>() {
//!         match err {
//!             SettingsError::Io(io) => eprintln!("I/O error: {io}"),
//!             SettingsError::Parse(p) => eprintln!("YAML parse error: {p}"),
//!             SettingsError::Validation(msg) => eprintln!("Validation: {msg}"),
//!         }
//!     }
//! }
//! ```

use thiserror::Error;

/// Errors that can occur when loading, saving or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred reading or writing the settings file.
    #[error("I/O error reading settings: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file contained YAML that could not be parsed.
    #[error("YAML parse error in settings: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string names the offending field and why it is invalid.
    #[error("Settings validation error: {0}")]
    Validation(String),
}
