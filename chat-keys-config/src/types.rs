//! Leaf types used by the `Settings` struct.

use serde::{Deserialize, Serialize};

/// A user-defined keybinding from settings.yaml.
///
/// All three fields are kept as strings here; the keybindings crate
/// resolves them and skips (with a warning) anything it cannot understand.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserKeyBinding {
    /// Context name, e.g. "MessageComposer"
    pub context: String,
    /// Action name, e.g. "Send"
    pub action: String,
    /// Key combination string, e.g. "CmdOrCtrl+Enter"
    pub key: String,
}

/// Settings for the message composer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MessageComposerSettings {
    /// Send with CmdOrCtrl+Enter instead of plain Enter
    pub ctrl_enter_to_send: bool,
}

/// Which platform convention to use for the primary modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlatformOverride {
    /// Detect from the build target
    #[default]
    Auto,
    /// Primary modifier is Cmd (meta)
    Mac,
    /// Primary modifier is Ctrl
    Other,
}

/// Log level for the debug log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging (log file not created)
    #[default]
    Off,
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Most verbose
    Trace,
}

impl LogLevel {
    /// All available levels, lowest verbosity first
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Off,
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ]
    }

    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
