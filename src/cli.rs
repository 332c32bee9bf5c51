//! Command-line interface for chat-keys.

use chat_keys_config::LogLevel;
use chat_keys_keybindings::{KeyBindingContext, Platform};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// chat-keys - keyboard shortcut dispatch for chat message composers
#[derive(Parser, Debug)]
#[command(name = "chat-keys")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file (default: ~/.config/chat-keys/settings.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level for the debug log file (overrides RUST_LOG and settings)
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,
}

/// Options shared by every command that resolves keys.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveOptions {
    /// Binding context
    #[arg(long, default_value = "MessageComposer", value_parser = parse_context)]
    pub context: KeyBindingContext,

    /// Primary modifier convention (default: from settings, else build target)
    #[arg(long, value_enum)]
    pub platform: Option<PlatformArg>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a key press such as "Ctrl+Enter" to an action
    Resolve {
        /// Pressed key in combo syntax, e.g. "CmdOrCtrl+Enter" or "Alt+Ctrl+Up"
        keys: String,

        #[command(flatten)]
        options: ResolveOptions,
    },

    /// Print the effective bindings of a context, highest priority first
    Bindings {
        #[command(flatten)]
        options: ResolveOptions,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Load and validate the settings file
    CheckConfig,

    /// Resolve key presses read from stdin, reloading settings as they change
    Watch {
        #[command(flatten)]
        options: ResolveOptions,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformArg {
    /// Primary modifier is Cmd
    Mac,
    /// Primary modifier is Ctrl
    Other,
}

impl From<PlatformArg> for Platform {
    fn from(p: PlatformArg) -> Self {
        match p {
            PlatformArg::Mac => Platform::Mac,
            PlatformArg::Other => Platform::Other,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LogLevel {
    fn from(l: LogLevelArg) -> Self {
        match l {
            LogLevelArg::Off => LogLevel::Off,
            LogLevelArg::Error => LogLevel::Error,
            LogLevelArg::Warn => LogLevel::Warn,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Debug => LogLevel::Debug,
            LogLevelArg::Trace => LogLevel::Trace,
        }
    }
}

fn parse_context(s: &str) -> Result<KeyBindingContext, String> {
    s.parse().map_err(|e| format!("{e}"))
}
