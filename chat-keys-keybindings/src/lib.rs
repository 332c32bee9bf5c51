//! Keybinding system for chat-keys.
//!
//! Decides which action a key press triggers in a given context (e.g. the
//! message composer).
//!
//! Features:
//! - Strict combo matching with a platform-abstracted primary modifier
//!   (Cmd on macOS, Ctrl elsewhere)
//! - Ordered per-context binding lists, rebuilt from live settings on every lookup
//! - Human-readable combo strings (CmdOrCtrl+Enter, Alt+Ctrl+Up, etc.) for
//!   user-defined bindings

pub mod action;
pub mod bindings;
mod combo;
mod event;
pub mod keys;
mod manager;
mod matcher;
pub mod parser;
mod platform;

pub use action::{KeyAction, KeyBindingContext};
pub use bindings::{KeyBinding, check_user_bindings, message_composer_bindings};
pub use combo::KeyCombo;
pub use event::KeyEvent;
pub use manager::{BindingsGetter, KeyBindingsManager};
pub use matcher::{KeyComboMatcher, is_key_combo_match};
pub use parser::{ParseError, parse_key_combo};
pub use platform::{Platform, resolve_primary_modifier};
