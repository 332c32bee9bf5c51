//! Action and context identifiers.

use crate::parser::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Something a key binding can trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum KeyAction {
    /// No binding matched
    #[default]
    None,

    // Message composer actions
    /// Send a message
    Send,
    /// Go backwards through the send history and load the entry into the composer
    SelectPrevSendHistory,
    /// Go forwards through the send history
    SelectNextSendHistory,
    /// Start editing the user's last sent message
    EditPrevMessage,
    /// Start editing the user's next sent message
    EditNextMessage,
    /// Cancel editing a message or cancel replying to a message
    CancelEditing,
}

impl KeyAction {
    /// All actions, the `None` sentinel included.
    pub fn all() -> &'static [KeyAction] {
        &[
            KeyAction::None,
            KeyAction::Send,
            KeyAction::SelectPrevSendHistory,
            KeyAction::SelectNextSendHistory,
            KeyAction::EditPrevMessage,
            KeyAction::EditNextMessage,
            KeyAction::CancelEditing,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            KeyAction::None => "None",
            KeyAction::Send => "Send",
            KeyAction::SelectPrevSendHistory => "SelectPrevSendHistory",
            KeyAction::SelectNextSendHistory => "SelectNextSendHistory",
            KeyAction::EditPrevMessage => "EditPrevMessage",
            KeyAction::EditNextMessage => "EditNextMessage",
            KeyAction::CancelEditing => "CancelEditing",
        }
    }

    pub fn is_none(self) -> bool {
        self == KeyAction::None
    }
}

impl fmt::Display for KeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyAction {
    type Err = ParseError;

    /// Case-insensitive. `None` is accepted: a user binding to it shadows,
    /// and so disables, a built-in combo.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        KeyAction::all()
            .iter()
            .copied()
            .find(|a| a.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownAction(s.to_string()))
    }
}

/// A named scope owning its own ordered binding list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum KeyBindingContext {
    /// Key bindings for the chat message composer
    MessageComposer,
}

impl KeyBindingContext {
    pub fn all() -> &'static [KeyBindingContext] {
        &[KeyBindingContext::MessageComposer]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            KeyBindingContext::MessageComposer => "MessageComposer",
        }
    }
}

impl fmt::Display for KeyBindingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyBindingContext {
    type Err = ParseError;

    /// Case-insensitive; dashes and underscores are ignored so CLI-style
    /// `message-composer` works too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();
        KeyBindingContext::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ParseError::UnknownContext(s.to_string()))
    }
}
