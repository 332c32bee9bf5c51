//! Declarative key combinations.

use crate::keys::display_key_name;
use std::borrow::Cow;
use std::fmt;

/// A key combination: an optional key plus required modifier state.
///
/// The combo is evaluated strictly: every modifier flag that is not set
/// must be *released* in the event, not merely ignored. A combo without a
/// key matches any key.
///
/// `primary_modifier` stands in for Cmd on macOS and Ctrl elsewhere. A combo
/// with it set leaves the stood-in modifier to the matcher; the parser
/// refuses to build combos that also set `ctrl` or `meta` alongside it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// W3C key name; `None` matches any key
    pub key: Option<Cow<'static, str>>,
    /// CmdOrCtrl: Cmd on macOS, Ctrl elsewhere
    pub primary_modifier: bool,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyCombo {
    /// A combo with no key constraint and no modifiers.
    pub const fn any() -> Self {
        Self {
            key: None,
            primary_modifier: false,
            alt: false,
            ctrl: false,
            meta: false,
            shift: false,
        }
    }

    /// A combo for a single key with no modifiers.
    pub const fn key(key: &'static str) -> Self {
        Self {
            key: Some(Cow::Borrowed(key)),
            primary_modifier: false,
            alt: false,
            ctrl: false,
            meta: false,
            shift: false,
        }
    }

    /// A combo for a key name only known at runtime.
    pub fn key_owned(key: impl Into<String>) -> Self {
        Self {
            key: Some(Cow::Owned(key.into())),
            ..Self::any()
        }
    }

    pub const fn with_primary_modifier(mut self) -> Self {
        self.primary_modifier = true;
        self
    }

    pub const fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub const fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub const fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub const fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// The key constraint, if any.
    pub fn key_name(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// True if no modifier of any kind is required.
    pub fn has_no_modifiers(&self) -> bool {
        !(self.primary_modifier || self.alt || self.ctrl || self.meta || self.shift)
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<&str> = Vec::new();

        if self.primary_modifier {
            parts.push("CmdOrCtrl");
        }
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.alt {
            parts.push("Alt");
        }
        if self.shift {
            parts.push("Shift");
        }
        if self.meta {
            parts.push("Meta");
        }

        match self.key_name() {
            Some(key) => parts.push(display_key_name(key)),
            None if parts.is_empty() => parts.push("Any"),
            None => parts.push("*"),
        }

        write!(f, "{}", parts.join("+"))
    }
}
