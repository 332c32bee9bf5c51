//! Key events as observed by the host.

use crate::combo::KeyCombo;
use crate::platform::{Platform, resolve_primary_modifier};

/// A key press: the logical key plus the raw modifier state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyEvent {
    /// W3C key name, e.g. "Enter", "ArrowUp", "a"
    pub key: String,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyEvent {
    /// A press of `key` with no modifiers held.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Synthesize the event a user would produce by pressing `combo` on
    /// `platform`.
    ///
    /// Returns `None` for combos without a key, since there is nothing to
    /// press.
    pub fn from_combo(combo: &KeyCombo, platform: Platform) -> Option<Self> {
        let key = combo.key_name()?;
        let (ctrl, meta) =
            resolve_primary_modifier(platform, combo.primary_modifier, combo.ctrl, combo.meta);
        Some(Self {
            key: key.to_string(),
            alt: combo.alt,
            ctrl,
            meta,
            shift: combo.shift,
        })
    }
}

#[cfg(feature = "winit")]
mod winit_adapter {
    use super::KeyEvent;
    use crate::keys::{
        ARROW_DOWN, ARROW_LEFT, ARROW_RIGHT, ARROW_UP, BACKSPACE, DELETE, END, ENTER, ESCAPE,
        HOME, INSERT, PAGE_DOWN, PAGE_UP, SPACE, TAB,
    };
    use winit::event::{KeyEvent as WinitKeyEvent, Modifiers as WinitModifiers};
    use winit::keyboard::{Key, NamedKey};

    impl KeyEvent {
        /// Convert a winit key event.
        pub fn from_winit(event: &WinitKeyEvent, modifiers: &WinitModifiers) -> Self {
            let state = modifiers.state();
            Self {
                key: w3c_key_name(&event.logical_key),
                alt: state.alt_key(),
                ctrl: state.control_key(),
                meta: state.super_key(),
                shift: state.shift_key(),
            }
        }
    }

    /// W3C `KeyboardEvent.key` value for a winit logical key.
    ///
    /// Every key this crate can bind is spelled out. Other named keys fall
    /// back to the variant name, which winit takes from the W3C list.
    pub(crate) fn w3c_key_name(key: &Key) -> String {
        let named = match key {
            Key::Character(c) => return c.to_string(),
            Key::Dead(_) => return "Dead".to_string(),
            Key::Unidentified(_) => return "Unidentified".to_string(),
            Key::Named(named) => named,
        };

        let name = match named {
            NamedKey::Enter => ENTER,
            NamedKey::Escape => ESCAPE,
            NamedKey::Space => SPACE,
            NamedKey::Tab => TAB,
            NamedKey::Backspace => BACKSPACE,
            NamedKey::Delete => DELETE,
            NamedKey::Insert => INSERT,
            NamedKey::Home => HOME,
            NamedKey::End => END,
            NamedKey::PageUp => PAGE_UP,
            NamedKey::PageDown => PAGE_DOWN,
            NamedKey::ArrowUp => ARROW_UP,
            NamedKey::ArrowDown => ARROW_DOWN,
            NamedKey::ArrowLeft => ARROW_LEFT,
            NamedKey::ArrowRight => ARROW_RIGHT,
            NamedKey::F1 => "F1",
            NamedKey::F2 => "F2",
            NamedKey::F3 => "F3",
            NamedKey::F4 => "F4",
            NamedKey::F5 => "F5",
            NamedKey::F6 => "F6",
            NamedKey::F7 => "F7",
            NamedKey::F8 => "F8",
            NamedKey::F9 => "F9",
            NamedKey::F10 => "F10",
            NamedKey::F11 => "F11",
            NamedKey::F12 => "F12",
            NamedKey::Alt => "Alt",
            NamedKey::Control => "Control",
            NamedKey::Shift => "Shift",
            // Cmd / Windows key; browsers report it as Meta
            NamedKey::Super | NamedKey::Meta => "Meta",
            other => return format!("{other:?}"),
        };
        name.to_string()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use winit::keyboard::{NativeKey, SmolStr};

        #[test]
        fn test_named_keys_use_w3c_names() {
            assert_eq!(w3c_key_name(&Key::Named(NamedKey::Enter)), ENTER);
            assert_eq!(w3c_key_name(&Key::Named(NamedKey::Escape)), ESCAPE);
            assert_eq!(w3c_key_name(&Key::Named(NamedKey::ArrowUp)), ARROW_UP);
            assert_eq!(w3c_key_name(&Key::Named(NamedKey::PageDown)), PAGE_DOWN);
            assert_eq!(w3c_key_name(&Key::Named(NamedKey::F12)), "F12");
        }

        #[test]
        fn test_divergent_winit_names() {
            assert_eq!(w3c_key_name(&Key::Named(NamedKey::Space)), " ");
            assert_eq!(w3c_key_name(&Key::Named(NamedKey::Super)), "Meta");
            assert_eq!(w3c_key_name(&Key::Named(NamedKey::Meta)), "Meta");
            assert_eq!(w3c_key_name(&Key::Dead(Some('`'))), "Dead");
            assert_eq!(w3c_key_name(&Key::Dead(None)), "Dead");
            assert_eq!(
                w3c_key_name(&Key::Unidentified(NativeKey::Unidentified)),
                "Unidentified"
            );
        }

        #[test]
        fn test_characters_keep_case() {
            assert_eq!(w3c_key_name(&Key::Character(SmolStr::new("a"))), "a");
            assert_eq!(w3c_key_name(&Key::Character(SmolStr::new("A"))), "A");
        }

        #[test]
        fn test_long_tail_named_keys() {
            assert_eq!(w3c_key_name(&Key::Named(NamedKey::F13)), "F13");
            assert_eq!(
                w3c_key_name(&Key::Named(NamedKey::MediaPlayPause)),
                "MediaPlayPause"
            );
        }
    }
}
