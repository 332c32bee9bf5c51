//! Binding lists per context.
//!
//! Lists are built from a settings snapshot on demand and never cached, so
//! a settings change shows up on the very next lookup.

use crate::action::{KeyAction, KeyBindingContext};
use crate::combo::KeyCombo;
use crate::keys::{ARROW_DOWN, ARROW_UP, ENTER, ESCAPE};
use crate::parser::{ParseError, parse_key_combo};
use chat_keys_config::{Settings, SettingsLookup, UserKeyBinding};
use serde::Serialize;

/// One action bound to one key combo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub action: KeyAction,
    pub combo: KeyCombo,
}

impl KeyBinding {
    pub fn new(action: KeyAction, combo: KeyCombo) -> Self {
        Self { action, combo }
    }
}

impl Serialize for KeyBinding {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("KeyBinding", 2)?;
        s.serialize_field("action", &self.action)?;
        s.serialize_field("key", &self.combo.to_string())?;
        s.end()
    }
}

/// Bindings for the message composer, highest priority first.
pub fn message_composer_bindings(settings: &Settings) -> Vec<KeyBinding> {
    let mut bindings = vec![
        KeyBinding::new(
            KeyAction::SelectPrevSendHistory,
            KeyCombo::key(ARROW_UP).with_alt().with_ctrl(),
        ),
        KeyBinding::new(
            KeyAction::SelectNextSendHistory,
            KeyCombo::key(ARROW_DOWN).with_alt().with_ctrl(),
        ),
        KeyBinding::new(KeyAction::EditPrevMessage, KeyCombo::key(ARROW_UP)),
        KeyBinding::new(KeyAction::EditNextMessage, KeyCombo::key(ARROW_DOWN)),
        KeyBinding::new(KeyAction::CancelEditing, KeyCombo::key(ESCAPE)),
    ];

    let send = if settings.ctrl_enter_to_send() {
        KeyCombo::key(ENTER).with_primary_modifier()
    } else {
        KeyCombo::key(ENTER)
    };
    bindings.push(KeyBinding::new(KeyAction::Send, send));

    bindings
}

/// Resolve one user binding from settings.
pub fn resolve_user_binding(
    kb: &UserKeyBinding,
) -> Result<(KeyBindingContext, KeyBinding), ParseError> {
    let context: KeyBindingContext = kb.context.parse()?;
    let action: KeyAction = kb.action.parse()?;
    let combo = parse_key_combo(&kb.key)?;
    Ok((context, KeyBinding::new(action, combo)))
}

/// Valid user bindings for `context`, in declaration order.
///
/// Invalid entries are skipped; `check_user_bindings` reports them.
pub fn user_bindings(settings: &Settings, context: KeyBindingContext) -> Vec<KeyBinding> {
    settings
        .keybindings
        .iter()
        .filter_map(|kb| match resolve_user_binding(kb) {
            Ok((ctx, binding)) if ctx == context => Some(binding),
            Ok(_) => None,
            Err(e) => {
                log::trace!("Skipping user keybinding '{}' -> '{}': {}", kb.key, kb.action, e);
                None
            }
        })
        .collect()
}

/// Describe every user binding that cannot be resolved.
///
/// Each entry is `(index, error)` with `index` into `settings.keybindings`.
pub fn check_user_bindings(settings: &Settings) -> Vec<(usize, ParseError)> {
    settings
        .keybindings
        .iter()
        .enumerate()
        .filter_map(|(i, kb)| resolve_user_binding(kb).err().map(|e| (i, e)))
        .collect()
}
