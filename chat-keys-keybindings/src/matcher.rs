//! Key event matching.
//!
//! Matches `KeyEvent`s against `KeyCombo`s. Matching is strict: a modifier
//! the combo does not ask for must not be held.

use crate::combo::KeyCombo;
use crate::event::KeyEvent;
use crate::platform::{Platform, resolve_primary_modifier};

/// Matcher for comparing one key event against any number of combos.
#[derive(Debug, Clone, Copy)]
pub struct KeyComboMatcher<'a> {
    event: &'a KeyEvent,
    platform: Platform,
}

impl<'a> KeyComboMatcher<'a> {
    pub fn new(event: &'a KeyEvent, platform: Platform) -> Self {
        Self { event, platform }
    }

    /// Check if the event satisfies `combo`.
    pub fn matches(&self, combo: &KeyCombo) -> bool {
        // Key first (quick rejection)
        if let Some(key) = combo.key_name()
            && self.event.key != key
        {
            return false;
        }

        self.modifiers_match(combo)
    }

    /// Check modifiers, resolving the primary modifier for the platform.
    fn modifiers_match(&self, combo: &KeyCombo) -> bool {
        let (expected_ctrl, expected_meta) =
            resolve_primary_modifier(self.platform, combo.primary_modifier, combo.ctrl, combo.meta);

        self.event.ctrl == expected_ctrl
            && self.event.meta == expected_meta
            && self.event.alt == combo.alt
            && self.event.shift == combo.shift
    }
}

/// Check if `event` satisfies `combo` under `platform`'s modifier convention.
pub fn is_key_combo_match(event: &KeyEvent, combo: &KeyCombo, platform: Platform) -> bool {
    KeyComboMatcher::new(event, platform).matches(combo)
}
