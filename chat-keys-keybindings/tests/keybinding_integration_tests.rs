//! Integration tests for chat-keys-keybindings.
//!
//! These tests exercise the settings → binding list → lookup pipeline
//! through the public API only.

use chat_keys_config::{PlatformOverride, Settings, SettingsLookup, SettingsStore, UserKeyBinding};
use chat_keys_keybindings::{
    KeyAction, KeyBinding, KeyBindingContext, KeyBindingsManager, KeyCombo, KeyEvent, Platform,
    is_key_combo_match, keys, parse_key_combo,
};
use std::sync::Arc;

const CTX: KeyBindingContext = KeyBindingContext::MessageComposer;

fn new_manager(store: &Arc<SettingsStore>) -> KeyBindingsManager {
    let lookup: Arc<dyn SettingsLookup> = store.clone();
    KeyBindingsManager::new(lookup)
}

// ---------------------------------------------------------------------------
// Matcher properties
// ---------------------------------------------------------------------------

#[test]
fn bare_combo_matches_only_unmodified_events() {
    let combo = KeyCombo::any();
    let events = [
        (KeyEvent::new("q"), true),
        (KeyEvent::new(keys::TAB), true),
        (KeyEvent::new("q").with_alt(), false),
        (KeyEvent::new("q").with_ctrl(), false),
        (KeyEvent::new("q").with_meta(), false),
        (KeyEvent::new("q").with_shift(), false),
    ];
    for platform in [Platform::Mac, Platform::Other] {
        for (event, expected) in &events {
            assert_eq!(
                is_key_combo_match(event, &combo, platform),
                *expected,
                "{event:?} on {platform:?}"
            );
        }
    }
}

#[test]
fn primary_enter_on_mac() {
    let combo = parse_key_combo("CmdOrCtrl+Enter").unwrap();
    assert!(is_key_combo_match(
        &KeyEvent::new(keys::ENTER).with_meta(),
        &combo,
        Platform::Mac
    ));
    assert!(!is_key_combo_match(
        &KeyEvent::new(keys::ENTER).with_meta().with_ctrl(),
        &combo,
        Platform::Mac
    ));
}

#[test]
fn primary_enter_on_ctrl_platform() {
    let combo = parse_key_combo("CmdOrCtrl+Enter").unwrap();
    assert!(is_key_combo_match(
        &KeyEvent::new(keys::ENTER).with_ctrl(),
        &combo,
        Platform::Other
    ));
    assert!(!is_key_combo_match(
        &KeyEvent::new(keys::ENTER).with_meta(),
        &combo,
        Platform::Other
    ));
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

#[test]
fn default_message_composer_actions() {
    let store = Arc::new(SettingsStore::default());
    let manager = new_manager(&store).with_platform(Platform::Other);

    let cases = [
        (KeyEvent::new(keys::ARROW_UP).with_alt().with_ctrl(), KeyAction::SelectPrevSendHistory),
        (KeyEvent::new(keys::ARROW_DOWN).with_alt().with_ctrl(), KeyAction::SelectNextSendHistory),
        (KeyEvent::new(keys::ARROW_UP), KeyAction::EditPrevMessage),
        (KeyEvent::new(keys::ARROW_DOWN), KeyAction::EditNextMessage),
        (KeyEvent::new(keys::ESCAPE), KeyAction::CancelEditing),
        (KeyEvent::new(keys::ENTER), KeyAction::Send),
        (KeyEvent::new(keys::ENTER).with_shift(), KeyAction::None),
        (KeyEvent::new("a"), KeyAction::None),
    ];
    for (event, expected) in cases {
        assert_eq!(manager.get_action(CTX, &event), expected, "{event:?}");
    }
}

#[test]
fn earlier_binding_shadows_later_one() {
    let mut manager = KeyBindingsManager::empty(Arc::new(Settings::default()))
        .with_platform(Platform::Mac);
    manager.register_context(CTX, |_| {
        vec![
            KeyBinding::new(KeyAction::EditPrevMessage, KeyCombo::key(keys::ARROW_UP)),
            KeyBinding::new(KeyAction::SelectPrevSendHistory, KeyCombo::key(keys::ARROW_UP)),
        ]
    });

    assert_eq!(
        manager.get_action(CTX, &KeyEvent::new(keys::ARROW_UP)),
        KeyAction::EditPrevMessage
    );
}

#[test]
fn toggling_send_setting_takes_effect_on_next_lookup() {
    let store = Arc::new(SettingsStore::default());
    let manager = new_manager(&store).with_platform(Platform::Other);
    let enter = KeyEvent::new(keys::ENTER);
    let ctrl_enter = KeyEvent::new(keys::ENTER).with_ctrl();

    assert_eq!(manager.get_action(CTX, &enter), KeyAction::Send);
    assert_eq!(manager.get_action(CTX, &ctrl_enter), KeyAction::None);

    store.update(|s| s.message_composer.ctrl_enter_to_send = true);
    assert_eq!(manager.get_action(CTX, &enter), KeyAction::None);
    assert_eq!(manager.get_action(CTX, &ctrl_enter), KeyAction::Send);

    store.update(|s| s.message_composer.ctrl_enter_to_send = false);
    assert_eq!(manager.get_action(CTX, &enter), KeyAction::Send);
}

#[test]
fn bindings_for_reflects_settings() {
    let store = Arc::new(SettingsStore::default());
    let manager = new_manager(&store);

    let send_key = |m: &KeyBindingsManager| {
        m.bindings_for(CTX)
            .unwrap()
            .into_iter()
            .find(|b| b.action == KeyAction::Send)
            .unwrap()
            .combo
            .to_string()
    };

    assert_eq!(send_key(&manager), "Enter");
    store.update(|s| s.message_composer.ctrl_enter_to_send = true);
    assert_eq!(send_key(&manager), "CmdOrCtrl+Enter");
}

#[test]
fn settings_platform_override_drives_primary_modifier() {
    let store = Arc::new(SettingsStore::default());
    store.update(|s| {
        s.message_composer.ctrl_enter_to_send = true;
        s.platform = PlatformOverride::Mac;
    });
    let manager = new_manager(&store);
    let cmd_enter = KeyEvent::new(keys::ENTER).with_meta();
    let ctrl_enter = KeyEvent::new(keys::ENTER).with_ctrl();

    assert_eq!(manager.get_action(CTX, &cmd_enter), KeyAction::Send);
    assert_eq!(manager.get_action(CTX, &ctrl_enter), KeyAction::None);

    store.update(|s| s.platform = PlatformOverride::Other);
    assert_eq!(manager.get_action(CTX, &cmd_enter), KeyAction::None);
    assert_eq!(manager.get_action(CTX, &ctrl_enter), KeyAction::Send);
}

#[test]
fn user_binding_overrides_and_invalid_ones_are_ignored() {
    let store = Arc::new(SettingsStore::default());
    store.update(|s| {
        s.keybindings = vec![
            UserKeyBinding {
                context: "MessageComposer".to_string(),
                action: "Send".to_string(),
                key: "CmdOrCtrl+Ctrl+Enter".to_string(), // invalid: conflict
            },
            UserKeyBinding {
                context: "MessageComposer".to_string(),
                action: "Send".to_string(),
                key: "Shift+Enter".to_string(),
            },
        ];
    });
    let manager = new_manager(&store).with_platform(Platform::Other);

    assert_eq!(
        manager.get_action(CTX, &KeyEvent::new(keys::ENTER).with_shift()),
        KeyAction::Send
    );
    // Built-ins still active
    assert_eq!(
        manager.get_action(CTX, &KeyEvent::new(keys::ESCAPE)),
        KeyAction::CancelEditing
    );
    assert_eq!(manager.bindings_for(CTX).unwrap().len(), 7);
}

#[test]
fn synthesized_events_resolve_to_their_binding() {
    let store = Arc::new(SettingsStore::default());
    store.update(|s| s.message_composer.ctrl_enter_to_send = true);

    for platform in [Platform::Mac, Platform::Other] {
        let manager = new_manager(&store).with_platform(platform);
        for binding in manager.bindings_for(CTX).unwrap() {
            let event = KeyEvent::from_combo(&binding.combo, platform).unwrap();
            assert_eq!(manager.get_action(CTX, &event), binding.action, "{event:?}");
        }
    }
}

#[test]
fn bindings_serialize_as_action_and_key_string() {
    let bindings = chat_keys_keybindings::message_composer_bindings(&Settings::default());
    let json = serde_json::to_value(&bindings).unwrap();
    assert_eq!(json[0]["action"], "SelectPrevSendHistory");
    assert_eq!(json[0]["key"], "Ctrl+Alt+ArrowUp");
    assert_eq!(json[5]["action"], "Send");
    assert_eq!(json[5]["key"], "Enter");
}
