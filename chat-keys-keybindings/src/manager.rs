//! Context-to-action resolution.

use crate::action::{KeyAction, KeyBindingContext};
use crate::bindings::{KeyBinding, check_user_bindings, message_composer_bindings, user_bindings};
use crate::event::KeyEvent;
use crate::matcher::KeyComboMatcher;
use crate::platform::Platform;
use chat_keys_config::{Settings, SettingsLookup};
use std::collections::HashMap;
use std::sync::Arc;

/// Builds a context's binding list from a settings snapshot.
pub type BindingsGetter = Box<dyn Fn(&Settings) -> Vec<KeyBinding> + Send + Sync>;

/// Resolves key events to actions per context.
///
/// Each context maps to a getter rather than a fixed list, so binding lists
/// are recomputed from the live settings on every lookup.
pub struct KeyBindingsManager {
    settings: Arc<dyn SettingsLookup>,
    contexts: HashMap<KeyBindingContext, BindingsGetter>,
    /// Forced platform; otherwise taken from settings on each lookup
    platform: Option<Platform>,
}

impl std::fmt::Debug for KeyBindingsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyBindingsManager")
            .field("contexts", &self.contexts.keys().collect::<Vec<_>>())
            .field("platform", &self.platform)
            .finish_non_exhaustive()
    }
}

impl KeyBindingsManager {
    /// Create a manager with the built-in contexts registered.
    ///
    /// User bindings that cannot be resolved are logged once here.
    pub fn new(settings: Arc<dyn SettingsLookup>) -> Self {
        let mut manager = Self::empty(settings);
        manager.register_context(KeyBindingContext::MessageComposer, message_composer_bindings);
        manager.log_invalid_user_bindings();
        manager
    }

    /// Create a manager with no contexts registered.
    pub fn empty(settings: Arc<dyn SettingsLookup>) -> Self {
        Self {
            settings,
            contexts: HashMap::new(),
            platform: None,
        }
    }

    /// Force a platform convention regardless of settings.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Register (or replace) the getter for `context`.
    pub fn register_context<F>(&mut self, context: KeyBindingContext, getter: F)
    where
        F: Fn(&Settings) -> Vec<KeyBinding> + Send + Sync + 'static,
    {
        if self.contexts.insert(context, Box::new(getter)).is_some() {
            log::debug!("Replaced binding getter for context {}", context);
        }
    }

    /// Platform convention currently in effect.
    pub fn platform(&self) -> Platform {
        self.platform_for(&self.settings.snapshot())
    }

    fn platform_for(&self, settings: &Settings) -> Platform {
        self.platform
            .unwrap_or_else(|| Platform::from_override(settings.platform_override()))
    }

    /// Current effective bindings for `context`, highest priority first.
    ///
    /// User bindings come before the built-in list. Returns `None` if the
    /// context has no getter.
    pub fn bindings_for(&self, context: KeyBindingContext) -> Option<Vec<KeyBinding>> {
        self.bindings_from(context, &self.settings.snapshot())
    }

    fn bindings_from(
        &self,
        context: KeyBindingContext,
        settings: &Settings,
    ) -> Option<Vec<KeyBinding>> {
        let getter = self.contexts.get(&context)?;
        let mut bindings = user_bindings(settings, context);
        bindings.extend(getter(settings));
        Some(bindings)
    }

    /// Find the action `event` triggers in `context`.
    ///
    /// The first matching binding wins. Returns `KeyAction::None` when
    /// nothing matches or the context is unknown.
    pub fn get_action(&self, context: KeyBindingContext, event: &KeyEvent) -> KeyAction {
        // One snapshot for both platform and bindings
        let settings = self.settings.snapshot();

        let Some(bindings) = self.bindings_from(context, &settings) else {
            log::debug!("No bindings registered for context {}", context);
            return KeyAction::None;
        };

        let matcher = KeyComboMatcher::new(event, self.platform_for(&settings));
        match bindings.iter().find(|b| matcher.matches(&b.combo)) {
            Some(binding) => {
                log::trace!(
                    "{}: {:?} matched {} -> {}",
                    context,
                    event,
                    binding.combo,
                    binding.action
                );
                binding.action
            }
            None => KeyAction::None,
        }
    }

    fn log_invalid_user_bindings(&self) {
        let settings = self.settings.snapshot();
        for (i, err) in check_user_bindings(&settings) {
            let kb = &settings.keybindings[i];
            log::warn!(
                "Invalid keybinding '{}' for action '{}' in context '{}': {}",
                kb.key,
                kb.action,
                kb.context,
                err
            );
        }
    }
}
