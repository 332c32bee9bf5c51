//! The `Settings` struct.

use crate::error::SettingsError;
use crate::types::{LogLevel, MessageComposerSettings, PlatformOverride, UserKeyBinding};
use serde::{Deserialize, Serialize};

/// User settings, as stored in settings.yaml.
///
/// Every field has a default so a partial (or empty) file is valid, and
/// unknown fields are ignored so newer files still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Message composer behaviour
    pub message_composer: MessageComposerSettings,

    /// Primary modifier convention (auto-detected by default)
    pub platform: PlatformOverride,

    /// Debug log level
    pub log_level: LogLevel,

    /// Extra bindings that take priority over the built-in ones
    pub keybindings: Vec<UserKeyBinding>,
}

impl Settings {
    /// Check structural validity.
    ///
    /// Only catches empty fields; whether a key string parses or an action
    /// name exists is decided by the keybindings crate.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let mut problems = Vec::new();
        for (i, kb) in self.keybindings.iter().enumerate() {
            if kb.context.trim().is_empty() {
                problems.push(format!("keybindings[{i}].context is empty"));
            }
            if kb.action.trim().is_empty() {
                problems.push(format!("keybindings[{i}].action is empty"));
            }
            if kb.key.trim().is_empty() {
                problems.push(format!("keybindings[{i}].key is empty"));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(SettingsError::Validation(problems.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.message_composer.ctrl_enter_to_send);
        assert_eq!(settings.platform, PlatformOverride::Auto);
        assert_eq!(settings.log_level, LogLevel::Off);
        assert!(settings.keybindings.is_empty());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "message_composer:\n  ctrl_enter_to_send: true\n";
        let settings: Settings = serde_yaml_ng::from_str(yaml).unwrap();
        assert!(settings.message_composer.ctrl_enter_to_send);
        assert_eq!(settings.platform, PlatformOverride::Auto);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let yaml = "theme: dark\nplatform: other\n";
        let settings: Settings = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(settings.platform, PlatformOverride::Other);
    }

    #[test]
    fn test_validate_reports_every_empty_field() {
        let settings = Settings {
            keybindings: vec![
                UserKeyBinding {
                    context: "MessageComposer".to_string(),
                    action: "Send".to_string(),
                    key: "Shift+Enter".to_string(),
                },
                UserKeyBinding {
                    context: String::new(),
                    action: "Send".to_string(),
                    key: "  ".to_string(),
                },
            ],
            ..Default::default()
        };

        match settings.validate() {
            Err(SettingsError::Validation(msg)) => {
                assert!(msg.contains("keybindings[1].context"));
                assert!(msg.contains("keybindings[1].key"));
                assert!(!msg.contains("keybindings[0]"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
