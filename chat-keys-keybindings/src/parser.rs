//! Key combination parser.
//!
//! Parses human-readable key strings like "CmdOrCtrl+Shift+Enter" into
//! `KeyCombo`s so bindings can be written in settings files.

use crate::combo::KeyCombo;
use crate::keys::normalize_key_name;
use std::borrow::Cow;
use thiserror::Error;

/// Error type for key and name parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty key combination")]
    Empty,

    #[error("Empty segment in key combination '{0}'")]
    EmptySegment(String),

    #[error("Multiple keys specified: already have '{first}', found '{second}'")]
    MultipleKeys { first: String, second: String },

    #[error("Key combination ends with modifier, no key specified")]
    MissingKey,

    #[error("Unknown key: '{0}'")]
    UnknownKey(String),

    #[error("CmdOrCtrl cannot be combined with {0}; it already stands in for it")]
    PrimaryModifierConflict(&'static str),

    #[error("Unknown action: '{0}'")]
    UnknownAction(String),

    #[error("Unknown context: '{0}'")]
    UnknownContext(String),
}

/// Parse a key combination string into a KeyCombo.
///
/// Supported format: "Modifier+Modifier+Key"
///
/// Modifiers:
/// - `Ctrl`, `Control` - Control key
/// - `Alt`, `Option` - Alt/Option key
/// - `Shift` - Shift key
/// - `Meta`, `Cmd`, `Command`, `Super`, `Win` - Meta/Cmd key
/// - `CmdOrCtrl`, `Primary` - Cmd on macOS, Ctrl on other platforms
///
/// Keys:
/// - Named keys: `Enter`, `Escape`, `Up`, `PgDn`, `F1`-`F12`, etc.
/// - Single characters, kept as written (`a` and `A` are different keys)
/// - `Any` or `*` - no key constraint
pub fn parse_key_combo(s: &str) -> Result<KeyCombo, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    let parts: Vec<&str> = s.split('+').map(str::trim).collect();
    let mut combo = KeyCombo::any();
    let mut key_part: Option<&str> = None;

    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() {
            return Err(ParseError::EmptySegment(s.to_string()));
        }
        let is_last = i == parts.len() - 1;

        let is_modifier = match part.to_lowercase().as_str() {
            "ctrl" | "control" => {
                combo.ctrl = true;
                true
            }
            "alt" | "option" => {
                combo.alt = true;
                true
            }
            "shift" => {
                combo.shift = true;
                true
            }
            "meta" | "cmd" | "command" | "super" | "win" => {
                combo.meta = true;
                true
            }
            "cmdorctrl" | "primary" => {
                combo.primary_modifier = true;
                true
            }
            _ => false,
        };

        if !is_modifier {
            if let Some(first) = key_part {
                return Err(ParseError::MultipleKeys {
                    first: first.to_string(),
                    second: part.to_string(),
                });
            }
            key_part = Some(part);
        } else if is_last {
            return Err(ParseError::MissingKey);
        }
    }

    if combo.primary_modifier {
        if combo.ctrl {
            return Err(ParseError::PrimaryModifierConflict("Ctrl"));
        }
        if combo.meta {
            return Err(ParseError::PrimaryModifierConflict("Meta"));
        }
    }

    let key_str = key_part.ok_or(ParseError::MissingKey)?;
    combo.key = parse_key(key_str)?;
    Ok(combo)
}

/// Parse a key string; `Ok(None)` means "any key".
fn parse_key(s: &str) -> Result<Option<Cow<'static, str>>, ParseError> {
    if s == "*" || s.eq_ignore_ascii_case("any") {
        return Ok(None);
    }

    if let Some(named) = normalize_key_name(s) {
        return Ok(Some(Cow::Borrowed(named)));
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(_), None) => Ok(Some(Cow::Owned(s.to_string()))),
        _ => Err(ParseError::UnknownKey(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{ARROW_UP, ENTER, ESCAPE, SPACE};

    #[test]
    fn test_parse_simple() {
        let combo = parse_key_combo("Ctrl+Shift+B").unwrap();
        assert!(combo.ctrl);
        assert!(combo.shift);
        assert!(!combo.alt);
        assert!(!combo.meta);
        assert_eq!(combo.key_name(), Some("B"));
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(parse_key_combo("Enter").unwrap().key_name(), Some(ENTER));
        assert_eq!(parse_key_combo("esc").unwrap().key_name(), Some(ESCAPE));
        assert_eq!(parse_key_combo("Alt+Up").unwrap().key_name(), Some(ARROW_UP));
        assert_eq!(parse_key_combo("Shift+Space").unwrap().key_name(), Some(SPACE));
    }

    #[test]
    fn test_parse_primary_modifier() {
        let combo = parse_key_combo("CmdOrCtrl+Enter").unwrap();
        assert!(combo.primary_modifier);
        assert!(!combo.ctrl);
        assert!(!combo.meta);
        assert_eq!(combo, KeyCombo::key(ENTER).with_primary_modifier());
    }

    #[test]
    fn test_primary_modifier_conflicts() {
        assert_eq!(
            parse_key_combo("CmdOrCtrl+Ctrl+Enter"),
            Err(ParseError::PrimaryModifierConflict("Ctrl"))
        );
        assert_eq!(
            parse_key_combo("Cmd+Primary+Enter"),
            Err(ParseError::PrimaryModifierConflict("Meta"))
        );
    }

    #[test]
    fn test_parse_whitespace() {
        let combo = parse_key_combo("  Ctrl + Alt + Up ").unwrap();
        assert_eq!(combo, KeyCombo::key(ARROW_UP).with_ctrl().with_alt());
    }

    #[test]
    fn test_parse_any_key() {
        assert_eq!(parse_key_combo("Any").unwrap(), KeyCombo::any());
        assert_eq!(parse_key_combo("Ctrl+*").unwrap(), KeyCombo::any().with_ctrl());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_key_combo(""), Err(ParseError::Empty));
        assert_eq!(parse_key_combo("Ctrl+Shift"), Err(ParseError::MissingKey));
        assert!(matches!(
            parse_key_combo("Ctrl++"),
            Err(ParseError::EmptySegment(_))
        ));
        assert!(matches!(
            parse_key_combo("A+B"),
            Err(ParseError::MultipleKeys { .. })
        ));
        assert_eq!(
            parse_key_combo("Ctrl+Banana"),
            Err(ParseError::UnknownKey("Banana".to_string()))
        );
    }

    #[test]
    fn test_characters_keep_case() {
        assert_eq!(parse_key_combo("a").unwrap().key_name(), Some("a"));
        assert_eq!(parse_key_combo("A").unwrap().key_name(), Some("A"));
        assert_eq!(parse_key_combo("Plus").unwrap().key_name(), Some("+"));
    }

    #[test]
    fn test_display_reparses() {
        for s in [
            "CmdOrCtrl+Enter",
            "Ctrl+Alt+ArrowUp",
            "Shift+Space",
            "Meta+*",
            "Any",
            "Ctrl+Plus",
        ] {
            let combo = parse_key_combo(s).unwrap();
            assert_eq!(parse_key_combo(&combo.to_string()).unwrap(), combo, "{s}");
        }
    }
}
