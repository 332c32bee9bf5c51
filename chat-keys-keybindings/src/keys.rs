//! Key identifiers.
//!
//! Keys are identified by their W3C `KeyboardEvent.key` values, which is
//! also what most windowing toolkits name their logical keys after.

pub const ENTER: &str = "Enter";
pub const ESCAPE: &str = "Escape";
pub const SPACE: &str = " ";
pub const TAB: &str = "Tab";
pub const BACKSPACE: &str = "Backspace";
pub const DELETE: &str = "Delete";
pub const INSERT: &str = "Insert";
pub const HOME: &str = "Home";
pub const END: &str = "End";
pub const PAGE_UP: &str = "PageUp";
pub const PAGE_DOWN: &str = "PageDown";
pub const ARROW_UP: &str = "ArrowUp";
pub const ARROW_DOWN: &str = "ArrowDown";
pub const ARROW_LEFT: &str = "ArrowLeft";
pub const ARROW_RIGHT: &str = "ArrowRight";

/// Resolve a human-readable key alias into its W3C key name.
///
/// Accepts aliases such as `"Return"`, `"Esc"`, `"PgUp"`, `"Up"`, and
/// function keys F1–F12. Matching is case-insensitive. Returns `None` for
/// anything that is not a named key (single characters included).
pub fn normalize_key_name(s: &str) -> Option<&'static str> {
    match s.to_lowercase().as_str() {
        // Function keys
        "f1" => Some("F1"),
        "f2" => Some("F2"),
        "f3" => Some("F3"),
        "f4" => Some("F4"),
        "f5" => Some("F5"),
        "f6" => Some("F6"),
        "f7" => Some("F7"),
        "f8" => Some("F8"),
        "f9" => Some("F9"),
        "f10" => Some("F10"),
        "f11" => Some("F11"),
        "f12" => Some("F12"),

        // Common named keys
        "enter" | "return" => Some(ENTER),
        "escape" | "esc" => Some(ESCAPE),
        "space" => Some(SPACE),
        "tab" => Some(TAB),
        "backspace" => Some(BACKSPACE),
        "delete" | "del" => Some(DELETE),
        "insert" | "ins" => Some(INSERT),
        "home" => Some(HOME),
        "end" => Some(END),
        "pageup" | "pgup" => Some(PAGE_UP),
        "pagedown" | "pgdn" => Some(PAGE_DOWN),
        "plus" => Some("+"),

        // Arrow keys
        "up" | "arrowup" => Some(ARROW_UP),
        "down" | "arrowdown" => Some(ARROW_DOWN),
        "left" | "arrowleft" => Some(ARROW_LEFT),
        "right" | "arrowright" => Some(ARROW_RIGHT),

        _ => None,
    }
}

/// Human-readable label for a key name, the inverse of `normalize_key_name`
/// where the W3C value is awkward to print.
pub fn display_key_name(key: &str) -> &str {
    match key {
        SPACE => "Space",
        "+" => "Plus",
        other => other,
    }
}
