//! Platform convention for the primary modifier.
//!
//! The primary modifier is Cmd (meta) on macOS and Ctrl everywhere else.
//! The platform is always passed into matching explicitly so the predicate
//! stays pure and can be tested for both conventions on any host.

use chat_keys_config::PlatformOverride;

/// Which modifier convention applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Primary modifier is the meta (Cmd) key
    Mac,
    /// Primary modifier is Ctrl
    Other,
}

impl Platform {
    /// Platform of the build target.
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Mac
        } else {
            Platform::Other
        }
    }

    /// Resolve a settings override, falling back to the build target.
    pub fn from_override(o: PlatformOverride) -> Self {
        match o {
            PlatformOverride::Auto => Self::current(),
            PlatformOverride::Mac => Platform::Mac,
            PlatformOverride::Other => Platform::Other,
        }
    }

    /// Name of the physical key acting as primary modifier.
    pub fn primary_modifier_name(self) -> &'static str {
        match self {
            Platform::Mac => "Cmd",
            Platform::Other => "Ctrl",
        }
    }
}

/// Resolve the primary modifier for `platform`.
///
/// Returns `(expected_ctrl, expected_meta)` given the combo's
/// `primary_modifier` flag and its explicit `ctrl`/`meta` values.
///
/// - Mac: primary modifier maps to meta; ctrl keeps its explicit value.
/// - Other: primary modifier maps to ctrl; meta keeps its explicit value.
#[inline]
pub fn resolve_primary_modifier(
    platform: Platform,
    primary_modifier: bool,
    ctrl: bool,
    meta: bool,
) -> (bool, bool) {
    if !primary_modifier {
        return (ctrl, meta);
    }
    match platform {
        Platform::Mac => (ctrl, true),
        Platform::Other => (true, meta),
    }
}
