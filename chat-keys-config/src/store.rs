//! Live settings store.
//!
//! Key handling reads settings on every event, while reloads happen rarely
//! (file watcher, settings UI). `SettingsStore` keeps the current settings
//! behind an `ArcSwap` so readers take a lock-free snapshot and writers swap
//! in a whole new value.

use crate::error::SettingsError;
use crate::settings::Settings;
use crate::types::PlatformOverride;
use anyhow::Result;
use arc_swap::ArcSwap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Read access to the current settings.
///
/// Binding resolution takes one snapshot per lookup so a reload that lands
/// mid-lookup cannot produce a half-old, half-new binding list.
pub trait SettingsLookup: Send + Sync {
    /// Current settings snapshot.
    fn snapshot(&self) -> Arc<Settings>;

    /// Whether CmdOrCtrl+Enter (rather than plain Enter) sends a message.
    fn ctrl_enter_to_send(&self) -> bool {
        self.snapshot().message_composer.ctrl_enter_to_send
    }

    /// Platform convention override.
    fn platform_override(&self) -> PlatformOverride {
        self.snapshot().platform
    }
}

/// A snapshot answers from its own fields.
impl SettingsLookup for Settings {
    fn snapshot(&self) -> Arc<Settings> {
        Arc::new(self.clone())
    }

    fn ctrl_enter_to_send(&self) -> bool {
        self.message_composer.ctrl_enter_to_send
    }

    fn platform_override(&self) -> PlatformOverride {
        self.platform
    }
}

/// Shared, hot-swappable settings.
#[derive(Debug)]
pub struct SettingsStore {
    current: ArcSwap<Settings>,
    /// File backing this store, if any (used by `reload`)
    path: Option<PathBuf>,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl SettingsStore {
    /// Create an in-memory store.
    pub fn new(settings: Settings) -> Self {
        Self {
            current: ArcSwap::from_pointee(settings),
            path: None,
        }
    }

    /// Create a store backed by a settings file.
    ///
    /// A missing file yields defaults; `reload` will pick the file up once
    /// it appears.
    pub fn from_path(path: &Path) -> Result<Self> {
        let settings = Settings::load_from(path)?;
        Ok(Self {
            current: ArcSwap::from_pointee(settings),
            path: Some(path.to_path_buf()),
        })
    }

    /// The file backing this store, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Current settings.
    pub fn get(&self) -> Arc<Settings> {
        self.current.load_full()
    }

    /// Replace the settings wholesale.
    pub fn replace(&self, settings: Settings) {
        self.current.store(Arc::new(settings));
    }

    /// Apply a modification to a copy of the current settings and publish it.
    pub fn update<F>(&self, f: F)
    where
        F: Fn(&mut Settings),
    {
        self.current.rcu(|current| {
            let mut next = Settings::clone(current);
            f(&mut next);
            next
        });
    }

    /// Re-read the backing file.
    ///
    /// Returns `Ok(true)` when the settings changed. On a read or parse
    /// error the previous settings stay in effect and the error is returned.
    /// An empty file also keeps the previous settings, since it is usually
    /// an editor midway through rewriting it. A deleted file resets to
    /// defaults. Stores without a backing file always return `Ok(false)`.
    pub fn reload(&self) -> Result<bool> {
        let Some(path) = self.path.as_deref() else {
            return Ok(false);
        };

        let parsed = match fs::read_to_string(path) {
            Ok(contents) if contents.trim().is_empty() => {
                log::debug!("Settings file {:?} is empty, keeping previous settings", path);
                return Ok(false);
            }
            Ok(contents) => Settings::from_yaml(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("Settings file {:?} removed, using defaults", path);
                Ok(Settings::default())
            }
            Err(e) => Err(SettingsError::from(e)),
        };

        let fresh = match parsed {
            Ok(s) => s,
            Err(e) => {
                log::warn!("Keeping previous settings, reload of {:?} failed: {}", path, e);
                return Err(e.into());
            }
        };

        let changed = *self.current.load_full() != fresh;
        if changed {
            log::info!("Settings reloaded from {:?}", path);
            self.replace(fresh);
        } else {
            log::debug!("Settings file {:?} unchanged", path);
        }
        Ok(changed)
    }
}

impl SettingsLookup for SettingsStore {
    fn snapshot(&self) -> Arc<Settings> {
        self.get()
    }
}
