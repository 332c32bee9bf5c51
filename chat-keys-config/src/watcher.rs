//! Settings file watcher for automatic reload.
//!
//! Watches settings.yaml for changes and emits reload events. Editors
//! often write a file several times per save, so events are debounced.

use anyhow::{Context, Result};
use notify::{Config as NotifyConfig, Event, PollWatcher, RecursiveMode, Watcher};
use parking_lot::Mutex;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::{Duration, Instant};

use crate::store::SettingsStore;

/// Event indicating the settings file has changed and needs reloading.
#[derive(Debug, Clone)]
pub struct SettingsReloadEvent {
    /// Path to the settings file that changed.
    pub path: PathBuf,
}

/// Watches the settings file and sends reload events.
pub struct SettingsWatcher {
    /// Kept alive to maintain watching.
    _watcher: Box<dyn Watcher + Send>,
    event_receiver: Receiver<SettingsReloadEvent>,
}

impl std::fmt::Debug for SettingsWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsWatcher").finish_non_exhaustive()
    }
}

/// Shared debounce gate.
///
/// Returns true if an event at `now` should be forwarded, recording it as
/// the last forwarded event.
fn debounce_allows(last: &Mutex<Option<Instant>>, now: Instant, delay: Duration) -> bool {
    let mut last = last.lock();
    match *last {
        Some(prev) if now.duration_since(prev) < delay => {
            log::trace!("Debouncing settings reload event");
            false
        }
        _ => {
            *last = Some(now);
            true
        }
    }
}

/// Build the event-handler closure shared by both watcher backends.
fn make_event_handler(
    filename: OsString,
    canonical_path: PathBuf,
    debounce_delay: Duration,
    tx: Sender<SettingsReloadEvent>,
    last_event_time: Arc<Mutex<Option<Instant>>>,
) -> impl Fn(notify::Result<Event>) + Send + 'static {
    move |result: notify::Result<Event>| {
        let Ok(event) = result else {
            return;
        };

        // Create covers atomic saves (write temp file, rename over)
        if !matches!(
            event.kind,
            notify::EventKind::Modify(_) | notify::EventKind::Create(_)
        ) {
            return;
        }

        let touches_settings = event
            .paths
            .iter()
            .any(|p| p.file_name().is_some_and(|f| f == filename));
        if !touches_settings {
            return;
        }

        if debounce_allows(&last_event_time, Instant::now(), debounce_delay) {
            let reload_event = SettingsReloadEvent {
                path: canonical_path.clone(),
            };
            log::info!("Settings file changed: {}", reload_event.path.display());
            if let Err(e) = tx.send(reload_event) {
                log::error!("Failed to send settings reload event: {}", e);
            }
        }
    }
}

impl SettingsWatcher {
    /// Create a new settings watcher.
    ///
    /// Uses the platform's native watcher and falls back to a 500 ms
    /// `PollWatcher` when the native backend cannot start (containers,
    /// network filesystems).
    ///
    /// # Errors
    /// Returns an error if the settings file doesn't exist or watching
    /// fails on both backends.
    pub fn new(settings_path: &Path, debounce_delay_ms: u64) -> Result<Self> {
        if !settings_path.exists() {
            anyhow::bail!("Settings file not found: {}", settings_path.display());
        }

        let canonical = settings_path
            .canonicalize()
            .unwrap_or_else(|_| settings_path.to_path_buf());
        let filename = canonical
            .file_name()
            .context("Settings path has no filename")?
            .to_os_string();
        let parent_dir = canonical
            .parent()
            .context("Settings path has no parent directory")?
            .to_path_buf();

        let (tx, rx) = channel::<SettingsReloadEvent>();
        let debounce_delay = Duration::from_millis(debounce_delay_ms);
        let last_event_time = Arc::new(Mutex::new(None));

        let mut watcher =
            Self::create_watcher(filename, canonical.clone(), debounce_delay, tx, last_event_time)?;

        watcher
            .watch(&parent_dir, RecursiveMode::NonRecursive)
            .with_context(|| {
                format!(
                    "Failed to watch settings directory: {}",
                    parent_dir.display()
                )
            })?;

        log::info!("Settings hot reload: watching {}", canonical.display());

        Ok(Self {
            _watcher: watcher,
            event_receiver: rx,
        })
    }

    fn create_watcher(
        filename: OsString,
        canonical_path: PathBuf,
        debounce_delay: Duration,
        tx: Sender<SettingsReloadEvent>,
        last_event_time: Arc<Mutex<Option<Instant>>>,
    ) -> Result<Box<dyn Watcher + Send>> {
        let handler = make_event_handler(
            filename.clone(),
            canonical_path.clone(),
            debounce_delay,
            tx.clone(),
            Arc::clone(&last_event_time),
        );

        match notify::recommended_watcher(handler) {
            Ok(w) => {
                log::debug!("Settings watcher: using native backend");
                Ok(Box::new(w))
            }
            Err(e) => {
                log::warn!(
                    "Settings watcher: native backend unavailable ({}); falling back to PollWatcher",
                    e
                );
                let fallback_handler = make_event_handler(
                    filename,
                    canonical_path,
                    debounce_delay,
                    tx,
                    last_event_time,
                );
                let poll_watcher = PollWatcher::new(
                    fallback_handler,
                    NotifyConfig::default().with_poll_interval(Duration::from_millis(500)),
                )
                .context("Failed to create fallback PollWatcher")?;
                Ok(Box::new(poll_watcher))
            }
        }
    }

    /// Check for a pending reload event (non-blocking).
    pub fn try_recv(&self) -> Option<SettingsReloadEvent> {
        self.event_receiver.try_recv().ok()
    }

    /// Drain pending events and reload `store` if any arrived.
    ///
    /// Returns `true` when the store's settings changed. Reload errors are
    /// logged and the previous settings are kept.
    pub fn apply_pending(&self, store: &SettingsStore) -> bool {
        let mut saw_event = false;
        while self.try_recv().is_some() {
            saw_event = true;
        }
        if !saw_event {
            return false;
        }

        match store.reload() {
            Ok(changed) => changed,
            Err(e) => {
                log::error!("Settings reload failed: {:#}", e);
                false
            }
        }
    }
}
