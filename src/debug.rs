//! Unified logging for chat-keys.
//!
//! Installs a `log::Log` implementation that routes every `log::info!()`
//! etc. from all workspace crates to a debug log file in the temp directory
//! (`chat_keys_debug.log`). When `RUST_LOG` is set, records are mirrored to
//! stderr as well.
//!
//! Level precedence: CLI `--log-level`, then `RUST_LOG`, then the
//! `log_level` from settings (applied once settings are loaded).

use chat_keys_config::LogLevel;
use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

struct LogBridge {
    /// Opened lazily on the first record that passes the level filter
    file: Mutex<Option<File>>,
    mirror_to_stderr: bool,
    file_failed: AtomicBool,
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();
/// Set when CLI or RUST_LOG chose the level, so settings must not override it
static LEVEL_PINNED: AtomicBool = AtomicBool::new(false);

/// Path of the debug log file.
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join("chat_keys_debug.log")
}

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

impl LogBridge {
    fn write_line(&self, line: &str) {
        if self.file_failed.load(Ordering::Relaxed) {
            return;
        }
        let mut file = self.file.lock();
        if file.is_none() {
            match OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(log_file_path())
            {
                Ok(f) => *file = Some(f),
                Err(_) => {
                    // Silently give up; logging must never break the CLI output
                    self.file_failed.store(true, Ordering::Relaxed);
                    return;
                }
            }
        }
        if let Some(f) = file.as_mut() {
            let _ = f.write_all(line.as_bytes());
            let _ = f.flush();
        }
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        self.write_line(&line);
        if self.mirror_to_stderr {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(f) = self.file.lock().as_mut() {
            let _ = f.flush();
        }
    }
}

/// Parse a `RUST_LOG`-style value. Only a bare level name is understood.
fn parse_env_level(value: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(value.trim()).ok()
}

/// Install the log bridge. Safe to call more than once; later calls only
/// adjust the level.
pub fn init_log_bridge(cli_level: Option<LogLevel>) {
    let env_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| parse_env_level(&v));

    let bridge = BRIDGE.get_or_init(|| LogBridge {
        file: Mutex::new(None),
        mirror_to_stderr: env_level.is_some(),
        file_failed: AtomicBool::new(false),
    });
    // Fails only if another logger is already installed (e.g. in tests)
    let _ = log::set_logger(bridge);

    let level = match (cli_level, env_level) {
        (Some(cli), _) => Some(cli.to_level_filter()),
        (None, Some(env)) => Some(env),
        (None, None) => None,
    };
    match level {
        Some(level) => {
            LEVEL_PINNED.store(true, Ordering::Relaxed);
            log::set_max_level(level);
        }
        None => log::set_max_level(LevelFilter::Off),
    }
}

/// Apply the level from settings unless CLI or `RUST_LOG` already chose one.
pub fn apply_settings_level(level: LogLevel) {
    if LEVEL_PINNED.load(Ordering::Relaxed) {
        return;
    }
    log::set_max_level(level.to_level_filter());
}
