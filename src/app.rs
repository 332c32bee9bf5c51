//! Wiring between settings, the binding manager and the CLI commands.

use crate::cli::{Cli, Commands, ResolveOptions};
use crate::debug;
use anyhow::{Context, Result};
use chat_keys_config::watcher::SettingsWatcher;
use chat_keys_config::{Settings, SettingsLookup, SettingsStore};
use chat_keys_keybindings::{
    KeyAction, KeyBinding, KeyBindingContext, KeyBindingsManager, KeyEvent, Platform,
    check_user_bindings, parse_key_combo,
};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Debounce for settings hot reload
const RELOAD_DEBOUNCE_MS: u64 = 100;

/// A loaded settings store plus the manager reading from it.
pub struct App {
    store: Arc<SettingsStore>,
    manager: KeyBindingsManager,
}

impl App {
    /// Load settings from `path` and build the binding manager.
    ///
    /// `platform` forces a modifier convention; `None` defers to settings.
    pub fn new(path: &Path, platform: Option<Platform>) -> Result<Self> {
        let store = Arc::new(
            SettingsStore::from_path(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        );
        debug::apply_settings_level(store.snapshot().log_level);

        let lookup: Arc<dyn SettingsLookup> = store.clone();
        let mut manager = KeyBindingsManager::new(lookup);
        if let Some(platform) = platform {
            manager = manager.with_platform(platform);
        }
        log::info!(
            "Key bindings ready (platform: {:?}, settings: {})",
            manager.platform(),
            path.display()
        );

        Ok(Self { store, manager })
    }

    pub fn store(&self) -> &Arc<SettingsStore> {
        &self.store
    }

    pub fn manager(&self) -> &KeyBindingsManager {
        &self.manager
    }

    /// Turn a pressed-key description like "Ctrl+Enter" into a key event.
    pub fn describe_event(&self, keys: &str) -> Result<KeyEvent> {
        let combo =
            parse_key_combo(keys).with_context(|| format!("Invalid key description '{keys}'"))?;
        KeyEvent::from_combo(&combo, self.manager.platform())
            .with_context(|| format!("Key description '{keys}' names no key"))
    }

    /// Resolve a pressed-key description in `context`.
    pub fn resolve(&self, context: KeyBindingContext, keys: &str) -> Result<KeyAction> {
        let event = self.describe_event(keys)?;
        Ok(self.manager.get_action(context, &event))
    }

    /// Effective bindings of `context`.
    pub fn bindings(&self, context: KeyBindingContext) -> Vec<KeyBinding> {
        self.manager.bindings_for(context).unwrap_or_default()
    }

    /// Heading line for the text form of `bindings`.
    pub fn bindings_header(&self, context: KeyBindingContext) -> String {
        let platform = self.manager.platform();
        format!(
            "# {context} ({platform:?}: CmdOrCtrl is {})",
            platform.primary_modifier_name()
        )
    }

    /// Every problem found in the current settings, one line each.
    pub fn check(&self) -> Vec<String> {
        let settings = self.store.snapshot();
        let mut problems = Vec::new();
        if let Err(e) = settings.validate() {
            problems.push(e.to_string());
        }
        for (i, err) in check_user_bindings(&settings) {
            problems.push(format!("keybindings[{i}]: {err}"));
        }
        problems
    }

    /// Announce a settings reload on `output`, listing any new problems.
    ///
    /// Bad user bindings are skipped quietly during lookups, so this is
    /// where a hot-reloaded mistake becomes visible.
    pub fn report_reload<W: Write>(&self, mut output: W) -> Result<()> {
        writeln!(output, "# settings reloaded")?;
        for problem in self.check() {
            log::warn!("Reloaded settings: {}", problem);
            writeln!(output, "# {problem}")?;
        }
        Ok(())
    }

    /// Resolve one key description per input line until EOF.
    ///
    /// Blank lines and `#` comments are skipped. When `watcher` is given,
    /// pending settings changes are applied before each line.
    pub fn watch<R: BufRead, W: Write>(
        &self,
        context: KeyBindingContext,
        input: R,
        mut output: W,
        watcher: Option<&SettingsWatcher>,
    ) -> Result<()> {
        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            let keys = line.trim();
            if keys.is_empty() || keys.starts_with('#') {
                continue;
            }

            if let Some(w) = watcher
                && w.apply_pending(&self.store)
            {
                self.report_reload(&mut output)?;
            }

            match self.resolve(context, keys) {
                Ok(action) => writeln!(output, "{keys} -> {action}")?,
                Err(e) => writeln!(output, "{keys} -> error: {e:#}")?,
            }
            output.flush()?;
        }
        Ok(())
    }
}

/// Run a parsed command line, returning the process exit code.
pub fn run(cli: Cli) -> Result<i32> {
    let path: PathBuf = match cli.config {
        Some(path) => path,
        None => {
            // First run writes the default file, giving `watch` something to watch
            Settings::load().context("Failed to prepare default settings")?;
            Settings::settings_path()
        }
    };

    match cli.command {
        Commands::Resolve { keys, options } => {
            let app = app_for(&path, &options)?;
            let action = app.resolve(options.context, &keys)?;
            println!("{action}");
            Ok(if action.is_none() { 1 } else { 0 })
        }
        Commands::Bindings { options, json } => {
            let app = app_for(&path, &options)?;
            let bindings = app.bindings(options.context);
            if json {
                println!("{}", serde_json::to_string_pretty(&bindings)?);
            } else {
                println!("{}", app.bindings_header(options.context));
                for b in &bindings {
                    println!("{:<24} {}", b.combo.to_string(), b.action);
                }
            }
            Ok(0)
        }
        Commands::CheckConfig => {
            let app = App::new(&path, None)?;
            let problems = app.check();
            println!("Settings: {}", path.display());
            if problems.is_empty() {
                println!("OK");
                Ok(0)
            } else {
                for p in &problems {
                    println!("  {p}");
                }
                Ok(1)
            }
        }
        Commands::Watch { options } => {
            let app = app_for(&path, &options)?;
            let watcher = if path.exists() {
                match SettingsWatcher::new(&path, RELOAD_DEBOUNCE_MS) {
                    Ok(w) => Some(w),
                    Err(e) => {
                        log::warn!("Settings hot reload disabled: {:#}", e);
                        None
                    }
                }
            } else {
                log::warn!(
                    "Settings hot reload disabled: {} does not exist",
                    path.display()
                );
                None
            };
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            app.watch(options.context, stdin.lock(), stdout.lock(), watcher.as_ref())?;
            Ok(0)
        }
    }
}

fn app_for(path: &Path, options: &ResolveOptions) -> Result<App> {
    App::new(path, options.platform.map(Platform::from))
}
