//! App Core for webshell.
//!
//! Holds the settings engine and the shell, and owns the mount/unmount
//! lifecycle the host drives.

use crate::platform::sources::{BackSignalSource, ReachabilitySource};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::shell::BrowserShell;
use crate::types::errors::ShellError;
use crate::types::settings::ShellSettings;
use crate::types::shell::TARGET_URL;

pub struct App {
    pub settings_engine: SettingsEngine,
    pub shell: BrowserShell,
}

impl App {
    /// Wraps an already-loaded settings engine.
    pub fn new(settings_engine: SettingsEngine) -> Self {
        Self {
            settings_engine,
            shell: BrowserShell::new(),
        }
    }

    pub fn settings(&self) -> &ShellSettings {
        self.settings_engine.get_settings()
    }

    /// Startup sequence: mount the shell against the platform sources.
    pub fn startup(
        &mut self,
        reachability: &dyn ReachabilitySource,
        back_signal: &dyn BackSignalSource,
    ) -> Result<(), ShellError> {
        self.shell.activate(reachability, back_signal)?;
        tracing::info!(target_url = TARGET_URL, "shell started");
        Ok(())
    }

    /// Shutdown sequence: unmount the shell if it is still mounted.
    pub fn shutdown(&mut self) {
        match self.shell.deactivate() {
            Ok(()) => tracing::info!("shell stopped"),
            Err(e) => tracing::debug!(error = %e, "shutdown skipped"),
        }
    }
}
