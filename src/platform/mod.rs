// webshell platform abstraction
// Platform-specific paths plus the event sources the shell subscribes to.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

pub mod sources;

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `~/.config/webshell` (or `$XDG_CONFIG_HOME/webshell`)
/// - **macOS**: `~/Library/Application Support/WebShell`
/// - **Windows**: `%APPDATA%/WebShell`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}
