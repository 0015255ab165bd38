// webshell platform paths for macOS
// Config: ~/Library/Application Support/WebShell

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory on macOS.
/// `~/Library/Application Support/WebShell`
pub fn get_config_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
        .join("Library")
        .join("Application Support")
        .join("WebShell")
}
