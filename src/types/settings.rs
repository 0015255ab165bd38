use serde::{Deserialize, Serialize};

use super::shell::TARGET_URL;

/// Top-level shell settings container.
///
/// The target address is not part of the settings; it is fixed at [`TARGET_URL`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ShellSettings {
    pub window: WindowSettings,
    pub reachability: ReachabilitySettings,
    pub developer: DeveloperSettings,
}

/// Native window settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Mr. Chatur".to_string(),
            width: 420.0,
            height: 860.0,
        }
    }
}

/// How the network monitor decides whether the device is online.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReachabilitySettings {
    pub probe_url: String,
    pub poll_interval_secs: u64,
    pub probe_timeout_secs: u64,
}

impl Default for ReachabilitySettings {
    fn default() -> Self {
        Self {
            probe_url: TARGET_URL.to_string(),
            poll_interval_secs: 5,
            probe_timeout_secs: 3,
        }
    }
}

/// Developer-facing toggles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DeveloperSettings {
    pub devtools: bool,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for DeveloperSettings {
    fn default() -> Self {
        Self {
            devtools: false,
            log_filter: "webshell=info".to_string(),
        }
    }
}
