use thiserror::Error;

// === ShellError ===

/// Errors related to the shell's activation lifecycle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    /// `activate` was called on a shell that is already mounted.
    #[error("Shell is already active")]
    AlreadyActive,
    /// `deactivate` was called on a shell that is not mounted.
    #[error("Shell is not active")]
    NotActive,
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
}

// === ReachabilityError ===

/// Errors related to starting or talking to the network monitor.
#[derive(Debug, Error)]
pub enum ReachabilityError {
    /// The HTTP client used for probing could not be built.
    #[error("Failed to build probe client: {0}")]
    ClientInit(String),
    /// The monitor's async runtime or thread could not be started.
    #[error("Failed to start network monitor: {0}")]
    RuntimeInit(String),
    /// The monitor thread has exited and no longer accepts requests.
    #[error("Network monitor has stopped")]
    MonitorStopped,
}
