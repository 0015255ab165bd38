// webshell state managers
// Managers own the shell's stateful concerns: connectivity, back navigation, content history.

pub mod back_navigation;
pub mod connectivity_watcher;
pub mod history_tracker;
