// webshell services
// Services provide functionality with no UI state: settings persistence and reachability probing.

pub mod reachability_probe;
pub mod settings_engine;
