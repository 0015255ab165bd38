//! webshell: a single-site browser shell.
//!
//! Displays one fixed website in an embedded webview, swaps in an offline
//! screen while the network is unreachable, and routes the back signal into
//! the webview's history. This library crate exposes all modules for use by
//! the binary and integration tests.

pub mod app;
pub mod managers;
pub mod platform;
pub mod services;
pub mod shell;
pub mod types;
pub mod ui;
