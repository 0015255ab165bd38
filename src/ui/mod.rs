//! webshell UI layer.
//!
//! `pages` holds the HTML and injected script for the shell's own surfaces.
//! `host_logic` turns page-load callbacks into shell events.
//! `webview_app` (feature `gui`) hosts the shell in a native window using
//! `wry` for WebView rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView

pub mod host_logic;
pub mod pages;

#[cfg(feature = "gui")]
pub mod webview_app;
