//! HTML for the shell's own surfaces and the script injected into every page.
//!
//! Nothing here needs a window, so it is compiled and tested without `gui`.

use serde::Deserialize;

use crate::types::shell::OfflineScreen;

/// Turns the platform back gestures seen by the page into an IPC message.
///
/// Alt+Left, the BrowserBack key and the mouse "back" button are all
/// swallowed here; the shell decides whether anything happens.
pub const BACK_SIGNAL_JS: &str = r#"(function(){
if(window.__ws_back_installed)return;window.__ws_back_installed=true;
function send(){try{window.ipc.postMessage(JSON.stringify({cmd:'back'}))}catch(e){}}
window.addEventListener('keydown',function(e){
  if(e.key==='BrowserBack'||(e.altKey&&e.key==='ArrowLeft')){e.preventDefault();send();}
},true);
window.addEventListener('mouseup',function(e){
  if(e.button===3){e.preventDefault();send();}
},true);
})();"#;

/// Feather-style "wifi-off" glyph.
const WIFI_OFF_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="1" y1="1" x2="23" y2="23"/><path d="M16.72 11.06A10.94 10.94 0 0 1 19 12.55"/><path d="M5 12.55a10.94 10.94 0 0 1 5.17-2.39"/><path d="M10.71 5.05A16 16 0 0 1 22.58 9"/><path d="M1.42 9a15.91 15.91 0 0 1 4.7-2.88"/><path d="M8.53 16.11a6 6 0 0 1 6.95 0"/><line x1="12" y1="20" x2="12.01" y2="20"/></svg>"#;

/// Messages posted by [`BACK_SIGNAL_JS`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum IpcMessage {
    Back,
}

/// Parses an IPC body; anything unrecognised is `None`.
pub fn parse_ipc(body: &str) -> Option<IpcMessage> {
    serde_json::from_str(body).ok()
}

pub fn offline_html(screen: &OfflineScreen) -> String {
    format!(
        concat!(
            "<!DOCTYPE html><html><head><meta charset=\"UTF-8\">",
            "<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">",
            "<style>*{{margin:0;padding:0;box-sizing:border-box}}",
            "html,body{{height:100%}}",
            "body{{display:flex;flex-direction:column;align-items:center;justify-content:center;",
            "background:{bg};color:{accent};user-select:none;",
            "font-family:-apple-system,BlinkMacSystemFont,\"Segoe UI\",Roboto,Helvetica,Arial,sans-serif}}",
            ".icon{{width:{size}px;height:{size}px}}",
            ".label{{margin-top:12px;font-size:20px;font-weight:bold}}</style></head>",
            "<body><div class=\"icon\" data-icon=\"{icon}\">{svg}</div>",
            "<div class=\"label\">{label}</div></body></html>"
        ),
        bg = screen.background_color,
        accent = screen.accent_color,
        size = screen.icon_size,
        icon = screen.icon,
        svg = WIFI_OFF_SVG,
        label = screen.label,
    )
}

/// Centered spinner on a transparent page, shown above the content view.
pub fn loading_overlay_html() -> String {
    concat!(
        "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>",
        "html,body{margin:0;height:100%;background:transparent}",
        "body{display:flex;align-items:center;justify-content:center}",
        ".spinner{width:36px;height:36px;border:4px solid rgba(0,0,0,0.12);",
        "border-top-color:#007AFF;border-radius:50%;animation:spin .8s linear infinite}",
        "@keyframes spin{to{transform:rotate(360deg)}}",
        "</style></head><body><div class=\"spinner\" role=\"progressbar\"></div></body></html>"
    )
    .to_string()
}
