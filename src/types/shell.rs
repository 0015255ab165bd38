use serde::{Deserialize, Serialize};

/// The single address the content view is ever pointed at.
pub const TARGET_URL: &str = "https://mrchatur.com/";

/// Reachability as reported by the platform: `None` means indeterminate.
pub type Reachability = Option<bool>;

/// Shell-scoped state. Each field mirrors the most recent corresponding event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShellState {
    pub can_navigate_back: bool,
    pub is_connected: bool,
    pub is_loading: bool,
}

impl Default for ShellState {
    /// Optimistic connectivity, loading until the first page arrives.
    fn default() -> Self {
        Self {
            can_navigate_back: false,
            is_connected: true,
            is_loading: true,
        }
    }
}

/// Navigation history availability reported by the content view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// Lifecycle events emitted by the content view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ContentEvent {
    LoadStart,
    LoadEnd,
    NavigationStateChanged(NavigationState),
}

/// Every input the shell state reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    Reachability(Reachability),
    Content(ContentEvent),
}

impl ShellState {
    /// Pure transition function. Indeterminate reachability leaves the state untouched.
    pub fn apply(self, event: ShellEvent) -> Self {
        match event {
            ShellEvent::Reachability(Some(connected)) => Self {
                is_connected: connected,
                ..self
            },
            ShellEvent::Reachability(None) => self,
            ShellEvent::Content(ContentEvent::LoadStart) => Self {
                is_loading: true,
                ..self
            },
            ShellEvent::Content(ContentEvent::LoadEnd) => Self {
                is_loading: false,
                ..self
            },
            ShellEvent::Content(ContentEvent::NavigationStateChanged(nav)) => Self {
                can_navigate_back: nav.can_go_back,
                ..self
            },
        }
    }
}

/// The placeholder shown instead of the content view while offline.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct OfflineScreen {
    pub icon: &'static str,
    pub icon_size: u32,
    pub label: &'static str,
    pub accent_color: &'static str,
    pub background_color: &'static str,
}

impl Default for OfflineScreen {
    fn default() -> Self {
        Self {
            icon: "wifi-off",
            icon_size: 50,
            label: "No Internet Connection",
            accent_color: "#FF3B30",
            background_color: "#F5F8FA",
        }
    }
}

/// What the host should display.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum RenderTree {
    /// Only the offline screen; the content view must not be mounted.
    Offline(OfflineScreen),
    /// The content view at `source`, optionally covered by a centered spinner.
    Content {
        source: &'static str,
        loading_overlay: bool,
    },
}

impl RenderTree {
    pub fn is_offline(&self) -> bool {
        matches!(self, RenderTree::Offline(_))
    }

    pub fn has_content_view(&self) -> bool {
        matches!(self, RenderTree::Content { .. })
    }

    pub fn shows_loading_overlay(&self) -> bool {
        matches!(
            self,
            RenderTree::Content {
                loading_overlay: true,
                ..
            }
        )
    }
}

impl From<ShellState> for RenderTree {
    fn from(state: ShellState) -> Self {
        if !state.is_connected {
            return RenderTree::Offline(OfflineScreen::default());
        }
        RenderTree::Content {
            source: TARGET_URL,
            loading_overlay: state.is_loading,
        }
    }
}
