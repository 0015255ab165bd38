//! Page-load handling for the desktop host, kept free of any window or
//! webview so it runs in tests.
//!
//! Every content view the host builds gets a new mount generation. Page-load
//! callbacks carry the generation of the view that fired them; events from a
//! view that has since been dropped are ignored.

use std::cell::RefCell;
use std::rc::Rc;

use crate::managers::history_tracker::HistoryTracker;
use crate::shell::BrowserShell;
use crate::types::shell::ContentEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Started,
    Finished,
}

/// A page-load callback from a content view, tagged with its mount generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLoad {
    pub mount: u64,
    pub phase: LoadPhase,
    pub url: String,
}

/// Bookkeeping for the content view that is currently mounted.
#[derive(Debug, Clone)]
pub struct ContentMount {
    pub generation: u64,
    pub history: Rc<RefCell<HistoryTracker>>,
}

impl ContentMount {
    pub fn new(generation: u64) -> Self {
        Self {
            generation,
            history: Rc::new(RefCell::new(HistoryTracker::new())),
        }
    }
}

/// Maps a page-load callback to the content events it produces, in order.
///
/// Returns nothing when no view is mounted or the event belongs to an older
/// mount. A finished load reports the navigation state before load-end.
pub fn page_load_events(current: Option<&ContentMount>, load: &PageLoad) -> Vec<ContentEvent> {
    let Some(mount) = current.filter(|m| m.generation == load.mount) else {
        tracing::trace!(mount = load.mount, "page load from an unmounted view");
        return Vec::new();
    };
    match load.phase {
        LoadPhase::Started => {
            mount.history.borrow_mut().begin_load(&load.url);
            vec![ContentEvent::LoadStart]
        }
        LoadPhase::Finished => {
            let navigation = mount.history.borrow_mut().commit(&load.url);
            vec![
                ContentEvent::NavigationStateChanged(navigation),
                ContentEvent::LoadEnd,
            ]
        }
    }
}

/// Feeds a page-load callback into the shell.
pub fn handle_page_load(shell: &BrowserShell, current: Option<&ContentMount>, load: &PageLoad) {
    for event in page_load_events(current, load) {
        shell.handle_content_event(event);
    }
}
