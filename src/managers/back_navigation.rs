//! Back-navigation router.
//!
//! The registered handler reads the shared state cell and the content-view
//! slot at dispatch time, never a captured copy.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::platform::sources::{BackSignalSource, ContentView, Subscription};
use crate::types::shell::ShellState;

/// The host's handle on the currently mounted content view, if any.
pub type ContentSlot = Rc<RefCell<Option<Box<dyn ContentView>>>>;

/// Dispatch policy for a single back signal. Returns whether it was consumed.
pub fn route_back_signal(can_navigate_back: bool, content: Option<&dyn ContentView>) -> bool {
    match content {
        Some(view) if can_navigate_back => {
            view.go_back();
            true
        }
        _ => false,
    }
}

pub struct BackNavigationRouter {
    registration: Option<Subscription>,
}

impl BackNavigationRouter {
    pub fn start(
        source: &dyn BackSignalSource,
        state: Rc<Cell<ShellState>>,
        content: ContentSlot,
    ) -> Self {
        let registration = source.register(Box::new(move || {
            let can_navigate_back = state.get().can_navigate_back;
            let slot = content.borrow();
            let consumed = route_back_signal(can_navigate_back, slot.as_deref());
            tracing::debug!(can_navigate_back, consumed, "back signal");
            consumed
        }));
        Self {
            registration: Some(registration),
        }
    }

    pub fn stop(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.release();
        }
    }

    pub fn is_registered(&self) -> bool {
        self.registration.is_some()
    }
}

impl Drop for BackNavigationRouter {
    fn drop(&mut self) {
        self.stop();
    }
}
