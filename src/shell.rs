//! BrowserShell: the single component of the application.
//!
//! Owns the shell state, wires the connectivity watcher and back-navigation
//! router to the platform sources while active, and turns the state into a
//! [`RenderTree`] for the host to display.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::managers::back_navigation::{BackNavigationRouter, ContentSlot};
use crate::managers::connectivity_watcher::ConnectivityWatcher;
use crate::platform::sources::{BackSignalSource, ContentView, ReachabilitySource};
use crate::types::errors::ShellError;
use crate::types::shell::{ContentEvent, RenderTree, ShellEvent, ShellState};

pub struct BrowserShell {
    state: Rc<Cell<ShellState>>,
    content: ContentSlot,
    watcher: Option<ConnectivityWatcher>,
    router: Option<BackNavigationRouter>,
}

impl BrowserShell {
    pub fn new() -> Self {
        Self {
            state: Rc::new(Cell::new(ShellState::default())),
            content: Rc::new(RefCell::new(None)),
            watcher: None,
            router: None,
        }
    }

    /// Mounts the shell: fresh state, one reachability fetch plus a change
    /// subscription, and a back-signal handler.
    pub fn activate(
        &mut self,
        reachability: &dyn ReachabilitySource,
        back_signal: &dyn BackSignalSource,
    ) -> Result<(), ShellError> {
        if self.is_active() {
            return Err(ShellError::AlreadyActive);
        }
        self.state.set(ShellState::default());
        self.watcher = Some(ConnectivityWatcher::start(reachability, self.state.clone()));
        self.router = Some(BackNavigationRouter::start(
            back_signal,
            self.state.clone(),
            self.content.clone(),
        ));
        tracing::debug!("shell activated");
        Ok(())
    }

    /// Unmounts the shell, releasing both registrations.
    pub fn deactivate(&mut self) -> Result<(), ShellError> {
        if !self.is_active() {
            return Err(ShellError::NotActive);
        }
        if let Some(mut watcher) = self.watcher.take() {
            watcher.stop();
        }
        if let Some(mut router) = self.router.take() {
            router.stop();
        }
        self.content.borrow_mut().take();
        tracing::debug!("shell deactivated");
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.watcher.is_some()
    }

    /// Applies a lifecycle event from the content view. Ignored while inactive.
    pub fn handle_content_event(&self, event: ContentEvent) {
        if !self.is_active() {
            tracing::trace!(?event, "content event while inactive");
            return;
        }
        tracing::debug!(?event, "content event");
        self.state.set(self.state.get().apply(ShellEvent::Content(event)));
    }

    /// Gives the back router access to the mounted content view.
    pub fn attach_content_view(&self, view: Box<dyn ContentView>) {
        *self.content.borrow_mut() = Some(view);
    }

    /// Takes the content view back, typically because the host unmounted it.
    pub fn detach_content_view(&self) -> Option<Box<dyn ContentView>> {
        self.content.borrow_mut().take()
    }

    pub fn has_content_view(&self) -> bool {
        self.content.borrow().is_some()
    }

    pub fn state(&self) -> ShellState {
        self.state.get()
    }

    pub fn render(&self) -> RenderTree {
        RenderTree::from(self.state.get())
    }
}

impl Default for BrowserShell {
    fn default() -> Self {
        Self::new()
    }
}
