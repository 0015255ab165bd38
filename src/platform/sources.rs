//! Platform collaborators the shell talks to.
//!
//! Everything here is single-threaded: listeners are `Rc` closures invoked on
//! the UI event loop. Off-thread producers (the network monitor) hand their
//! results to the event loop first, which then calls [`ReachabilityHub::notify`]
//! or [`ReachabilityHub::resolve_fetch`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::types::shell::Reachability;

/// RAII registration handle. Dropping it (or calling [`Subscription::release`])
/// runs the release action exactly once.
#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Releases the registration now.
    pub fn release(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("released", &self.release.is_none())
            .finish()
    }
}

/// Source of network reachability.
pub trait ReachabilitySource {
    /// One-shot query. `on_result` is called later on the event loop, or never.
    fn fetch(&self, on_result: Box<dyn FnOnce(Reachability)>);
    /// Persistent subscription to reachability changes.
    fn subscribe(&self, listener: Box<dyn Fn(Reachability)>) -> Subscription;
}

/// Single-slot source of the platform back-navigation signal.
pub trait BackSignalSource {
    /// The handler returns `true` when it consumed the signal.
    fn register(&self, handler: Box<dyn Fn() -> bool>) -> Subscription;
}

/// Imperative surface of the embedded content view.
pub trait ContentView {
    fn go_back(&self);
    fn go_forward(&self);
}

// ─── ReachabilityHub ───

type Listener = Rc<dyn Fn(Reachability)>;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    pending: HashMap<u64, Box<dyn FnOnce(Reachability)>>,
}

/// Event-loop side of the reachability source.
///
/// `request_fetch` is how a fetch reaches the actual prober (for the desktop
/// host, a command sent to the network monitor thread). The answer comes back
/// through [`ReachabilityHub::resolve_fetch`] with the same id.
pub struct ReachabilityHub {
    inner: Rc<RefCell<HubInner>>,
    request_fetch: Box<dyn Fn(u64)>,
}

impl ReachabilityHub {
    pub fn new(request_fetch: impl Fn(u64) + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner::default())),
            request_fetch: Box::new(request_fetch),
        }
    }

    /// Delivers a change notification to every current listener.
    pub fn notify(&self, status: Reachability) {
        // Listeners may subscribe or release while being called.
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(status);
        }
    }

    /// Completes a pending fetch. Unknown ids are ignored.
    pub fn resolve_fetch(&self, request_id: u64, status: Reachability) {
        let callback = self.inner.borrow_mut().pending.remove(&request_id);
        match callback {
            Some(callback) => callback(status),
            None => tracing::debug!(request_id, "dropping result for unknown fetch"),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn pending_fetches(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    fn next_id(&self) -> u64 {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        inner.next_id
    }
}

impl ReachabilitySource for ReachabilityHub {
    fn fetch(&self, on_result: Box<dyn FnOnce(Reachability)>) {
        let id = self.next_id();
        self.inner.borrow_mut().pending.insert(id, on_result);
        (self.request_fetch)(id);
    }

    fn subscribe(&self, listener: Box<dyn Fn(Reachability)>) -> Subscription {
        let id = self.next_id();
        self.inner
            .borrow_mut()
            .listeners
            .push((id, Rc::from(listener)));

        let weak: Weak<RefCell<HubInner>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }
}

// ─── BackSignalSlot ───

type BackHandler = Rc<dyn Fn() -> bool>;

#[derive(Default)]
struct SlotInner {
    next_id: u64,
    handler: Option<(u64, BackHandler)>,
}

/// Holds at most one back-signal handler. A new registration replaces the
/// previous one; releasing a replaced registration is a no-op.
#[derive(Default)]
pub struct BackSignalSlot {
    inner: Rc<RefCell<SlotInner>>,
}

impl BackSignalSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invokes the registered handler. `false` means the platform should
    /// perform its default action.
    pub fn dispatch(&self) -> bool {
        let handler = self
            .inner
            .borrow()
            .handler
            .as_ref()
            .map(|(_, h)| h.clone());
        match handler {
            Some(handler) => handler(),
            None => false,
        }
    }

    pub fn is_registered(&self) -> bool {
        self.inner.borrow().handler.is_some()
    }
}

impl BackSignalSource for BackSignalSlot {
    fn register(&self, handler: Box<dyn Fn() -> bool>) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            inner.next_id += 1;
            let id = inner.next_id;
            if inner.handler.is_some() {
                tracing::warn!("replacing an existing back-signal handler");
            }
            inner.handler = Some((id, Rc::from(handler)));
            id
        };

        let weak = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                let mut inner = inner.borrow_mut();
                if matches!(inner.handler, Some((hid, _)) if hid == id) {
                    inner.handler = None;
                }
            }
        })
    }
}
