//! Shared doubles for the integration and property tests.
//!
//! Each test binary pulls this in with `#[path = "../support/mod.rs"] mod support;`.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use webshell::platform::sources::{
    BackSignalSlot, BackSignalSource, ContentView, ReachabilityHub, ReachabilitySource,
    Subscription,
};
use webshell::shell::BrowserShell;

/// Content view that counts navigation calls.
#[derive(Clone, Default)]
pub struct RecordingView {
    pub backs: Rc<Cell<u32>>,
    pub forwards: Rc<Cell<u32>>,
}

impl ContentView for RecordingView {
    fn go_back(&self) {
        self.backs.set(self.backs.get() + 1);
    }
    fn go_forward(&self) {
        self.forwards.set(self.forwards.get() + 1);
    }
}

/// Acquire/release bookkeeping for one kind of registration.
#[derive(Clone, Default)]
pub struct Ledger {
    acquired: Rc<Cell<usize>>,
    released: Rc<Cell<usize>>,
    max_outstanding: Rc<Cell<usize>>,
}

impl Ledger {
    fn acquire(&self) {
        self.acquired.set(self.acquired.get() + 1);
        self.max_outstanding
            .set(self.max_outstanding.get().max(self.outstanding()));
    }

    fn release(&self) {
        self.released.set(self.released.get() + 1);
    }

    pub fn acquired(&self) -> usize {
        self.acquired.get()
    }

    pub fn released(&self) -> usize {
        self.released.get()
    }

    pub fn outstanding(&self) -> usize {
        self.acquired.get() - self.released.get()
    }

    pub fn max_outstanding(&self) -> usize {
        self.max_outstanding.get()
    }
}

/// `ReachabilityHub` that remembers fetch ids and counts subscriptions.
pub struct CountingReachability {
    pub hub: ReachabilityHub,
    pub fetch_ids: Rc<RefCell<Vec<u64>>>,
    pub ledger: Ledger,
}

impl CountingReachability {
    pub fn new() -> Self {
        let fetch_ids = Rc::new(RefCell::new(Vec::new()));
        let log = fetch_ids.clone();
        Self {
            hub: ReachabilityHub::new(move |id| log.borrow_mut().push(id)),
            fetch_ids,
            ledger: Ledger::default(),
        }
    }

    pub fn notify(&self, status: Option<bool>) {
        self.hub.notify(status);
    }

    /// Resolves the most recent fetch request.
    pub fn resolve_last_fetch(&self, status: Option<bool>) {
        let id = *self.fetch_ids.borrow().last().expect("a fetch was requested");
        self.hub.resolve_fetch(id, status);
    }
}

impl ReachabilitySource for CountingReachability {
    fn fetch(&self, on_result: Box<dyn FnOnce(Option<bool>)>) {
        self.hub.fetch(on_result);
    }

    fn subscribe(&self, listener: Box<dyn Fn(Option<bool>)>) -> Subscription {
        self.ledger.acquire();
        let inner = self.hub.subscribe(listener);
        let ledger = self.ledger.clone();
        Subscription::new(move || {
            inner.release();
            ledger.release();
        })
    }
}

/// `BackSignalSlot` that counts registrations.
#[derive(Default)]
pub struct CountingBackSignal {
    pub slot: BackSignalSlot,
    pub ledger: Ledger,
}

impl CountingBackSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&self) -> bool {
        self.slot.dispatch()
    }
}

impl BackSignalSource for CountingBackSignal {
    fn register(&self, handler: Box<dyn Fn() -> bool>) -> Subscription {
        self.ledger.acquire();
        let inner = self.slot.register(handler);
        let ledger = self.ledger.clone();
        Subscription::new(move || {
            inner.release();
            ledger.release();
        })
    }
}

/// An active shell with a recording content view attached.
pub struct Harness {
    pub shell: BrowserShell,
    pub reachability: CountingReachability,
    pub back: CountingBackSignal,
    pub view: RecordingView,
}

impl Harness {
    pub fn mounted() -> Self {
        let reachability = CountingReachability::new();
        let back = CountingBackSignal::new();
        let view = RecordingView::default();
        let mut shell = BrowserShell::new();
        shell
            .activate(&reachability, &back)
            .expect("fresh shell activates");
        shell.attach_content_view(Box::new(view.clone()));
        Self {
            shell,
            reachability,
            back,
            view,
        }
    }
}
