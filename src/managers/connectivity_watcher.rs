//! Connectivity watcher.
//!
//! Performs one immediate fetch on start and keeps a subscription open until
//! stopped. Indeterminate results never touch the state, so the optimistic
//! default survives a failed initial check.

use std::cell::Cell;
use std::rc::Rc;

use crate::platform::sources::{ReachabilitySource, Subscription};
use crate::types::shell::{Reachability, ShellEvent, ShellState};

pub struct ConnectivityWatcher {
    alive: Rc<Cell<bool>>,
    subscription: Option<Subscription>,
}

impl ConnectivityWatcher {
    /// Starts watching, writing every determinate status into `state`.
    pub fn start(source: &dyn ReachabilitySource, state: Rc<Cell<ShellState>>) -> Self {
        let alive = Rc::new(Cell::new(true));

        {
            let alive = alive.clone();
            let state = state.clone();
            source.fetch(Box::new(move |status| {
                // The fetch may resolve after the shell unmounted.
                if alive.get() {
                    apply_status(&state, status, "fetch");
                }
            }));
        }

        let subscription = {
            let alive = alive.clone();
            source.subscribe(Box::new(move |status| {
                if alive.get() {
                    apply_status(&state, status, "change");
                }
            }))
        };

        Self {
            alive,
            subscription: Some(subscription),
        }
    }

    /// Releases the subscription and disarms any outstanding fetch.
    pub fn stop(&mut self) {
        self.alive.set(false);
        if let Some(subscription) = self.subscription.take() {
            subscription.release();
        }
    }

    pub fn is_running(&self) -> bool {
        self.subscription.is_some()
    }
}

impl Drop for ConnectivityWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

fn apply_status(state: &Cell<ShellState>, status: Reachability, origin: &'static str) {
    let Some(connected) = status else {
        tracing::debug!(origin, "ignoring indeterminate reachability");
        return;
    };
    let before = state.get();
    state.set(before.apply(ShellEvent::Reachability(status)));
    if before.is_connected != connected {
        tracing::info!(origin, connected, "connectivity changed");
    }
}
