//! History tracker for the embedded content view.
//!
//! Desktop webviews report committed page loads but not whether backward
//! history exists. The tracker rebuilds the session history from committed
//! URLs plus the traversals the shell itself asked for, and derives the
//! navigation state after every commit.
//!
//! Same-document navigations (`pushState`, fragment changes) do not fire a
//! page load and are therefore not tracked. A traversal the shell requested
//! that lands on such an entry produces no load; it is discarded once a
//! load for some other URL shows up.

use crate::types::shell::NavigationState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Traversal {
    Back,
    Forward,
}

#[derive(Debug, Default)]
pub struct HistoryTracker {
    entries: Vec<String>,
    index: usize,
    pending: Option<Traversal>,
}

impl HistoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the next commit as a backward traversal. Returns `false` (and marks
    /// nothing) when there is no earlier entry.
    pub fn request_back(&mut self) -> bool {
        if self.navigation_state().can_go_back {
            self.pending = Some(Traversal::Back);
            true
        } else {
            false
        }
    }

    /// Marks the next commit as a forward traversal.
    pub fn request_forward(&mut self) -> bool {
        if self.navigation_state().can_go_forward {
            self.pending = Some(Traversal::Forward);
            true
        } else {
            false
        }
    }

    /// Called when a page load starts. A load that does not lead to the
    /// entry a pending traversal expects cancels that traversal; the
    /// traversal popped a same-document entry and never loaded a page.
    pub fn begin_load(&mut self, url: &str) {
        if let Some(traversal) = self.pending {
            if self.neighbour(traversal) != Some(url) {
                self.pending = None;
            }
        }
    }

    /// Records a committed page load and returns the resulting navigation state.
    ///
    /// A pending traversal is honoured only when `url` is the entry it points
    /// at; any other commit is a new navigation.
    pub fn commit(&mut self, url: &str) -> NavigationState {
        match self.pending.take() {
            Some(traversal) if self.neighbour(traversal) == Some(url) => match traversal {
                Traversal::Back => self.index -= 1,
                Traversal::Forward => self.index += 1,
            },
            _ => {
                if self.entries.is_empty() {
                    self.entries.push(url.to_string());
                    self.index = 0;
                } else if self.entries[self.index] != url {
                    self.entries.truncate(self.index + 1);
                    self.entries.push(url.to_string());
                    self.index += 1;
                }
            }
        }
        self.navigation_state()
    }

    fn neighbour(&self, traversal: Traversal) -> Option<&str> {
        let index = match traversal {
            Traversal::Back => self.index.checked_sub(1)?,
            Traversal::Forward => self.index + 1,
        };
        self.entries.get(index).map(String::as_str)
    }

    pub fn navigation_state(&self) -> NavigationState {
        NavigationState {
            can_go_back: !self.entries.is_empty() && self.index > 0,
            can_go_forward: self.index + 1 < self.entries.len(),
        }
    }

    pub fn current_url(&self) -> Option<&str> {
        self.entries.get(self.index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
