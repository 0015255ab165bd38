//! Property-based tests for back-signal routing.
//!
//! For every navigation state, a back signal calls the content view's
//! back-navigation exactly once and is consumed when backward history exists,
//! and is neither forwarded nor consumed otherwise.

#[path = "../support/mod.rs"]
mod support;

use proptest::prelude::*;
use support::Harness;
use webshell::types::shell::{ContentEvent, NavigationState};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn back_signal_follows_latest_can_go_back(history in prop::collection::vec(any::<bool>(), 1..40)) {
        let h = Harness::mounted();

        for can_go_back in history {
            h.shell.handle_content_event(ContentEvent::NavigationStateChanged(NavigationState {
                can_go_back,
                can_go_forward: false,
            }));

            let before = h.view.backs.get();
            let consumed = h.back.press();

            prop_assert_eq!(consumed, can_go_back);
            prop_assert_eq!(h.view.backs.get() - before, u32::from(can_go_back));
        }

        // One registration served every press.
        prop_assert_eq!(h.back.ledger.acquired(), 1);
    }

    #[test]
    fn forward_history_never_affects_back_routing(can_go_forward in any::<bool>()) {
        let h = Harness::mounted();
        h.shell.handle_content_event(ContentEvent::NavigationStateChanged(NavigationState {
            can_go_back: false,
            can_go_forward,
        }));
        prop_assert!(!h.back.press());
        prop_assert_eq!(h.view.forwards.get(), 0);
    }
}
