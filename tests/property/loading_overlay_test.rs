//! Property-based tests for the loading overlay lifecycle.
//!
//! Load-start shows the overlay and load-end hides it, whatever other events
//! are interleaved; repeated load-starts keep it shown.

#[path = "../support/mod.rs"]
mod support;

use proptest::prelude::*;
use support::Harness;
use webshell::types::shell::{ContentEvent, NavigationState};

/// Events that must not influence the overlay while connected.
#[derive(Debug, Clone)]
enum Noise {
    Navigation(bool),
    StillConnected,
    Indeterminate,
}

fn arb_noise() -> impl Strategy<Value = Vec<Noise>> {
    prop::collection::vec(
        prop_oneof![
            any::<bool>().prop_map(Noise::Navigation),
            Just(Noise::StillConnected),
            Just(Noise::Indeterminate),
        ],
        0..8,
    )
}

fn apply_noise(h: &Harness, noise: &[Noise]) {
    for n in noise {
        match n {
            Noise::Navigation(can_go_back) => {
                h.shell
                    .handle_content_event(ContentEvent::NavigationStateChanged(NavigationState {
                        can_go_back: *can_go_back,
                        can_go_forward: false,
                    }))
            }
            Noise::StillConnected => h.reachability.notify(Some(true)),
            Noise::Indeterminate => h.reachability.notify(None),
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn start_then_end_shows_then_hides(
        before in arb_noise(),
        between in arb_noise(),
        after in arb_noise(),
    ) {
        let h = Harness::mounted();
        h.shell.handle_content_event(ContentEvent::LoadEnd);
        prop_assert!(!h.shell.render().shows_loading_overlay());

        apply_noise(&h, &before);
        h.shell.handle_content_event(ContentEvent::LoadStart);
        prop_assert!(h.shell.render().shows_loading_overlay());

        apply_noise(&h, &between);
        prop_assert!(h.shell.render().shows_loading_overlay());

        h.shell.handle_content_event(ContentEvent::LoadEnd);
        prop_assert!(!h.shell.render().shows_loading_overlay());

        apply_noise(&h, &after);
        prop_assert!(!h.shell.render().shows_loading_overlay());
    }

    #[test]
    fn repeated_starts_stay_loading(starts in 1usize..10, noise in arb_noise()) {
        let h = Harness::mounted();
        for _ in 0..starts {
            h.shell.handle_content_event(ContentEvent::LoadStart);
            apply_noise(&h, &noise);
            prop_assert!(h.shell.state().is_loading);
        }
        h.shell.handle_content_event(ContentEvent::LoadEnd);
        prop_assert!(!h.shell.state().is_loading);
    }

    #[test]
    fn overlay_tracks_last_load_event(events in prop::collection::vec(any::<bool>(), 0..40)) {
        let h = Harness::mounted();
        let mut loading = true;
        for is_start in events {
            let event = if is_start { ContentEvent::LoadStart } else { ContentEvent::LoadEnd };
            h.shell.handle_content_event(event);
            loading = is_start;
            prop_assert_eq!(h.shell.render().shows_loading_overlay(), loading);
        }
        prop_assert_eq!(h.shell.state().is_loading, loading);
    }
}
