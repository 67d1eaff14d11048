//! Property-based tests for the gallery state machine
//!
//! Uses proptest to drive random event sequences and check the selection
//! and resource invariants after every step.

use proptest::prelude::*;
use connecting_minds_core::{
    Card, DetailContent, DetailProducer, Gallery, GalleryEvent, RecordingHost, SiteContent,
    Transition,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// ============================================================================
// Strategy Generators
// ============================================================================

fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => Just("Escape".to_string()),
        1 => Just("Enter".to_string()),
        1 => Just("a".to_string()),
        1 => Just("Tab".to_string()),
    ]
}

/// Events the UI can route into a gallery of up to 6 cards (indices past
/// the end included on purpose).
fn event_strategy() -> impl Strategy<Value = GalleryEvent> {
    prop_oneof![
        4 => (0..6usize).prop_map(GalleryEvent::Activate),
        2 => key_strategy().prop_map(GalleryEvent::KeyDown),
        2 => any::<bool>().prop_map(|inside_panel| GalleryEvent::PointerDown { inside_panel }),
        1 => Just(GalleryEvent::CloseControl),
        1 => Just(GalleryEvent::BackControl),
    ]
}

fn events_strategy(max: usize) -> impl Strategy<Value = Vec<GalleryEvent>> {
    prop::collection::vec(event_strategy(), 0..max)
}

/// Cards whose producers count how often they ran.
fn counting_cards(n: usize) -> (Vec<Card>, Vec<Arc<AtomicUsize>>) {
    let counters: Vec<_> = (0..n).map(|_| Arc::new(AtomicUsize::new(0))).collect();
    let cards = counters
        .iter()
        .enumerate()
        .map(|(i, counter)| {
            let counter = counter.clone();
            Card::new(
                format!("Card {}", i),
                "desc",
                "img.jpg",
                "https://example.com",
                DetailProducer::new(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                    DetailContent::paragraph(["detail"])
                }),
            )
        })
        .collect();
    (cards, counters)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Scroll lock and listeners are held exactly while a card is active
    #[test]
    fn scroll_lock_iff_active(events in events_strategy(60)) {
        let host = RecordingHost::new();
        let mut gallery = Gallery::new(SiteContent::builtin().cards, host.clone());

        for event in events {
            gallery.handle(event);
            let active = gallery.active().is_some();
            prop_assert_eq!(gallery.is_scroll_locked(), active);
            prop_assert_eq!(host.is_scroll_locked(), active);
            prop_assert_eq!(host.active_listeners(), usize::from(active));
        }

        drop(gallery);
        prop_assert!(!host.is_scroll_locked());
        prop_assert_eq!(host.active_listeners(), 0);
        prop_assert_eq!(host.attach_count(), host.detach_count());
        prop_assert_eq!(host.lock_count(), host.unlock_count());
    }

    /// The active card is always the last one successfully activated
    #[test]
    fn last_activation_wins(events in events_strategy(60)) {
        let mut gallery = Gallery::new(SiteContent::builtin().cards, RecordingHost::new());
        let len = gallery.cards().len();
        let mut expected: Option<usize> = None;

        for event in events {
            match &event {
                GalleryEvent::Activate(i) if *i < len => expected = Some(*i),
                GalleryEvent::Activate(_) => {}
                GalleryEvent::KeyDown(k) if k == "Escape" => expected = None,
                GalleryEvent::KeyDown(_) => {}
                GalleryEvent::PointerDown { inside_panel } => {
                    if !inside_panel {
                        expected = None;
                    }
                }
                GalleryEvent::CloseControl | GalleryEvent::BackControl => expected = None,
            }
            gallery.handle(event);
            prop_assert_eq!(gallery.active_index(), expected);
        }
    }

    /// Dismissal events never change anything when no card is active
    #[test]
    fn dismiss_when_idle_is_noop(key in key_strategy()) {
        let host = RecordingHost::new();
        let mut gallery = Gallery::new(SiteContent::builtin().cards, host.clone());

        prop_assert_eq!(gallery.handle(GalleryEvent::KeyDown(key)), Transition::Unchanged);
        prop_assert_eq!(
            gallery.handle(GalleryEvent::PointerDown { inside_panel: false }),
            Transition::Unchanged
        );
        prop_assert_eq!(gallery.handle(GalleryEvent::CloseControl), Transition::Unchanged);
        prop_assert_eq!(host.unlock_count(), 0);
    }

    /// Producers only run for the card that is active when the view is built
    #[test]
    fn producers_run_only_while_active(events in events_strategy(40)) {
        let (cards, counters) = counting_cards(4);
        let mut gallery = Gallery::new(cards, RecordingHost::new());
        let mut expected = vec![0usize; 4];

        for event in events {
            gallery.handle(event);
            let view = gallery.view();
            if let Some(i) = gallery.active_index() {
                expected[i] += 1;
                prop_assert!(view.overlay.is_some());
            } else {
                prop_assert!(view.is_list_only());
            }
            for (i, counter) in counters.iter().enumerate() {
                prop_assert_eq!(counter.load(Ordering::SeqCst), expected[i]);
            }
        }
    }
}
