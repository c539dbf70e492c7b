//! Property-based invariant tests for the form controller and carousel.
//!
//! Verifies:
//! 1. Carousel index stays in [0, len) for any next/prev/go_to sequence
//! 2. Label resolution returns the catalog label for every catalog value
//! 3. Label resolution falls back to the raw value, or "Not specified" when empty
//! 4. handle_change writes one key and leaves the others alone
//! 5. The redirect text parameter decodes back to the composed message
//! 6. Message composition is deterministic

use portfolio_site::{
    carousel::Carousel,
    catalog::{
        budget_label, resolve_label, service_type_label, timeline_label, BUDGET_OPTIONS,
        NOT_SPECIFIED, SERVICE_TYPES, TIMELINE_OPTIONS,
    },
    contact::{FieldKey, FormKind, FormState},
};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Step {
    Next,
    Prev,
    GoTo(usize),
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Next),
        Just(Step::Prev),
        any::<usize>().prop_map(Step::GoTo),
    ]
}

fn arb_service_key() -> impl Strategy<Value = FieldKey> {
    proptest::sample::select(FormKind::ServiceRequest.keys().to_vec())
}

fn arb_filled_form() -> impl Strategy<Value = FormState> {
    (
        prop_oneof![Just(FormKind::Contact), Just(FormKind::ServiceRequest)],
        proptest::collection::vec(any::<String>(), 6),
    )
        .prop_map(|(kind, texts)| {
            let mut form = FormState::new(kind);
            for (key, text) in kind.keys().iter().zip(texts) {
                form.handle_change(*key, text).expect("key belongs to form");
            }
            form
        })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Carousel bound
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn carousel_index_in_bounds(len in 1usize..50, steps in proptest::collection::vec(arb_step(), 0..200)) {
        let mut c = Carousel::new(len);
        for step in steps {
            let i = match step {
                Step::Next => c.next(),
                Step::Prev => c.prev(),
                Step::GoTo(i) => c.go_to(i),
            };
            prop_assert!(i < len);
            prop_assert_eq!(i, c.current());
        }
    }

    #[test]
    fn carousel_next_then_prev_is_identity(len in 1usize..50, start in 0usize..50) {
        let mut c = Carousel::new(len);
        let before = c.go_to(start);
        c.next();
        prop_assert_eq!(c.prev(), before);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2-3. Label resolution
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn catalog_values_resolve_to_labels(i in 0usize..16) {
        for options in [SERVICE_TYPES, BUDGET_OPTIONS, TIMELINE_OPTIONS] {
            let o = options[i % options.len()];
            prop_assert_eq!(resolve_label(options, o.value), Some(o.label));
        }
    }

    #[test]
    fn unknown_values_fall_back(value in "[a-z0-9 ]{0,12}") {
        prop_assume!(SERVICE_TYPES.iter().all(|o| o.value != value));
        prop_assume!(BUDGET_OPTIONS.iter().all(|o| o.value != value));
        prop_assume!(TIMELINE_OPTIONS.iter().all(|o| o.value != value));
        let expected = if value.is_empty() { NOT_SPECIFIED.to_string() } else { value.clone() };
        prop_assert_eq!(service_type_label(&value), expected.clone());
        prop_assert_eq!(budget_label(&value), expected.clone());
        prop_assert_eq!(timeline_label(&value), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4-6. Form controller
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn handle_change_is_isolated(key in arb_service_key(), text in any::<String>()) {
        let mut form = FormState::new(FormKind::ServiceRequest);
        form.handle_change(key, text.clone()).expect("key belongs to form");
        for k in FormKind::ServiceRequest.keys() {
            if *k == key {
                prop_assert_eq!(form.value(*k), text.as_str());
            } else {
                prop_assert_eq!(form.value(*k), "");
            }
        }
    }

    #[test]
    fn redirect_text_round_trips(form in arb_filled_form()) {
        let url = form.redirect_url();
        let (_, encoded) = url.split_once("?text=").expect("url has a text parameter");
        let decoded = urlencoding::decode(encoded).expect("valid utf-8");
        let composed = form.compose_message();
        prop_assert_eq!(decoded.as_ref(), composed.as_str());
    }

    #[test]
    fn composition_is_deterministic(form in arb_filled_form()) {
        prop_assert_eq!(form.compose_message(), form.clone().compose_message());
    }
}
