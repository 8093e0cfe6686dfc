// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use graft::{apply_overlay, Overlay};
use proptest::prelude::*;
use serde_yaml::{Mapping, Value};

/// Arbitrary YAML-like trees. Keys are drawn from a short lowercase
/// alphabet that can never spell the overlay's target key, so no generated
/// document contains a match.
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
            prop::collection::vec(("[a-d]{1,4}", inner), 0..4).prop_map(|entries| {
                let mut map = Mapping::new();
                for (key, value) in entries {
                    map.insert(Value::String(key), value);
                }
                Value::Mapping(map)
            }),
        ]
    })
}

fn probe_overlay() -> Overlay {
    "graft-probe:\n  metadata:\n    name: never-present\n"
        .parse()
        .expect("probe overlay parses")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_walker_never_panics(mut doc in arb_value()) {
        let overlay = probe_overlay();
        let _ = apply_overlay(&mut doc, &overlay);
    }

    #[test]
    fn prop_no_match_never_mutates(mut doc in arb_value()) {
        let overlay = probe_overlay();
        let before = doc.clone();
        let matched = apply_overlay(&mut doc, &overlay);
        prop_assert!(!matched);
        prop_assert_eq!(doc, before);
    }

    #[test]
    fn prop_serialization_survives_the_walk(mut doc in arb_value()) {
        let overlay = probe_overlay();
        apply_overlay(&mut doc, &overlay);
        prop_assert!(serde_yaml::to_string(&doc).is_ok());
    }
}
