//! Property-based tests for combining shopping list entries.
//!
//! # Invariants tested
//!
//! - **Uniqueness:** the combined list never holds two entries with the same
//!   [`ItemKey`].
//! - **Conservation:** each key's combined quantity equals the sum of the
//!   quantities of the entries that share it.
//! - **Order:** entries keep the position and display name of the first
//!   occurrence of their key.

use std::collections::{BTreeMap, HashSet};

use basket_core::{ItemKey, MAX_QUANTITY, ShoppingList, ShoppingListEntry};
use proptest::prelude::*;

const NAMES: &[&str] = &["milk", "whole milk", "bread", "sour cream", "eggs", "rice"];

/// A grocery name from a small pool, with random casing and padding so that
/// distinct strings frequently share a key.
fn spelled_name() -> impl Strategy<Value = String> {
    (
        prop::sample::select(NAMES),
        prop::collection::vec(any::<bool>(), 12),
        0_usize..3,
        0_usize..3,
    )
        .prop_map(|(name, upper, leading, trailing)| {
            let cased: String = name
                .chars()
                .zip(upper.iter().cycle())
                .map(|(ch, &up)| if up { ch.to_ascii_uppercase() } else { ch })
                .collect();
            format!("{}{cased}{}", " ".repeat(leading), " ".repeat(trailing))
        })
}

fn entries() -> impl Strategy<Value = Vec<ShoppingListEntry>> {
    prop::collection::vec((spelled_name(), 1..=MAX_QUANTITY), 0..24).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(name, quantity)| ShoppingListEntry { name, quantity })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn combined_keys_are_unique(raw in entries()) {
        let list = ShoppingList::combine(raw).expect("entries are valid");
        let mut seen = HashSet::new();
        for entry in &list {
            prop_assert!(seen.insert(entry.key()), "duplicate key {}", entry.key());
        }
    }

    #[test]
    fn combined_quantities_sum_their_duplicates(raw in entries()) {
        let mut expected: BTreeMap<ItemKey, u32> = BTreeMap::new();
        for entry in &raw {
            *expected.entry(entry.key()).or_default() += entry.quantity;
        }

        let list = ShoppingList::combine(raw).expect("entries are valid");
        let combined: BTreeMap<ItemKey, u32> = list
            .iter()
            .map(|entry| (entry.key(), entry.quantity))
            .collect();
        prop_assert_eq!(combined, expected);
    }

    #[test]
    fn combined_entries_keep_first_occurrence(raw in entries()) {
        let mut firsts: Vec<&ShoppingListEntry> = Vec::new();
        for entry in &raw {
            if firsts.iter().all(|seen| seen.key() != entry.key()) {
                firsts.push(entry);
            }
        }
        let expected: Vec<&str> = firsts.iter().map(|entry| entry.name.as_str()).collect();

        let list = ShoppingList::combine(raw.clone()).expect("entries are valid");
        let names: Vec<&str> = list.iter().map(|entry| entry.name.as_str()).collect();
        prop_assert_eq!(names, expected);
    }
}
