//! Property-based test generators using proptest.
//!
//! Strategies generate declarations that uphold fixture invariants:
//! names never contain path separators, versions are positive and tree
//! depth stays small enough for fast test runs.

use fakecms_core::{DbField, DbItem, Language};
use proptest::prelude::*;

/// Strategy for valid item names (no path separators).
pub fn item_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9 ]{0,14}[A-Za-z0-9]")
        .expect("valid regex")
}

/// Strategy for field names.
pub fn field_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9]{0,15}").expect("valid regex")
}

/// Strategy for language codes drawn from a small realistic set.
pub fn language_strategy() -> impl Strategy<Value = Language> {
    prop::sample::select(vec!["en", "da", "de", "uk", "ja"]).prop_map(Language::from)
}

/// Strategy for valid (positive) version numbers.
pub fn version_strategy() -> impl Strategy<Value = u32> {
    1..=64u32
}

/// Strategy for a field carrying one value under one language.
pub fn field_strategy() -> impl Strategy<Value = DbField> {
    (field_name_strategy(), language_strategy(), ".{0,32}").prop_map(|(name, language, value)| {
        let mut field = DbField::new(name);
        field.set_value(language, 1, value);
        field
    })
}

/// Strategy for an item declaration with up to three fields and a
/// nested child tree bounded by `depth`.
pub fn item_tree_strategy(depth: u32) -> impl Strategy<Value = DbItem> {
    let leaf = (item_name_strategy(), prop::collection::vec(field_strategy(), 0..3)).prop_map(
        |(name, fields)| {
            let mut item = DbItem::new(name);
            for field in fields {
                item = item.field_def(field);
            }
            item
        },
    );

    leaf.prop_recursive(depth, 16, 3, |inner| {
        (
            item_name_strategy(),
            prop::collection::vec(inner, 0..3),
        )
            .prop_map(|(name, children)| {
                let mut item = DbItem::new(name);
                for child in children {
                    item = item.child(child);
                }
                item
            })
    })
}
