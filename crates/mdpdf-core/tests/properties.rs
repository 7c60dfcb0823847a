//! Property tests for the style resolver and slug generator

use std::collections::HashSet;

use mdpdf_core::{resolve, Slugger, Style, StyleDictionary};
use proptest::prelude::*;

fn style_strategy() -> impl Strategy<Value = Style> {
    (
        proptest::option::of((6u8..48).prop_map(f64::from)),
        proptest::option::of(any::<bool>()),
        proptest::option::of("#[0-9A-F]{6}"),
    )
        .prop_map(|(font_size, bold, color)| Style {
            font_size,
            bold,
            color,
            ..Default::default()
        })
}

fn dictionary_strategy() -> impl Strategy<Value = StyleDictionary> {
    proptest::collection::btree_map(
        prop::sample::select(vec!["head1", "p", "li", "a", "note", "caption"])
            .prop_map(String::from),
        style_strategy(),
        0..6,
    )
}

proptest! {
    #[test]
    fn resolve_preserves_base_keys(base in dictionary_strategy(), overlay in dictionary_strategy()) {
        let merged = resolve(&base, Some(&overlay));

        for (name, base_style) in &base {
            match overlay.get(name) {
                None => prop_assert_eq!(&merged[name], base_style),
                Some(over) => {
                    let out = &merged[name];
                    if over.font_size.is_none() {
                        prop_assert_eq!(out.font_size, base_style.font_size);
                    }
                    if over.bold.is_none() {
                        prop_assert_eq!(out.bold, base_style.bold);
                    }
                    if over.color.is_none() {
                        prop_assert_eq!(&out.color, &base_style.color);
                    }
                }
            }
        }
        for (name, over) in &overlay {
            if !base.contains_key(name) {
                prop_assert_eq!(&merged[name], over);
            }
        }
    }

    #[test]
    fn slugs_are_always_distinct(texts in proptest::collection::vec("[a-c -]{0,5}", 0..20)) {
        let mut slugger = Slugger::new();
        let mut seen = HashSet::new();
        for text in &texts {
            prop_assert!(seen.insert(slugger.slug(text)));
        }
    }

    #[test]
    fn repeated_text_gets_counter_suffix(text in "[A-Za-z][A-Za-z ]{0,10}", repeat in 1usize..6) {
        let mut slugger = Slugger::new();
        let first = slugger.slug(&text);
        for i in 1..repeat {
            prop_assert_eq!(slugger.slug(&text), format!("{}-{}", first, i));
        }
    }
}
