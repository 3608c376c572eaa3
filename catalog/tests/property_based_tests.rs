use catalog::{
    ALL_CATEGORIES, Archetype, Catalog, CategoryFilter, ColorPolicy, Rgb, Tone, categories, filter,
    hex_to_hsl,
};
use proptest::prelude::*;

fn archetype(index: usize, name: String, category: String, mood: String) -> Archetype {
    Archetype {
        name,
        category,
        mood_tone: mood,
        description: format!("Archetype number {index}"),
        hex: "#6D28D9".to_string(),
        emoji_sigils: "✨".to_string(),
        visual_arrival: "Fade".to_string(),
        soundtrack: "Strings".to_string(),
        accent_animation: "Pulse".to_string(),
        arrival_style_group: "Glow".to_string(),
        ui_components: "Card".to_string(),
        payload_signature: format!("prop.{index}"),
        image_url: None,
    }
}

fn entries_strategy() -> impl Strategy<Value = Vec<Archetype>> {
    prop::collection::vec(
        (
            "[A-Za-z ]{1,12}",
            prop::sample::select(vec!["Joy", "Grief", "Calm", "Wonder"]),
            "[a-z ]{0,16}",
        ),
        0..25,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, category, mood))| archetype(i, name, category.to_string(), mood))
            .collect()
    })
}

fn signatures(found: &[&Archetype]) -> Vec<String> {
    found.iter().map(|a| a.payload_signature.clone()).collect()
}

#[cfg(test)]
mod color_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_hsl_components_stay_in_range(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let hex = Rgb::new(r, g, b).to_string();
            let hsl = hex_to_hsl(&hex).expect("formatted colour parses");

            prop_assert!(hsl.hue <= 360);
            prop_assert!(hsl.saturation <= 100);
            prop_assert!(hsl.lightness <= 100);
        }

        #[test]
        fn test_tone_agrees_with_lightness(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let hex = Rgb::new(r, g, b).to_string();
            let hsl = hex_to_hsl(&hex).expect("formatted colour parses");

            prop_assert_eq!(hsl.tone() == Tone::Light, hsl.lightness > 50);
            prop_assert_eq!(Tone::for_hex(&hex), hsl.tone());
        }

        #[test]
        fn test_grays_have_no_hue_or_saturation(v in any::<u8>()) {
            let hsl = hex_to_hsl(&Rgb::new(v, v, v).to_string()).expect("gray parses");
            prop_assert_eq!(hsl.hue, 0);
            prop_assert_eq!(hsl.saturation, 0);
        }

        #[test]
        fn test_case_does_not_change_result(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let upper = Rgb::new(r, g, b).to_string();
            prop_assert_eq!(hex_to_hsl(&upper), hex_to_hsl(&upper.to_lowercase()));
        }
    }
}

#[cfg(test)]
mod filter_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_empty_query_and_all_returns_full_catalog(entries in entries_strategy()) {
            let found = filter(&entries, "", &CategoryFilter::All);
            let expected: Vec<&Archetype> = entries.iter().collect();
            prop_assert_eq!(found, expected);
        }

        #[test]
        fn test_filter_is_idempotent(
            entries in entries_strategy(),
            query in "[a-zA-Z ]{0,4}",
            category in prop::sample::select(vec!["All", "Joy", "Grief", "Calm", "Wonder"])
        ) {
            let category = CategoryFilter::from(category);
            let once: Vec<Archetype> = filter(&entries, &query, &category)
                .into_iter()
                .cloned()
                .collect();
            let twice = filter(&once, &query, &category);

            prop_assert_eq!(signatures(&twice), once.iter().map(|a| a.payload_signature.clone()).collect::<Vec<_>>());
        }

        #[test]
        fn test_full_lowercase_name_finds_entry(entries in entries_strategy(), pick in any::<prop::sample::Index>()) {
            prop_assume!(!entries.is_empty());
            let target = &entries[pick.index(entries.len())];

            let found = filter(&entries, &target.name.to_lowercase(), &CategoryFilter::All);
            prop_assert!(found.iter().any(|a| a.payload_signature == target.payload_signature));
        }

        #[test]
        fn test_extending_query_only_narrows(
            entries in entries_strategy(),
            query in "[a-z ]{0,3}",
            extension in "[a-z ]{0,3}"
        ) {
            let wide = signatures(&filter(&entries, &query, &CategoryFilter::All));
            let narrow = signatures(&filter(&entries, &format!("{query}{extension}"), &CategoryFilter::All));

            prop_assert!(narrow.iter().all(|sig| wide.contains(sig)));
        }

        #[test]
        fn test_restricting_category_only_narrows(
            entries in entries_strategy(),
            query in "[a-z ]{0,3}",
            category in prop::sample::select(vec!["Joy", "Grief", "Calm", "Wonder"])
        ) {
            let wide = signatures(&filter(&entries, &query, &CategoryFilter::All));
            let narrow = filter(&entries, &query, &CategoryFilter::from(category));

            prop_assert!(narrow.iter().all(|a| wide.contains(&a.payload_signature)));
            prop_assert!(narrow.iter().all(|a| a.category == category));
        }

        #[test]
        fn test_category_list_shape(entries in entries_strategy()) {
            let list = categories(&entries);

            prop_assert_eq!(list[0].as_str(), ALL_CATEGORIES);
            for (i, category) in list.iter().enumerate() {
                prop_assert!(!list[i + 1..].contains(category));
            }
            for entry in &entries {
                prop_assert!(list.contains(&entry.category));
            }
            prop_assert_eq!(list.len() - 1, list[1..].iter().filter(|c| entries.iter().any(|e| &e.category == *c)).count());
        }

        #[test]
        fn test_catalog_categories_match_free_function(entries in entries_strategy()) {
            let expected = categories(&entries);
            let catalog = Catalog::new(entries, ColorPolicy::Strict).expect("unique signatures");
            prop_assert_eq!(catalog.categories(), expected.as_slice());
        }
    }
}
