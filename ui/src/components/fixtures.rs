use catalog::Archetype;

pub(crate) fn archetype(name: &str, category: &str, hex: &str) -> Archetype {
    let slug = name.to_lowercase().replace(' ', "-");
    Archetype {
        name: name.to_string(),
        category: category.to_string(),
        mood_tone: format!("{name} mood"),
        description: format!("The {name} archetype."),
        hex: hex.to_string(),
        emoji_sigils: "🌙 ✨".to_string(),
        visual_arrival: "Fades in".to_string(),
        soundtrack: "Low strings".to_string(),
        accent_animation: "Pulse".to_string(),
        arrival_style_group: "Glow".to_string(),
        ui_components: "Card, Halo".to_string(),
        payload_signature: format!("sig.{slug}"),
        image_url: None,
    }
}

pub(crate) fn archetypes(count: usize) -> Vec<Archetype> {
    (0..count)
        .map(|i| archetype(&format!("Entry {i}"), "Joy", "#FDE68A"))
        .collect()
}
