use indexmap::IndexMap;

/// Built-in match presets, in the order they should be listed.
pub fn builtin_presets() -> IndexMap<&'static str, &'static str> {
    IndexMap::from([
        ("quick", include_str!("../content/presets/quick.json")),
        ("classic", include_str!("../content/presets/classic.json")),
        ("hot_seat", include_str!("../content/presets/hot_seat.json")),
    ])
}
