use super::*;

#[test]
fn presets_resolve_by_id() {
    let themes = PresetThemes::new();
    assert_eq!(themes.all().len(), 10);
    let sakura = themes.theme("sakura").unwrap();
    assert_eq!(sakura.primary_color, "#F2AEB1");
    assert_eq!(sakura.background_color, "#0D0D0D");
    assert!(sakura.is_preset);
    assert!(themes.theme("missing").is_none());
}

#[test]
fn every_preset_belongs_to_a_known_category() {
    let themes = PresetThemes::new();
    for t in themes.all() {
        assert!(THEME_CATEGORIES.iter().any(|(id, _)| *id == t.category));
    }
    assert_eq!(themes.by_category("japanese").len(), 3);
    assert_eq!(themes.by_category("alchemy").len(), 1);
    assert!(themes.by_category("nope").is_empty());
}

#[test]
fn custom_tables_and_no_themes_implement_lookup() {
    let table = vec![CircleTheme {
        id: "mine".to_string(),
        name: "Mine".to_string(),
        description: String::new(),
        primary_color: "#010203".to_string(),
        background_color: "#040506".to_string(),
        accent_color: "#070809".to_string(),
        category: "custom".to_string(),
        is_preset: false,
    }];
    assert_eq!(table.theme("mine").unwrap().accent_color, "#070809");
    assert!(NoThemes.theme("mine").is_none());
}
