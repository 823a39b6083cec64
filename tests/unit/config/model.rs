use super::*;

#[test]
fn parses_original_json_shape() {
    let cfg = CircleConfig::from_json_str(
        r##"{
            "complexity": 4,
            "style": "celestial",
            "colorScheme": "azure",
            "backgroundColor": "night",
            "customPrimaryColor": "#FFD700",
            "customBackgroundColor": "#121212",
            "useCustomColors": false,
            "size": 600,
            "symbolDensity": 2,
            "showText": true,
            "animation": false
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.complexity, 4);
    assert_eq!(cfg.style, Style::Celestial);
    assert_eq!(cfg.color_scheme, ColorScheme::Azure);
    assert_eq!(cfg.background_color, BackgroundPreset::Night);
    assert_eq!(cfg.custom_background_color.as_deref(), Some("#121212"));
    assert_eq!(cfg.theme_id, None);
}

#[test]
fn unknown_keywords_fall_back_to_defaults() {
    let cfg = CircleConfig::from_json_str(
        r#"{"complexity":2,"style":"baroque","colorScheme":"teal","backgroundColor":"plaid",
            "size":500,"symbolDensity":1,"showText":false}"#,
    )
    .unwrap();
    assert_eq!(cfg.style, Style::Classic);
    assert_eq!(cfg.color_scheme, ColorScheme::Gold);
    assert_eq!(cfg.background_color, BackgroundPreset::Dark);
    assert!(!cfg.animation);
}

#[test]
fn background_defaults_to_dark_when_missing() {
    let cfg = CircleConfig::from_json_str(
        r#"{"complexity":1,"style":"runic","colorScheme":"pink","size":300,"symbolDensity":5,"showText":true}"#,
    )
    .unwrap();
    assert_eq!(cfg.background_color, BackgroundPreset::Dark);
    assert_eq!(cfg.animation, CircleConfig::default().animation);
}

#[test]
fn json_roundtrip_preserves_config() {
    let cfg = CircleConfig {
        style: Style::Modern,
        theme_id: Some("sakura".to_string()),
        ..CircleConfig::default()
    };
    let text = cfg.to_json_pretty().unwrap();
    assert!(text.contains("\"style\": \"modern\""));
    assert!(text.contains("\"themeId\": \"sakura\""));
    assert_eq!(CircleConfig::from_json_str(&text).unwrap(), cfg);
}

#[test]
fn validate_rejects_out_of_range_fields() {
    assert!(CircleConfig::default().validate().is_ok());

    let bad = CircleConfig {
        complexity: 6,
        ..CircleConfig::default()
    };
    assert!(matches!(bad.validate(), Err(CircleError::Validation(_))));

    let bad = CircleConfig {
        symbol_density: 0,
        ..CircleConfig::default()
    };
    assert!(bad.validate().is_err());

    let bad = CircleConfig {
        size: 1200,
        ..CircleConfig::default()
    };
    assert!(bad.validate().is_err());
}

#[test]
fn clamped_forces_declared_ranges() {
    let cfg = CircleConfig {
        complexity: 0,
        symbol_density: 9,
        size: 10,
        ..CircleConfig::default()
    }
    .clamped();
    assert_eq!(cfg.complexity, 1);
    assert_eq!(cfg.symbol_density, 5);
    assert_eq!(cfg.size, 300);
    assert!(cfg.validate().is_ok());
}

#[test]
fn keyword_tables_match_palette() {
    assert_eq!(ColorScheme::Gold.hex(), "#FFD700");
    assert_eq!(ColorScheme::Silver.hex(), "#CBD5E1");
    assert_eq!(BackgroundPreset::Dark.hex(), Some("#1E1E2A"));
    assert_eq!(BackgroundPreset::Gradient.hex(), None);
    assert_eq!(BackgroundPreset::Paper.hex(), Some("#fef3c7"));
    for s in Style::ALL {
        assert_eq!(Style::parse(s.as_str()), s);
    }
}
