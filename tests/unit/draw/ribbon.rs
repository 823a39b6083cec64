use super::*;
use crate::render::ops::{DrawList, DrawOp};

fn record(style: Style, radius: f64) -> DrawList {
    let mut list = DrawList::new(500, 500);
    {
        let mut pen = Pen::new(&mut list);
        draw_runic_text(&mut pen, Point::new(250.0, 250.0), radius, style, "#FFD700");
    }
    list
}

#[test]
fn one_text_op_per_code_point() {
    let list = record(Style::Classic, 225.0);
    assert_eq!(list.text_count(), outer_corpus(Style::Classic).chars().count());
    assert!(list.texts().iter().all(|t| t.chars().count() == 1));
}

#[test]
fn runic_and_celestial_add_an_inner_ribbon() {
    for style in [Style::Runic, Style::Celestial] {
        let (inner, _) = inner_ribbon(style).unwrap();
        let expected = outer_corpus(style).chars().count() + inner.chars().count();
        assert_eq!(record(style, 225.0).text_count(), expected);
    }
    for style in [Style::Classic, Style::Elemental, Style::Modern] {
        assert!(inner_ribbon(style).is_none());
        assert_eq!(
            record(style, 225.0).text_count(),
            outer_corpus(style).chars().count()
        );
    }
}

#[test]
fn first_character_sits_at_the_top_upright() {
    let list = record(Style::Classic, 200.0);
    let DrawOp::FillText {
        text,
        transform,
        font,
        color,
    } = &list.ops()[0]
    else {
        panic!("expected text");
    };
    assert_eq!(text, "E");
    assert_eq!(color, "#FFD700");
    assert_eq!(font.size_px, 10.0);
    assert_eq!(font.family, OUTER_FONT_FAMILY);
    assert_eq!(font.align, TextAlign::Center);
    assert_eq!(font.baseline, TextBaseline::Middle);

    let anchor = *transform * Point::ZERO;
    assert!((anchor.x - 250.0).abs() < 1e-9);
    assert!((anchor.y - 70.0).abs() < 1e-9);
    let right = *transform * Point::new(1.0, 0.0);
    assert!((right.x - 251.0).abs() < 1e-9);
}

#[test]
fn inner_runic_ribbon_uses_japanese_font_at_smaller_size() {
    let list = record(Style::Runic, 225.0);
    let outer = outer_corpus(Style::Runic).chars().count();
    let DrawOp::FillText { text, font, .. } = &list.ops()[outer] else {
        panic!("expected text");
    };
    assert_eq!(text, "守");
    assert_eq!(font.family, JAPANESE_FONT_FAMILY);
    assert!((font.size_px - 8.8).abs() < 1e-9);
}

#[test]
fn runic_text_is_seeded() {
    let a = generate_runic_text(32, 7);
    assert_eq!(a.chars().count(), 32);
    assert_eq!(a, generate_runic_text(32, 7));
    assert_ne!(a, generate_runic_text(32, 8));
    assert!(a.chars().all(|c| RUNES.contains(&c) || ('\u{1F700}'..='\u{1F73F}').contains(&c)));
    assert!(generate_runic_text(0, 1).is_empty());
}
