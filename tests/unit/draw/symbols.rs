use kurbo::Shape;

use super::*;
use crate::render::ops::{DrawList, DrawOp};

#[test]
fn symbol_count_is_capped_at_twelve() {
    assert_eq!(symbol_count(1, 1), 3);
    assert_eq!(symbol_count(3, 3), 7);
    assert_eq!(symbol_count(5, 5), 11);
    assert_eq!(symbol_count(6, 6), 12);
    for c in 1..=5 {
        for d in 1..=5 {
            assert_eq!(symbol_count(c, d), (c + d + 1) as usize);
        }
    }
}

#[test]
fn style_selects_glyph_bank() {
    assert_eq!(symbol_index_for(Style::Elemental, 9), 1);
    assert_eq!(symbol_index_for(Style::Runic, 0), 8);
    assert_eq!(symbol_index_for(Style::Celestial, 7), 23);
    assert_eq!(symbol_index_for(Style::Modern, 10), 26);
    assert_eq!(symbol_index_for(Style::Classic, 11), 11);
    assert_eq!(symbol_index_for(Style::Classic, 21), 1);
}

#[test]
fn every_glyph_draws_something_within_its_frame() {
    for index in 0..GLYPH_COUNT {
        let recipe = glyph_recipe(index);
        assert!(!recipe.is_empty(), "glyph {index} is empty");
        for op in &recipe {
            let bb = glyph_path(op.segments(), 10.0).bounding_box();
            assert!(
                bb.x0 >= -15.01 && bb.x1 <= 15.01 && bb.y0 >= -15.01 && bb.y1 <= 15.01,
                "glyph {index} leaves its frame: {bb:?}"
            );
        }
    }
    assert_eq!(glyph_recipe(GLYPH_COUNT + 4), glyph_recipe(4));
}

#[test]
fn glyph_table_shapes_match_their_names() {
    let fills = |i: usize| {
        glyph_recipe(i)
            .iter()
            .filter(|op| matches!(op, GlyphOp::Fill(_)))
            .count()
    };
    assert_eq!(fills(4), 1);
    assert_eq!(fills(17), 1);
    assert_eq!(fills(28), 1);
    assert_eq!(fills(30), 1);
    assert_eq!(glyph_recipe(16).len(), 5);
    assert_eq!(glyph_recipe(23).len(), 4);
    assert_eq!(glyph_recipe(28).len(), 9);
    assert_eq!(glyph_recipe(29).len(), 7);
    assert_eq!(glyph_recipe(31).len(), 1);
}

#[test]
fn crescent_joins_both_arcs_into_one_outline() {
    let path = glyph_path(glyph_recipe(10)[0].segments(), 100.0);
    let moves = path
        .elements()
        .iter()
        .filter(|el| matches!(el, kurbo::PathEl::MoveTo(_)))
        .count();
    assert_eq!(moves, 1);
    let bb = path.bounding_box();
    assert!((bb.x0 + 140.0).abs() < 0.2);
    assert!((bb.x1 - 40.0).abs() < 0.2);
}

#[test]
fn ring_places_markers_at_eight_tenths_radius() {
    let mut list = DrawList::new(200, 200);
    {
        let mut pen = Pen::new(&mut list);
        draw_symbols(
            &mut pen,
            Point::new(100.0, 100.0),
            100.0,
            1,
            1,
            Style::Elemental,
            "#FFD700",
        );
    }
    // Glyphs 0, 1 and 2 take one, one and two strokes.
    assert_eq!(list.stroke_count(), 3 + 4);
    let (first, transform, style) = list.strokes().next().unwrap();
    assert_eq!(style.width, 1.5);
    assert_eq!(style.color, "#FFD700");
    let bb = transform.transform_rect_bbox(first.bounding_box());
    assert!((bb.center().x - 180.0).abs() < 0.25);
    assert!((bb.width() - 14.0).abs() < 0.25);

    let glyph = list
        .ops()
        .iter()
        .find_map(|op| match op {
            DrawOp::StrokePath { transform, .. } if *transform != kurbo::Affine::IDENTITY => {
                Some(*transform)
            }
            _ => None,
        })
        .unwrap();
    assert_eq!(glyph.translation(), kurbo::Vec2::new(180.0, 100.0));
}

fn num(v: f64) -> String {
    // Rounding folds -0 and float noise from computed vertices.
    let v = (v * 1000.0).round() / 1000.0 + 0.0;
    format!("{v}")
}

fn deg(rad: f64) -> String {
    num(rad.to_degrees())
}

fn seg_text(seg: &Seg) -> String {
    match *seg {
        Seg::Move(x, y) => format!("M{},{}", num(x), num(y)),
        Seg::Line(x, y) => format!("L{},{}", num(x), num(y)),
        Seg::Cubic([x1, y1, x2, y2, x, y]) => format!(
            "C{},{} {},{} {},{}",
            num(x1),
            num(y1),
            num(x2),
            num(y2),
            num(x),
            num(y)
        ),
        Seg::Arc {
            center,
            radii,
            rotation,
            start,
            end,
            ccw,
        } => format!(
            "A{},{} {}x{} rot{} {}..{}{}",
            num(center.0),
            num(center.1),
            num(radii.0),
            num(radii.1),
            deg(rotation),
            deg(start),
            deg(end),
            if ccw { " ccw" } else { "" }
        ),
        Seg::Rect(x, y, w, h) => format!("R{},{} {}x{}", num(x), num(y), num(w), num(h)),
        Seg::Close => "Z".to_string(),
    }
}

fn recipe_text(index: usize) -> String {
    glyph_recipe(index)
        .iter()
        .map(|op| {
            let kind = match op {
                GlyphOp::Stroke(_) => "S:",
                GlyphOp::Fill(_) => "F:",
            };
            let segs: Vec<String> = op.segments().iter().map(seg_text).collect();
            format!("{kind} {}", segs.join(" "))
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Every glyph in unit size: `S:`/`F:` per stroke or fill, `M`/`L`/`C` path points,
/// `A cx,cy RXxRY rot start..end` arcs in degrees, `R x,y wxh` rectangles.
const GLYPH_TABLE: [&str; GLYPH_COUNT] = [
    "S: M0,-1 L1,1 L-1,1 Z",
    "S: M0,1 L1,-1 L-1,-1 Z",
    "S: M0,-1 L1,1 L-1,1 Z | S: M-0.7,0 L0.7,0",
    "S: M0,1 L1,-1 L-1,-1 Z | S: M-0.7,0 L0.7,0",
    "S: A0,0 1x1 rot0 0..360 | F: A0,0 0.3x0.3 rot0 0..360",
    "S: A0,0 0.7x0.7 rot0 0..360 | S: M0,-0.7 L0,-1.4 | S: M-0.5,-1.2 L0.5,-1.2",
    "S: A0,0 1x1 rot0 0..360 | S: M-1,0 L1,0",
    "S: M0,-1.2 L0,1.2 | S: M-1,-0.8 L1,-0.8 | S: M0,0.2 L-0.7,1.2 L0.7,1.2 Z",
    "S: A0,-0.5 0.7x0.7 rot0 0..360 | S: M0,0.2 L0,1.4 | S: M-0.7,0.8 L0.7,0.8",
    "S: A0,-0.5 0.7x0.7 rot0 0..360 | S: M0,0.2 L0.7,1.2 M0,0.2 L-0.3,1 M0,0.2 L0.3,1",
    "S: A0.4,0 1x1 rot0 90..270 A-0.4,0 1x1 rot0 270..90 ccw Z",
    "S: M-1,0.3 L1,0.3 | S: M-0.4,-1 L-0.4,1.5",
    "S: M0,-1.5 L0,1.5 M-1,-0.5 L0,-1.5 L1,-0.5",
    "S: M0,1.5 L0,-0.5 M0,-0.5 L-1,-1.5 M0,-0.5 L1,-1.5",
    "S: M-1,-1 L1,-1 L1,1 L-1,1 L-1,-1 M-1,1 L1,-1",
    "S: M-1,-1 L-1,1 L1,0 Z",
    "S: M0,0 L1,0 | S: M0,0 L0.309,0.951 | S: M0,0 L-0.809,0.588 | S: M0,0 L-0.809,-0.588 \
     | S: M0,0 L0.309,-0.951",
    "S: A0,0 1x1 rot0 0..360 | F: A-0.3,0 0.6x0.6 rot0 0..360",
    "S: M-1,1 L1,1 | S: M0,1 L0,-1 | S: A0,-0.3 0.7x0.7 rot0 0..360",
    "S: M-1,0 L1,0 | S: M0,-1 L0,1 | S: A-0.5,-0.5 0.4x0.4 rot0 90..270",
    "S: A0,0 0.7x0.7 rot0 0..360 | S: R-0.5,-0.5 1x1",
    "S: M-1,0 L1,0 M0,-1 L0,1 | S: R-0.3,-0.3 0.6x0.6",
    "S: A0,0 1x1 rot0 0..90 A0,0 0.8x0.8 rot0 90..180 A0,0 0.6x0.6 rot0 180..270 \
     A0,0 0.4x0.4 rot0 270..360",
    "S: A0,0 1x1 rot0 0..360 | S: A0,0 1x0.4 rot0 0..360 | S: A0,0 1x0.4 rot120 0..360 \
     | S: A0,0 1x0.4 rot240 0..360",
    "S: M0,-1 L1,0 L0,1 L-1,0 Z",
    "S: M1,0 L0.5,0.866 L-0.5,0.866 L-1,0 L-0.5,-0.866 L0.5,-0.866 Z",
    "S: A0.5,0 0.7x0.7 rot0 0..360 | S: A-0.25,0.433 0.7x0.7 rot0 0..360 \
     | S: A-0.25,-0.433 0.7x0.7 rot0 0..360",
    "S: R-1,-1 2x2 M-1,0 L1,0 M0,-1 L0,1",
    "F: A0,0 0.3x0.3 rot0 0..360 | S: M0.3,0 L1,0 | S: A1,0 0.2x0.2 rot0 0..360 \
     | S: M0,0.3 L0,1 | S: A0,1 0.2x0.2 rot0 0..360 | S: M-0.3,0 L-1,0 \
     | S: A-1,0 0.2x0.2 rot0 0..360 | S: M0,-0.3 L0,-1 | S: A0,-1 0.2x0.2 rot0 0..360",
    "S: M-1,-1 C-0.5,0 0.5,0 1,1 | S: M-1,1 C-0.5,0 0.5,0 1,-1 | S: M-1.5,0.5 L-0.5,-0.5 \
     | S: M-1,0.25 L0,-0.25 | S: M-0.5,0 L0.5,0 | S: M0,-0.25 L1,0.25 | S: M0.5,-0.5 L1.5,0.5",
    "S: M0,-1 L1,1 L-1,1 Z | S: A0,0 0.5x0.3 rot0 0..360 | F: A0,0 0.15x0.15 rot0 0..360",
    "S: M-0.5,0 C-0.5,-1 0.5,-1 0.5,0 C0.5,1 -0.5,1 -0.5,0",
];

#[test]
fn glyph_table_matches_reference_geometry() {
    for (index, expected) in GLYPH_TABLE.iter().enumerate() {
        assert_eq!(recipe_text(index), *expected, "glyph {index}");
    }
}

#[test]
fn glyph_index_wraps_for_every_entry() {
    for index in 0..GLYPH_COUNT {
        assert_eq!(glyph_recipe(index + GLYPH_COUNT), glyph_recipe(index), "glyph {index}");
        assert_eq!(glyph_recipe(index + 3 * GLYPH_COUNT), glyph_recipe(index), "glyph {index}");
    }
}

#[test]
fn glyph_paths_scale_by_symbol_size() {
    let recipe = glyph_recipe(5);
    let stem = glyph_path(recipe[1].segments(), 10.0);
    let ends: Vec<Point> = stem.elements().iter().filter_map(|el| el.end_point()).collect();
    assert_eq!(ends.len(), 2);
    assert!((ends[0] - Point::new(0.0, -7.0)).hypot() < 1e-9);
    assert!((ends[1] - Point::new(0.0, -14.0)).hypot() < 1e-9);
    let square = glyph_path(glyph_recipe(20)[1].segments(), 10.0).bounding_box();
    assert_eq!(square, kurbo::Rect::new(-5.0, -5.0, 5.0, 5.0));
}
