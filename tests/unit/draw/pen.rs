use std::f64::consts::{FRAC_PI_2, PI};

use super::*;
use crate::render::ops::{DrawList, DrawOp};

#[test]
fn sweep_follows_canvas_normalization() {
    assert_eq!(canvas_sweep(0.0, TAU, false), TAU);
    assert_eq!(canvas_sweep(0.0, 3.0 * TAU, false), TAU);
    assert!((canvas_sweep(1.5 * PI, 0.5 * PI, false) - PI).abs() < 1e-12);
    assert!((canvas_sweep(1.5 * PI, 0.5 * PI, true) + PI).abs() < 1e-12);
    assert_eq!(canvas_sweep(1.0, 1.0, false), 0.0);
    assert_eq!(canvas_sweep(TAU, 0.0, true), -TAU);
}

#[test]
fn arc_on_non_empty_path_connects_with_a_line() {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    arc(&mut path, Point::new(10.0, 0.0), 5.0, PI, TAU, false);
    assert!(matches!(
        path.elements()[1],
        kurbo::PathEl::LineTo(p) if (p.x - 5.0).abs() < 1e-9 && p.y.abs() < 1e-9
    ));
}

#[test]
fn circle_path_spans_full_radius() {
    let path = circle_path(Point::new(50.0, 40.0), 10.0);
    let bb = kurbo::Shape::bounding_box(&path);
    assert!((bb.x0 - 40.0).abs() < 0.2);
    assert!((bb.x1 - 60.0).abs() < 0.2);
    assert!((bb.y0 - 30.0).abs() < 0.2);
    assert!((bb.y1 - 50.0).abs() < 0.2);
}

#[test]
fn rotated_ellipse_starts_on_rotated_axis() {
    let mut path = BezPath::new();
    ellipse(
        &mut path,
        Point::ZERO,
        Vec2::new(10.0, 4.0),
        FRAC_PI_2,
        0.0,
        TAU,
        false,
    );
    let kurbo::PathEl::MoveTo(p) = path.elements()[0] else {
        panic!("expected move_to");
    };
    assert!(p.x.abs() < 1e-9);
    assert!((p.y - 10.0).abs() < 1e-9);
}

#[test]
fn save_restore_scopes_transform_and_colors() {
    let mut list = DrawList::new(100, 100);
    {
        let mut pen = Pen::new(&mut list);
        pen.set_stroke_color("#ff0000");
        pen.save();
        pen.translate((10.0, 20.0));
        pen.rotate(FRAC_PI_2);
        pen.set_stroke_color("#00ff00");
        pen.stroke(&circle_path(Point::ZERO, 1.0));
        pen.restore();
        pen.stroke(&circle_path(Point::ZERO, 1.0));
        pen.restore();
        assert_eq!(pen.transform(), Affine::IDENTITY);
    }

    let strokes: Vec<_> = list.strokes().collect();
    assert_eq!(strokes.len(), 2);
    assert_eq!(strokes[0].2.color, "#00ff00");
    let origin = strokes[0].1 * Point::new(1.0, 0.0);
    assert!((origin.x - 10.0).abs() < 1e-9);
    assert!((origin.y - 21.0).abs() < 1e-9);
    assert_eq!(strokes[1].2.color, "#ff0000");
    assert_eq!(strokes[1].1, Affine::IDENTITY);
}

#[test]
fn empty_paths_are_not_forwarded() {
    let mut list = DrawList::new(10, 10);
    {
        let mut pen = Pen::new(&mut list);
        pen.stroke(&BezPath::new());
        pen.fill(&BezPath::new());
        pen.clear();
    }
    assert_eq!(list.len(), 1);
    assert!(matches!(list.ops()[0], DrawOp::Clear { .. }));
}

#[test]
fn fill_text_uses_fill_color_and_font() {
    let mut list = DrawList::new(10, 10);
    {
        let mut pen = Pen::new(&mut list);
        pen.set_fill_color("#123456");
        pen.set_font(FontSpec {
            size_px: 12.0,
            ..FontSpec::default()
        });
        pen.fill_text("A");
    }
    let DrawOp::FillText { font, color, .. } = &list.ops()[0] else {
        panic!("expected text op");
    };
    assert_eq!(color, "#123456");
    assert_eq!(font.size_px, 12.0);
}
