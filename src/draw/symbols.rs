//! The ring of alchemical symbols and the 32-entry glyph table behind it.
//!
//! Glyphs are data: each entry of [`glyph_recipe`] is a short list of stroke and fill operations
//! in a local frame centered on the symbol, expressed in units of the symbol size.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use smallvec::{SmallVec, smallvec};

use crate::config::model::Style;
use crate::draw::pen::{Pen, ellipse};
use crate::draw::primitives::circle;
use crate::foundation::core::{BezPath, Point, Vec2, polar};
use crate::foundation::math::slot_angle;

/// Number of entries in the glyph table.
pub const GLYPH_COUNT: usize = 32;

/// One path segment of a glyph, in size units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Seg {
    Move(f64, f64),
    Line(f64, f64),
    Cubic([f64; 6]),
    /// Elliptical arc with canvas sweep rules.
    Arc {
        center: (f64, f64),
        radii: (f64, f64),
        rotation: f64,
        start: f64,
        end: f64,
        ccw: bool,
    },
    Rect(f64, f64, f64, f64),
    Close,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GlyphOp {
    Stroke(SmallVec<[Seg; 6]>),
    Fill(SmallVec<[Seg; 6]>),
}

impl GlyphOp {
    pub fn segments(&self) -> &[Seg] {
        match self {
            Self::Stroke(s) | Self::Fill(s) => s,
        }
    }
}

/// Symbols placed on the ring for the given complexity and density.
pub fn symbol_count(complexity: u32, density: u32) -> usize {
    (complexity as usize + density as usize + 1).min(12)
}

/// Glyph table index of the `i`-th ring position for `style`.
pub fn symbol_index_for(style: Style, i: usize) -> usize {
    match style {
        Style::Elemental => i % 8,
        Style::Runic => 8 + i % 8,
        Style::Celestial => 16 + i % 8,
        Style::Modern => 24 + i % 8,
        Style::Classic => i % 20,
    }
}

/// Ring of marker circles at 0.8r, each holding one glyph, starting at 3 o'clock.
pub fn draw_symbols(
    pen: &mut Pen<'_>,
    center: Point,
    radius: f64,
    complexity: u32,
    density: u32,
    style: Style,
    color: &str,
) {
    pen.set_fill_color(color);
    pen.set_stroke_color(color);
    pen.set_line_width(1.5);

    let count = symbol_count(complexity, density);
    for i in 0..count {
        let at = polar(center, radius * 0.8, slot_angle(i, count, 0.0));
        circle(pen, at, radius * 0.07);
        draw_alchemical_symbol(pen, at, radius * 0.05, symbol_index_for(style, i));
    }
}

/// Draw glyph `index % 32` centered on `at`.
pub fn draw_alchemical_symbol(pen: &mut Pen<'_>, at: Point, size: f64, index: usize) {
    pen.save();
    pen.translate(at.to_vec2());
    trace_glyph(pen, index, size);
    pen.restore();
}

/// Draw glyph `index % 32` around the pen's current origin.
pub fn trace_glyph(pen: &mut Pen<'_>, index: usize, size: f64) {
    for op in glyph_recipe(index) {
        let path = glyph_path(op.segments(), size);
        match op {
            GlyphOp::Stroke(_) => pen.stroke(&path),
            GlyphOp::Fill(_) => pen.fill(&path),
        }
    }
}

/// Build the path of `segs` scaled by `size`.
pub fn glyph_path(segs: &[Seg], size: f64) -> BezPath {
    let pt = |x: f64, y: f64| Point::new(x * size, y * size);
    let mut path = BezPath::new();
    for seg in segs {
        match *seg {
            Seg::Move(x, y) => path.move_to(pt(x, y)),
            Seg::Line(x, y) => path.line_to(pt(x, y)),
            Seg::Cubic([x1, y1, x2, y2, x, y]) => {
                path.curve_to(pt(x1, y1), pt(x2, y2), pt(x, y));
            }
            Seg::Arc {
                center,
                radii,
                rotation,
                start,
                end,
                ccw,
            } => ellipse(
                &mut path,
                pt(center.0, center.1),
                Vec2::new(radii.0 * size, radii.1 * size),
                rotation,
                start,
                end,
                ccw,
            ),
            Seg::Rect(x, y, w, h) => {
                path.move_to(pt(x, y));
                path.line_to(pt(x + w, y));
                path.line_to(pt(x + w, y + h));
                path.line_to(pt(x, y + h));
                path.close_path();
            }
            Seg::Close => path.close_path(),
        }
    }
    path
}

fn circ(x: f64, y: f64, r: f64) -> Seg {
    Seg::Arc {
        center: (x, y),
        radii: (r, r),
        rotation: 0.0,
        start: 0.0,
        end: TAU,
        ccw: false,
    }
}

fn arc(x: f64, y: f64, r: f64, start: f64, end: f64, ccw: bool) -> Seg {
    Seg::Arc {
        center: (x, y),
        radii: (r, r),
        rotation: 0.0,
        start,
        end,
        ccw,
    }
}

fn oval(rx: f64, ry: f64, rotation: f64) -> Seg {
    Seg::Arc {
        center: (0.0, 0.0),
        radii: (rx, ry),
        rotation,
        start: 0.0,
        end: TAU,
        ccw: false,
    }
}

fn stroke(segs: impl IntoIterator<Item = Seg>) -> GlyphOp {
    GlyphOp::Stroke(segs.into_iter().collect())
}

fn fill(segs: impl IntoIterator<Item = Seg>) -> GlyphOp {
    GlyphOp::Fill(segs.into_iter().collect())
}

fn bar(x0: f64, y0: f64, x1: f64, y1: f64) -> GlyphOp {
    GlyphOp::Stroke(smallvec![Seg::Move(x0, y0), Seg::Line(x1, y1)])
}

fn up_triangle() -> GlyphOp {
    use Seg::*;
    stroke([Move(0.0, -1.0), Line(1.0, 1.0), Line(-1.0, 1.0), Close])
}

fn down_triangle() -> GlyphOp {
    use Seg::*;
    stroke([Move(0.0, 1.0), Line(1.0, -1.0), Line(-1.0, -1.0), Close])
}

/// Drawing operations of glyph `index % 32`.
pub fn glyph_recipe(index: usize) -> Vec<GlyphOp> {
    use Seg::*;
    match index % GLYPH_COUNT {
        // Fire
        0 => vec![up_triangle()],
        // Water
        1 => vec![down_triangle()],
        // Air
        2 => vec![up_triangle(), bar(-0.7, 0.0, 0.7, 0.0)],
        // Earth
        3 => vec![down_triangle(), bar(-0.7, 0.0, 0.7, 0.0)],
        // Sun
        4 => vec![stroke([circ(0.0, 0.0, 1.0)]), fill([circ(0.0, 0.0, 0.3)])],
        // Mercury
        5 => vec![
            stroke([circ(0.0, 0.0, 0.7)]),
            bar(0.0, -0.7, 0.0, -1.4),
            bar(-0.5, -1.2, 0.5, -1.2),
        ],
        // Salt
        6 => vec![stroke([circ(0.0, 0.0, 1.0)]), bar(-1.0, 0.0, 1.0, 0.0)],
        // Sulfur
        7 => vec![
            bar(0.0, -1.2, 0.0, 1.2),
            bar(-1.0, -0.8, 1.0, -0.8),
            stroke([Move(0.0, 0.2), Line(-0.7, 1.2), Line(0.7, 1.2), Close]),
        ],
        // Copper
        8 => vec![
            stroke([circ(0.0, -0.5, 0.7)]),
            bar(0.0, 0.2, 0.0, 1.4),
            bar(-0.7, 0.8, 0.7, 0.8),
        ],
        // Iron
        9 => vec![
            stroke([circ(0.0, -0.5, 0.7)]),
            stroke([
                Move(0.0, 0.2),
                Line(0.7, 1.2),
                Move(0.0, 0.2),
                Line(-0.3, 1.0),
                Move(0.0, 0.2),
                Line(0.3, 1.0),
            ]),
        ],
        // Silver crescent
        10 => vec![stroke([
            arc(0.4, 0.0, 1.0, FRAC_PI_2, 1.5 * PI, false),
            arc(-0.4, 0.0, 1.0, 1.5 * PI, FRAC_PI_2, true),
            Close,
        ])],
        // Tin
        11 => vec![bar(-1.0, 0.3, 1.0, 0.3), bar(-0.4, -1.0, -0.4, 1.5)],
        // Tiwaz
        12 => vec![stroke([
            Move(0.0, -1.5),
            Line(0.0, 1.5),
            Move(-1.0, -0.5),
            Line(0.0, -1.5),
            Line(1.0, -0.5),
        ])],
        // Algiz
        13 => vec![stroke([
            Move(0.0, 1.5),
            Line(0.0, -0.5),
            Move(0.0, -0.5),
            Line(-1.0, -1.5),
            Move(0.0, -0.5),
            Line(1.0, -1.5),
        ])],
        // Dagaz
        14 => vec![stroke([
            Move(-1.0, -1.0),
            Line(1.0, -1.0),
            Line(1.0, 1.0),
            Line(-1.0, 1.0),
            Line(-1.0, -1.0),
            Move(-1.0, 1.0),
            Line(1.0, -1.0),
        ])],
        // Uruz
        15 => vec![stroke([
            Move(-1.0, -1.0),
            Line(-1.0, 1.0),
            Line(1.0, 0.0),
            Close,
        ])],
        // Star burst
        16 => (0..5)
            .map(|i| {
                let a = f64::from(i) * PI * 0.4;
                bar(0.0, 0.0, a.cos(), a.sin())
            })
            .collect(),
        // Moon phase
        17 => vec![stroke([circ(0.0, 0.0, 1.0)]), fill([circ(-0.3, 0.0, 0.6)])],
        // Saturn
        18 => vec![
            bar(-1.0, 1.0, 1.0, 1.0),
            bar(0.0, 1.0, 0.0, -1.0),
            stroke([circ(0.0, -0.3, 0.7)]),
        ],
        // Jupiter
        19 => vec![
            bar(-1.0, 0.0, 1.0, 0.0),
            bar(0.0, -1.0, 0.0, 1.0),
            stroke([arc(-0.5, -0.5, 0.4, FRAC_PI_2, 1.5 * PI, false)]),
        ],
        // Circle and square
        20 => vec![
            stroke([circ(0.0, 0.0, 0.7)]),
            stroke([Rect(-0.5, -0.5, 1.0, 1.0)]),
        ],
        // Squared cross
        21 => vec![
            stroke([
                Move(-1.0, 0.0),
                Line(1.0, 0.0),
                Move(0.0, -1.0),
                Line(0.0, 1.0),
            ]),
            stroke([Rect(-0.3, -0.3, 0.6, 0.6)]),
        ],
        // Spiral of shrinking quarter arcs
        22 => vec![stroke((0..4).map(|i| {
            let i = f64::from(i);
            arc(0.0, 0.0, 1.0 - i * 0.2, i * FRAC_PI_2, (i + 1.0) * FRAC_PI_2, false)
        }))],
        // Atom
        23 => std::iter::once(stroke([circ(0.0, 0.0, 1.0)]))
            .chain((0..3).map(|i| stroke([oval(1.0, 0.4, f64::from(i) * PI / 1.5)])))
            .collect(),
        // Diamond
        24 => vec![stroke([
            Move(0.0, -1.0),
            Line(1.0, 0.0),
            Line(0.0, 1.0),
            Line(-1.0, 0.0),
            Close,
        ])],
        // Hexagon
        25 => vec![stroke(
            (0..6)
                .map(|i| {
                    let a = f64::from(i) * PI / 3.0;
                    if i == 0 {
                        Move(a.cos(), a.sin())
                    } else {
                        Line(a.cos(), a.sin())
                    }
                })
                .chain([Close]),
        )],
        // Three interlocking circles
        26 => (0..3)
            .map(|i| {
                let a = f64::from(i) * TAU / 3.0;
                stroke([circ(0.5 * a.cos(), 0.5 * a.sin(), 0.7)])
            })
            .collect(),
        // Grid
        27 => vec![stroke([
            Rect(-1.0, -1.0, 2.0, 2.0),
            Move(-1.0, 0.0),
            Line(1.0, 0.0),
            Move(0.0, -1.0),
            Line(0.0, 1.0),
        ])],
        // Circuit
        28 => std::iter::once(fill([circ(0.0, 0.0, 0.3)]))
            .chain((0..4).flat_map(|i| {
                let (s, c) = (f64::from(i) * FRAC_PI_2).sin_cos();
                [
                    bar(0.3 * c, 0.3 * s, c, s),
                    stroke([circ(c, s, 0.2)]),
                ]
            }))
            .collect(),
        // Helix
        29 => [
            stroke([
                Move(-1.0, -1.0),
                Cubic([-0.5, 0.0, 0.5, 0.0, 1.0, 1.0]),
            ]),
            stroke([
                Move(-1.0, 1.0),
                Cubic([-0.5, 0.0, 0.5, 0.0, 1.0, -1.0]),
            ]),
        ]
        .into_iter()
        .chain([-1.0, -0.5, 0.0, 0.5, 1.0].map(|i| bar(-0.5 + i, -0.5 * i, 0.5 + i, 0.5 * i)))
        .collect(),
        // Eye in triangle
        30 => vec![
            up_triangle(),
            stroke([oval(0.5, 0.3, 0.0)]),
            fill([circ(0.0, 0.0, 0.15)]),
        ],
        // Infinity
        _ => vec![stroke([
            Move(-0.5, 0.0),
            Cubic([-0.5, -1.0, 0.5, -1.0, 0.5, 0.0]),
            Cubic([0.5, 1.0, -0.5, 1.0, -0.5, 0.0]),
        ])],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/symbols.rs"]
mod tests;
