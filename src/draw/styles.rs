//! Per-style pattern composers.
//!
//! Complexity works as an additive gate: each level draws everything the level below draws plus
//! its own layers. Some levels add nothing for a given style (elemental and runic level 2), and
//! that is kept as is.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::config::model::Style;
use crate::draw::pen::{Pen, arc, circle_path};
use crate::draw::primitives::{circle, hexagram, line, radial_tick, regular_polygon, star};
use crate::draw::symbols::trace_glyph;
use crate::foundation::core::{BezPath, Point, TOP, polar};
use crate::foundation::math::slot_angle;

/// Draws one style's layers for `(center, radius, complexity)`.
pub type ComposeFn = fn(&mut Pen<'_>, Point, f64, u32);

pub fn composer_for(style: Style) -> ComposeFn {
    match style {
        Style::Classic => classic,
        Style::Elemental => elemental,
        Style::Runic => runic,
        Style::Celestial => celestial,
        Style::Modern => modern,
    }
}

/// Stroke the shared 0.6r circle, then the layers of `style`.
pub fn draw_geometric_pattern(
    pen: &mut Pen<'_>,
    center: Point,
    radius: f64,
    complexity: u32,
    style: Style,
    color: &str,
) {
    pen.set_stroke_color(color);
    pen.set_fill_color(color);
    pen.set_line_width(1.0);

    circle(pen, center, radius * 0.6);
    composer_for(style)(pen, center, radius, complexity);
}

pub fn classic(pen: &mut Pen<'_>, center: Point, radius: f64, complexity: u32) {
    if complexity >= 2 {
        regular_polygon(pen, center, radius * 0.8, 3, 0.0);
    }
    if complexity >= 3 {
        regular_polygon(pen, center, radius * 0.7, 4, FRAC_PI_4);
    }
    if complexity >= 4 {
        star(pen, center, radius * 0.75, 5);
        for i in 0..5 {
            let angle = slot_angle(i, 5, TOP);
            radial_tick(pen, center, radius * 0.75, radius * 0.3, angle);
        }
    }
    if complexity >= 5 {
        hexagram(pen, center, radius * 0.85, FRAC_PI_2);
        circle(pen, center, radius * 0.4);
        for i in 0..12 {
            let angle = slot_angle(i, 12, 0.0);
            radial_tick(pen, center, radius * 0.4, radius * 0.6, angle);
        }
    }
}

pub fn elemental(pen: &mut Pen<'_>, center: Point, radius: f64, complexity: u32) {
    circle(pen, center, radius * 0.4);

    let elements = (complexity as usize + 1).min(4);
    for i in 0..elements {
        let angle = slot_angle(i, 4, 0.0);
        pen.save();
        pen.translate(polar(center, radius * 0.7, angle).to_vec2());
        pen.rotate(angle);
        // Fire, water, air and earth share their shapes with the first four symbols.
        trace_glyph(pen, i % 4, radius * 0.15);
        pen.restore();
    }

    if complexity >= 3 {
        for i in 0..elements {
            let a = polar(center, radius * 0.7, slot_angle(i, 4, 0.0));
            let b = polar(center, radius * 0.7, slot_angle((i + 1) % 4, 4, 0.0));
            line(pen, a, b);
        }
    }
    if complexity >= 4 {
        circle(pen, center, radius * 0.85);
        for i in 0..8 {
            let angle = slot_angle(i, 8, 0.0);
            radial_tick(pen, center, radius * 0.85, radius * 0.8, angle);
        }
    }
    if complexity >= 5 {
        circle(pen, center, radius * 0.3);
        let d = radius * 0.2;
        let mut cross = BezPath::new();
        cross.move_to((center.x - d, center.y));
        cross.line_to((center.x + d, center.y));
        cross.move_to((center.x, center.y - d));
        cross.line_to((center.x, center.y + d));
        pen.stroke(&cross);
    }
}

/// The five rune shapes placed around the runic ring, in placement order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rune {
    Tiwaz,
    Algiz,
    Ehwaz,
    Dagaz,
    Hagalaz,
}

impl Rune {
    pub const CYCLE: [Rune; 5] = [
        Rune::Tiwaz,
        Rune::Algiz,
        Rune::Ehwaz,
        Rune::Dagaz,
        Rune::Hagalaz,
    ];

    /// Open strokes of the rune around the local origin, scaled by `s`.
    pub fn path(self, s: f64) -> BezPath {
        let mut p = BezPath::new();
        match self {
            Rune::Tiwaz => {
                p.move_to((0.0, -s * 1.5));
                p.line_to((0.0, s * 1.5));
                p.move_to((-s, -s * 0.5));
                p.line_to((0.0, -s * 1.5));
                p.line_to((s, -s * 0.5));
            }
            Rune::Algiz => {
                p.move_to((0.0, s * 1.5));
                p.line_to((0.0, -s * 0.5));
                p.move_to((0.0, -s * 0.5));
                p.line_to((-s, -s * 1.5));
                p.move_to((0.0, -s * 0.5));
                p.line_to((s, -s * 1.5));
            }
            Rune::Ehwaz => {
                p.move_to((-s * 0.5, -s * 1.5));
                p.line_to((-s * 0.5, s * 1.5));
                p.move_to((s * 0.5, -s * 1.5));
                p.line_to((s * 0.5, s * 1.5));
                p.move_to((-s * 0.5, 0.0));
                p.line_to((s * 0.5, 0.0));
            }
            Rune::Dagaz => {
                p.move_to((-s, -s));
                p.line_to((s, -s));
                p.line_to((s, s));
                p.line_to((-s, s));
                p.line_to((-s, -s));
                p.move_to((-s, s));
                p.line_to((s, -s));
            }
            Rune::Hagalaz => {
                p.move_to((-s * 0.5, -s * 1.5));
                p.line_to((-s * 0.5, s * 1.5));
                p.move_to((-s * 0.5, 0.0));
                p.line_to((s * 0.5, -s * 1.5));
                p.line_to((s * 0.5, s * 1.5));
            }
        }
        p
    }
}

pub fn runic(pen: &mut Pen<'_>, center: Point, radius: f64, complexity: u32) {
    circle(pen, center, radius * 0.5);

    let runes = complexity as usize * 2;
    for i in 0..runes {
        let angle = slot_angle(i, runes, 0.0);
        pen.save();
        pen.translate(polar(center, radius * 0.75, angle).to_vec2());
        pen.rotate(angle);
        pen.stroke(&Rune::CYCLE[i % 5].path(radius * 0.08));
        pen.restore();
    }

    if complexity >= 3 {
        regular_polygon(pen, center, radius * 0.3, 4, FRAC_PI_2);
    }
    if complexity >= 4 {
        let (x, y) = (center.x, center.y);
        let mut binding = BezPath::new();
        binding.move_to((x, y - radius * 0.2));
        binding.line_to((x, y + radius * 0.2));
        binding.move_to((x - radius * 0.1, y - radius * 0.15));
        binding.line_to((x + radius * 0.1, y - radius * 0.15));
        binding.move_to((x - radius * 0.1, y + radius * 0.15));
        binding.line_to((x + radius * 0.1, y + radius * 0.15));
        pen.stroke(&binding);
    }
    if complexity >= 5 {
        circle(pen, center, radius * 0.85);
        for i in 0..8 {
            let notch = polar(center, radius * 0.85, slot_angle(i, 8, 0.0));
            circle(pen, notch, radius * 0.05);
        }
    }
}

pub fn celestial(pen: &mut Pen<'_>, center: Point, radius: f64, complexity: u32) {
    circle(pen, center, radius * 0.2);

    let rays = complexity as usize * 4;
    for i in 0..rays {
        radial_tick(
            pen,
            center,
            radius * 0.2,
            radius * 0.5,
            slot_angle(i, rays, 0.0),
        );
    }

    circle(pen, center, radius * 0.65);

    let planets = (complexity as usize + 2).min(7);
    for i in 0..planets {
        let angle = slot_angle(i, planets, 0.0);
        let planet = polar(center, radius * 0.65, angle);
        circle(pen, planet, radius * 0.06);
        if complexity >= 3 {
            let moon = polar(planet, radius * 0.1, angle + FRAC_PI_4);
            circle(pen, moon, radius * 0.02);
            circle(pen, planet, radius * 0.1);
        }
    }

    if complexity >= 4 {
        circle(pen, center, radius * 0.85);
        for i in 0..12 {
            let a1 = i as f64 * PI / 6.0;
            let a2 = (i + 1) as f64 * PI / 6.0;
            let mut segment = BezPath::new();
            arc(&mut segment, center, radius * 0.85, a1, a2, false);
            pen.stroke(&segment);
            radial_tick(pen, center, radius * 0.85, radius * 0.78, a1);
        }
    }
    if complexity >= 5 {
        for i in 0..planets {
            let a = polar(center, radius * 0.65, slot_angle(i, planets, 0.0));
            let b = polar(
                center,
                radius * 0.65,
                slot_angle((i + 2) % planets, planets, 0.0),
            );
            line(pen, a, b);
        }
    }
}

pub fn modern(pen: &mut Pen<'_>, center: Point, radius: f64, complexity: u32) {
    let inner = radius * 0.3;
    circle(pen, center, inner);

    let grid = (complexity as usize + 1).max(3);
    let cell = inner * 2.0 / grid as f64;
    pen.save();
    pen.translate((center.x - inner, center.y - inner));
    for i in 0..=grid {
        let t = i as f64 * cell;
        line(pen, Point::new(0.0, t), Point::new(inner * 2.0, t));
        line(pen, Point::new(t, 0.0), Point::new(t, inner * 2.0));
    }
    pen.restore();

    let sides = complexity as usize + 3;
    regular_polygon(pen, center, radius * 0.8, sides, FRAC_PI_2);

    if complexity >= 3 {
        for i in 0..sides {
            line(
                pen,
                center,
                polar(center, radius * 0.8, slot_angle(i, sides, 0.0)),
            );
        }
    }
    if complexity >= 4 {
        for i in 0..sides {
            let node = polar(center, radius * 0.8, slot_angle(i, sides, 0.0));
            // Nodes take the primary color, never the background fill.
            pen.fill(&circle_path(node, radius * 0.02));
        }
        circle(pen, center, radius * 0.55);
    }
    if complexity >= 5 {
        regular_polygon(pen, center, radius * 0.4, sides / 2, FRAC_PI_2);

        pen.save();
        pen.translate(center.to_vec2());
        pen.rotate(FRAC_PI_4);
        let half = inner * 0.7;
        for i in -2..=2 {
            let t = f64::from(i) * half / 2.0;
            line(pen, Point::new(-half, t), Point::new(half, t));
            line(pen, Point::new(t, -half), Point::new(t, half));
        }
        pen.restore();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/styles.rs"]
mod tests;
