use std::f64::consts::TAU;

use smallvec::SmallVec;

use crate::foundation::core::{Affine, BezPath, Point, Rect, Vec2};
use crate::render::surface::{FontSpec, Paint, StrokeStyle, Surface};

/// Flattening tolerance for arcs, in local units.
const ARC_TOLERANCE: f64 = 0.1;

#[derive(Clone, Debug)]
struct PenState {
    transform: Affine,
    stroke: StrokeStyle,
    fill: String,
    font: FontSpec,
}

/// Stateful drawing handle over a [`Surface`].
///
/// Mirrors the small part of a 2D canvas context the circle engine relies on: a current
/// transform built from `translate`/`rotate`, stroke and fill colors, a font, and a
/// `save`/`restore` stack holding all of it. The surface itself stays stateless; every call
/// forwards the current transform.
pub struct Pen<'a> {
    surface: &'a mut dyn Surface,
    state: PenState,
    stack: SmallVec<[PenState; 8]>,
}

impl<'a> Pen<'a> {
    pub fn new(surface: &'a mut dyn Surface) -> Self {
        Self {
            surface,
            state: PenState {
                transform: Affine::IDENTITY,
                stroke: StrokeStyle {
                    color: "#000000".to_string(),
                    width: 1.0,
                },
                fill: "#000000".to_string(),
                font: FontSpec::default(),
            },
            stack: SmallVec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn transform(&self) -> Affine {
        self.state.transform
    }

    pub fn set_stroke_color(&mut self, color: &str) {
        color.clone_into(&mut self.state.stroke.color);
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.state.stroke.width = width;
    }

    pub fn set_fill_color(&mut self, color: &str) {
        color.clone_into(&mut self.state.fill);
    }

    pub fn set_font(&mut self, font: FontSpec) {
        self.state.font = font;
    }

    pub fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    /// Pop the last saved state. Unbalanced restores are ignored.
    pub fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    pub fn translate(&mut self, offset: impl Into<Vec2>) {
        self.state.transform = self.state.transform * Affine::translate(offset.into());
    }

    pub fn rotate(&mut self, angle: f64) {
        self.state.transform = self.state.transform * Affine::rotate(angle);
    }

    pub fn stroke(&mut self, path: &BezPath) {
        if path.elements().is_empty() {
            return;
        }
        self.surface
            .stroke_path(path, self.state.transform, &self.state.stroke);
    }

    /// Fill with the current fill color.
    pub fn fill(&mut self, path: &BezPath) {
        let paint = Paint::Solid(self.state.fill.clone());
        self.fill_with(path, &paint);
    }

    pub fn fill_with(&mut self, path: &BezPath, paint: &Paint) {
        if path.elements().is_empty() {
            return;
        }
        self.surface.fill_path(path, self.state.transform, paint);
    }

    /// Draw `text` at the local origin with the current font and fill color.
    pub fn fill_text(&mut self, text: &str) {
        self.surface.fill_text(
            text,
            self.state.transform,
            &self.state.font,
            &self.state.fill,
        );
    }

    /// Reset the whole surface to transparent.
    pub fn clear(&mut self) {
        let rect = Rect::new(
            0.0,
            0.0,
            f64::from(self.surface.width()),
            f64::from(self.surface.height()),
        );
        self.surface.clear_rect(rect);
    }
}

/// Signed sweep of a canvas-style arc from `start` to `end`.
///
/// Clockwise sweeps land in `[0, 2π)` unless the raw difference already covers a full turn;
/// counter-clockwise sweeps mirror that with negative values.
pub fn canvas_sweep(start: f64, end: f64, ccw: bool) -> f64 {
    if ccw {
        let d = start - end;
        if d >= TAU { -TAU } else { -d.rem_euclid(TAU) }
    } else {
        let d = end - start;
        if d >= TAU { TAU } else { d.rem_euclid(TAU) }
    }
}

/// Append a circular arc. A non-empty path is first connected to the arc start with a line.
pub fn arc(path: &mut BezPath, center: Point, r: f64, start: f64, end: f64, ccw: bool) {
    ellipse(path, center, Vec2::new(r, r), 0.0, start, end, ccw);
}

/// Append an elliptical arc with radii `radii` rotated by `x_rotation`.
pub fn ellipse(
    path: &mut BezPath,
    center: Point,
    radii: Vec2,
    x_rotation: f64,
    start: f64,
    end: f64,
    ccw: bool,
) {
    let (sr, cr) = x_rotation.sin_cos();
    let (sa, ca) = start.sin_cos();
    let first = Point::new(
        center.x + radii.x * ca * cr - radii.y * sa * sr,
        center.y + radii.x * ca * sr + radii.y * sa * cr,
    );
    if path.elements().is_empty() {
        path.move_to(first);
    } else {
        path.line_to(first);
    }

    let sweep = canvas_sweep(start, end, ccw);
    if sweep == 0.0 {
        return;
    }
    let arc = kurbo::Arc {
        center,
        radii,
        start_angle: start,
        sweep_angle: sweep,
        x_rotation,
    };
    path.extend(arc.append_iter(ARC_TOLERANCE));
}

/// Fresh path holding one full circle.
pub fn circle_path(center: Point, r: f64) -> BezPath {
    let mut path = BezPath::new();
    arc(&mut path, center, r, 0.0, TAU, false);
    path
}

#[cfg(test)]
#[path = "../../tests/unit/draw/pen.rs"]
mod tests;
