//! Minimal 2D drawing target the circle engine paints onto.
//!
//! The engine never reads pixels back. Colors travel as CSS color strings exactly as they were
//! resolved; interpreting them is the concern of whatever implements [`Surface`].

use smallvec::SmallVec;

use crate::foundation::core::{Affine, BezPath, Point, Rect};

/// One color stop of a [`Paint::LinearGradient`].
#[derive(Clone, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient axis in `0.0..=1.0`.
    pub offset: f64,
    pub color: String,
}

/// Fill source for [`Surface::fill_path`].
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(String),
    /// Linear ramp from `start` to `end` in surface space.
    LinearGradient {
        start: Point,
        end: Point,
        stops: SmallVec<[GradientStop; 4]>,
    },
}

impl Paint {
    pub fn solid(color: impl Into<String>) -> Self {
        Self::Solid(color.into())
    }

    /// Gradient with `colors` evenly spaced from `start` to `end`.
    pub fn even_gradient(start: Point, end: Point, colors: &[&str]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f64;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, c)| GradientStop {
                offset: i as f64 / last,
                color: (*c).to_string(),
            })
            .collect();
        Self::LinearGradient { start, end, stops }
    }
}

/// Stroke color and line width.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    #[default]
    Alphabetic,
    Middle,
    Top,
}

/// Font selection for [`Surface::fill_text`].
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub size_px: f64,
    /// CSS-like family list, e.g. `"Cinzel, serif"`.
    pub family: String,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl FontSpec {
    /// Family names in preference order with quotes stripped.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.family
            .split(',')
            .map(|f| f.trim().trim_matches(|c| c == '\'' || c == '"'))
            .filter(|f| !f.is_empty())
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            size_px: 10.0,
            family: "sans-serif".to_string(),
            align: TextAlign::Start,
            baseline: TextBaseline::Alphabetic,
        }
    }
}

/// A raster target of fixed integer size.
///
/// Every call carries its full transform so implementations stay stateless between calls.
pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Reset `rect` (surface space) to fully transparent.
    fn clear_rect(&mut self, rect: Rect);

    fn fill_path(&mut self, path: &BezPath, transform: Affine, paint: &Paint);

    fn stroke_path(&mut self, path: &BezPath, transform: Affine, stroke: &StrokeStyle);

    /// Draw `text` anchored at the local origin of `transform`.
    fn fill_text(&mut self, text: &str, transform: Affine, font: &FontSpec, color: &str);
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
