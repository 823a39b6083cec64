//! Font registry and single-line text shaping for the raster backend.

use std::path::Path;
use std::sync::Arc;

use crate::foundation::error::{CircleError, CircleResult};
use crate::render::surface::{FontSpec, TextAlign, TextBaseline};

/// Font files available to the raster backend, in registration order.
///
/// The first registered font is the fallback for families that match nothing.
#[derive(Clone, Debug, Default)]
pub struct FontBook {
    faces: Vec<Arc<Vec<u8>>>,
}

impl FontBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_font_bytes(&mut self, bytes: Vec<u8>) {
        self.faces.push(Arc::new(bytes));
    }

    pub fn add_font_file(&mut self, path: impl AsRef<Path>) -> CircleResult<()> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            CircleError::Other(anyhow::anyhow!(
                "failed to read font '{}': {e}",
                path.display()
            ))
        })?;
        self.add_font_bytes(bytes);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

/// Straight RGBA8 brush carried through Parley layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

struct RegisteredFace {
    family: String,
    font: vello_cpu::peniko::FontData,
}

/// A shaped single line plus the font its glyph ids refer to.
pub(crate) struct ShapedText {
    pub(crate) layout: parley::Layout<TextBrushRgba8>,
    pub(crate) font: vello_cpu::peniko::FontData,
}

/// Stateful helper for building Parley layouts from a [`FontBook`].
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    faces: Vec<RegisteredFace>,
}

impl TextLayoutEngine {
    /// Register every font in `book`. Fails if some entry contains no usable face.
    pub(crate) fn new(book: &FontBook) -> CircleResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let mut faces = Vec::with_capacity(book.len());
        for bytes in &book.faces {
            let families = font_ctx
                .collection
                .register_fonts(parley::fontique::Blob::from(bytes.as_ref().clone()), None);
            let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
                CircleError::render("no font families registered from font bytes")
            })?;
            let family = font_ctx
                .collection
                .family_name(family_id)
                .ok_or_else(|| CircleError::render("registered font family has no name"))?
                .to_string();
            let font = vello_cpu::peniko::FontData::new(
                vello_cpu::peniko::Blob::from(bytes.as_ref().clone()),
                0,
            );
            faces.push(RegisteredFace { family, font });
        }
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            faces,
        })
    }

    pub(crate) fn has_fonts(&self) -> bool {
        !self.faces.is_empty()
    }

    /// Registered family names in registration order.
    pub(crate) fn families(&self) -> impl Iterator<Item = &str> {
        self.faces.iter().map(|f| f.family.as_str())
    }

    fn face_for(&self, font: &FontSpec) -> Option<&RegisteredFace> {
        font.families()
            .find_map(|want| {
                self.faces
                    .iter()
                    .find(|f| f.family.eq_ignore_ascii_case(want))
            })
            .or_else(|| self.faces.first())
    }

    /// Shape `text` on one line. `None` when no fonts are registered.
    pub(crate) fn shape(
        &mut self,
        text: &str,
        font: &FontSpec,
        brush: TextBrushRgba8,
    ) -> CircleResult<Option<ShapedText>> {
        if !font.size_px.is_finite() || font.size_px <= 0.0 {
            return Err(CircleError::render("text size_px must be finite and > 0"));
        }
        let Some(face) = self.face_for(font) else {
            return Ok(None);
        };
        let family = face.family.clone();
        let font_data = face.font.clone();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font.size_px as f32));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);

        Ok(Some(ShapedText {
            layout,
            font: font_data,
        }))
    }
}

/// Offset that moves a layout's origin so the anchor point lands on the local origin.
pub(crate) fn anchor_offset(
    width: f64,
    height: f64,
    first_baseline: f64,
    align: TextAlign,
    baseline: TextBaseline,
) -> (f64, f64) {
    let dx = match align {
        TextAlign::Start => 0.0,
        TextAlign::Center => -width / 2.0,
        TextAlign::End => -width,
    };
    let dy = match baseline {
        TextBaseline::Top => 0.0,
        TextBaseline::Middle => -height / 2.0,
        TextBaseline::Alphabetic => -first_baseline,
    };
    (dx, dy)
}

impl ShapedText {
    pub(crate) fn anchor_offset(&self, align: TextAlign, baseline: TextBaseline) -> (f64, f64) {
        let first_baseline = self
            .layout
            .lines()
            .next()
            .map(|l| f64::from(l.metrics().baseline))
            .unwrap_or(0.0);
        anchor_offset(
            f64::from(self.layout.width()),
            f64::from(self.layout.height()),
            first_baseline,
            align,
            baseline,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
