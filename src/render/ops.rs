use kurbo::Shape;

use crate::foundation::core::{Affine, BezPath, Rect};
use crate::render::surface::{FontSpec, Paint, StrokeStyle, Surface};

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear {
        rect: Rect,
    },
    FillPath {
        path: BezPath,
        transform: Affine,
        paint: Paint,
    },
    StrokePath {
        path: BezPath,
        transform: Affine,
        stroke: StrokeStyle,
    },
    FillText {
        text: String,
        transform: Affine,
        font: FontSpec,
        color: String,
    },
}

impl DrawOp {
    /// Surface-space bounding box of the geometry. Text ops report only their anchor point.
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Clear { rect } => *rect,
            Self::FillPath {
                path, transform, ..
            }
            | Self::StrokePath {
                path, transform, ..
            } => transform.transform_rect_bbox(path.bounding_box()),
            Self::FillText { transform, .. } => {
                let p = *transform * kurbo::Point::ZERO;
                Rect::from_points(p, p)
            }
        }
    }
}

/// Recording [`Surface`]: captures every call as a [`DrawOp`] in issue order.
///
/// Used as the engine's intermediate form: a recorded list can be inspected, fingerprinted and
/// then executed by a raster backend.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn stroke_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::StrokePath { .. }))
            .count()
    }

    pub fn fill_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillPath { .. }))
            .count()
    }

    pub fn text_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillText { .. }))
            .count()
    }

    /// Text of every `FillText` op, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every recorded stroke as `(path, transform, style)`.
    pub fn strokes(&self) -> impl Iterator<Item = (&BezPath, Affine, &StrokeStyle)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::StrokePath {
                path,
                transform,
                stroke,
            } => Some((path, *transform, stroke)),
            _ => None,
        })
    }

    /// Union of the bounds of every path op, or `None` when nothing was drawn.
    pub fn bounds(&self) -> Option<Rect> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillPath { .. } | DrawOp::StrokePath { .. }))
            .map(DrawOp::bounds)
            .reduce(|a, b| a.union(b))
    }
}

impl Surface for DrawList {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::Clear { rect });
    }

    fn fill_path(&mut self, path: &BezPath, transform: Affine, paint: &Paint) {
        self.ops.push(DrawOp::FillPath {
            path: path.clone(),
            transform,
            paint: paint.clone(),
        });
    }

    fn stroke_path(&mut self, path: &BezPath, transform: Affine, stroke: &StrokeStyle) {
        self.ops.push(DrawOp::StrokePath {
            path: path.clone(),
            transform,
            stroke: stroke.clone(),
        });
    }

    fn fill_text(&mut self, text: &str, transform: Affine, font: &FontSpec, color: &str) {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            transform,
            font: font.clone(),
            color: color.to_string(),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/ops.rs"]
mod tests;
