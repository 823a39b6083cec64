//! Alchemaker procedurally draws transmutation circles: layered rings, polygons, stars,
//! alchemical glyphs and circular text ribbons placed around a common center.
//!
//! Drawing is deterministic and stateless. A [`CircleConfig`] plus a [`Surface`] go in, draw
//! calls come out:
//!
//! - Record a circle into a [`DrawList`] with [`generate_transmutation_circle`]
//! - Rasterize it with [`CpuBackend`] into a [`FrameRGBA`], or do both with [`render_circle`]
//! - Keep finished circles in a [`MemGallery`]
#![forbid(unsafe_code)]

mod foundation;

/// Color resolution and contrast helpers.
pub mod color;
/// Circle configuration and theme tables.
pub mod config;
/// Pen, primitives, style composers, glyphs and text ribbons.
pub mod draw;
/// Saved-circle records.
pub mod gallery;
/// The circle pipeline.
pub mod generate;
/// Surfaces, draw lists and the CPU raster backend.
pub mod render;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Point, Rect, Rgba8, Rgba8Premul, TOP, Vec2, polar,
};
pub use crate::foundation::error::{CircleError, CircleResult};

pub use crate::color::contrast::{ContrastInfo, ContrastLevel, color_contrast_info, contrast_ratio};
pub use crate::color::resolve::{BackgroundFill, ResolvedColors, resolve_colors};
pub use crate::config::model::{BackgroundPreset, CircleConfig, ColorScheme, Style};
pub use crate::config::theme::{
    CircleTheme, NoThemes, PresetThemes, THEME_CATEGORIES, ThemeLookup, themes_by_category,
};
pub use crate::draw::ribbon::generate_runic_text;
pub use crate::gallery::store::{CircleRecord, MemGallery};
pub use crate::generate::pipeline::{
    CircleLayout, RenderOptions, generate_transmutation_circle, record_circle, render_circle,
};
pub use crate::render::backend::FrameRGBA;
pub use crate::render::cpu::CpuBackend;
pub use crate::render::fingerprint::{OpsFingerprint, fingerprint_ops};
pub use crate::render::ops::{DrawList, DrawOp};
pub use crate::render::surface::{
    FontSpec, GradientStop, Paint, StrokeStyle, Surface, TextAlign, TextBaseline,
};
pub use crate::render::text::FontBook;
