//! The fixed circle pipeline: clear, background, outer rings, pattern, symbols, text.

use crate::color::resolve::{BackgroundFill, GRADIENT_STOPS, PAPER_DISK_COLOR, resolve_colors};
use crate::config::model::CircleConfig;
use crate::config::theme::{CircleTheme, PresetThemes, ThemeLookup};
use crate::draw::pen::{Pen, circle_path};
use crate::draw::primitives::circle;
use crate::draw::ribbon::draw_runic_text;
use crate::draw::styles::draw_geometric_pattern;
use crate::draw::symbols::draw_symbols;
use crate::foundation::core::{BezPath, Canvas, Point, Rect};
use crate::foundation::error::CircleResult;
use crate::render::backend::FrameRGBA;
use crate::render::cpu::CpuBackend;
use crate::render::ops::DrawList;
use crate::render::surface::{Paint, Surface};
use crate::render::text::FontBook;

/// Center and outer radius of the circle on a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleLayout {
    pub center: Point,
    pub radius: f64,
}

impl CircleLayout {
    pub fn for_canvas(width: u32, height: u32) -> Self {
        let cx = f64::from(width) / 2.0;
        let cy = f64::from(height) / 2.0;
        Self {
            center: Point::new(cx, cy),
            radius: cx.min(cy) * 0.9,
        }
    }
}

/// Draw a complete circle onto `surface`.
///
/// Returns `false` without issuing any call when the surface has no area. Complexity and
/// symbol density are clamped into `1..=5`; every other value is used as given.
#[tracing::instrument(
    skip_all,
    fields(
        width = surface.width(),
        height = surface.height(),
        style = config.style.as_str(),
        complexity = config.complexity
    )
)]
pub fn generate_transmutation_circle(
    surface: &mut dyn Surface,
    config: &CircleConfig,
    themes: &dyn ThemeLookup,
) -> bool {
    if surface.width() == 0 || surface.height() == 0 {
        tracing::debug!("empty surface, nothing drawn");
        return false;
    }

    let cfg = config.clamped();
    if cfg.complexity != config.complexity || cfg.symbol_density != config.symbol_density {
        tracing::warn!(
            complexity = config.complexity,
            symbol_density = config.symbol_density,
            "configuration out of range, clamped"
        );
    }

    let layout = CircleLayout::for_canvas(surface.width(), surface.height());
    let colors = resolve_colors(&cfg, themes);
    tracing::debug!(
        primary = %colors.primary_color,
        background = ?colors.background,
        radius = layout.radius,
        "resolved colors"
    );

    let mut pen = Pen::new(surface);
    pen.clear();
    paint_background(&mut pen, &colors.background, layout);

    let primary = colors.primary_color.as_str();
    pen.set_stroke_color(primary);
    pen.set_line_width(2.0);
    circle(&mut pen, layout.center, layout.radius);
    circle(&mut pen, layout.center, layout.radius * 0.95);

    draw_geometric_pattern(
        &mut pen,
        layout.center,
        layout.radius,
        cfg.complexity,
        cfg.style,
        primary,
    );
    draw_symbols(
        &mut pen,
        layout.center,
        layout.radius,
        cfg.complexity,
        cfg.symbol_density,
        cfg.style,
        primary,
    );
    if cfg.show_text {
        draw_runic_text(&mut pen, layout.center, layout.radius, cfg.style, primary);
    }
    true
}

fn paint_background(pen: &mut Pen<'_>, fill: &BackgroundFill, layout: CircleLayout) {
    let (w, h) = (f64::from(pen.width()), f64::from(pen.height()));
    let full = Rect::new(0.0, 0.0, w, h);
    let mut area = BezPath::new();
    area.move_to((full.x0, full.y0));
    area.line_to((full.x1, full.y0));
    area.line_to((full.x1, full.y1));
    area.line_to((full.x0, full.y1));
    area.close_path();

    match fill {
        BackgroundFill::Solid(color) => pen.fill_with(&area, &Paint::solid(color.as_str())),
        BackgroundFill::Gradient => {
            let paint = Paint::even_gradient(Point::ZERO, Point::new(w, h), &GRADIENT_STOPS);
            pen.fill_with(&area, &paint);
        }
        BackgroundFill::Paper => {
            if let Some(paper) = fill.base_color() {
                pen.fill_with(&area, &Paint::solid(paper));
            }
            pen.fill_with(
                &circle_path(layout.center, layout.radius),
                &Paint::solid(PAPER_DISK_COLOR),
            );
        }
    }
}

/// Inputs of [`render_circle`] beyond the configuration itself.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub fonts: FontBook,
    pub themes: Vec<CircleTheme>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fonts: FontBook::new(),
            themes: PresetThemes::new().all().to_vec(),
        }
    }
}

/// Record the circle for `config` into a fresh [`DrawList`] of the canvas size.
pub fn record_circle(config: &CircleConfig, canvas: Canvas, themes: &dyn ThemeLookup) -> DrawList {
    let mut list = DrawList::new(canvas.width, canvas.height);
    generate_transmutation_circle(&mut list, config, themes);
    list
}

/// Record and rasterize one circle with the CPU backend.
pub fn render_circle(
    config: &CircleConfig,
    canvas: Canvas,
    opts: &RenderOptions,
) -> CircleResult<FrameRGBA> {
    let list = record_circle(config, canvas, &opts.themes);
    let mut backend = CpuBackend::new(&opts.fonts)?;
    backend.render(&list)
}

#[cfg(test)]
#[path = "../../tests/unit/generate/pipeline.rs"]
mod tests;
