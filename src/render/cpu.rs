use std::collections::HashMap;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgba8};
use crate::foundation::error::{CircleError, CircleResult};
use crate::render::backend::FrameRGBA;
use crate::render::composite::over_in_place;
use crate::render::ops::{DrawList, DrawOp};
use crate::render::surface::{FontSpec, GradientStop, Paint, StrokeStyle, Surface};
use crate::render::text::{FontBook, TextBrushRgba8, TextLayoutEngine};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct GradientKey {
    w: u16,
    h: u16,
    axis: [u64; 4],
    stops: SmallVec<[(u64, [u8; 4]); 4]>,
}

/// CPU raster backend powered by `vello_cpu` for vector/text rasterization.
///
/// Executes a recorded [`DrawList`] into a premultiplied [`FrameRGBA`]. A backend instance keeps
/// its font registrations and gradient images between renders and may be reused.
pub struct CpuBackend {
    text: TextLayoutEngine,
    gradient_cache: HashMap<GradientKey, vello_cpu::Image>,
    warned_no_fonts: bool,
}

impl CpuBackend {
    pub fn new(fonts: &FontBook) -> CircleResult<Self> {
        Ok(Self {
            text: TextLayoutEngine::new(fonts)?,
            gradient_cache: HashMap::new(),
            warned_no_fonts: false,
        })
    }

    /// Registered font family names, in registration order.
    pub fn font_families(&self) -> Vec<String> {
        self.text.families().map(str::to_string).collect()
    }

    /// Rasterize every op of `list` in order.
    ///
    /// `Clear` ops split the stream: each run of drawing ops is rendered into a scratch pixmap
    /// and composited over the accumulated frame.
    #[tracing::instrument(skip_all, fields(width = list.width(), height = list.height(), ops = list.len()))]
    pub fn render(&mut self, list: &DrawList) -> CircleResult<FrameRGBA> {
        let width_u16: u16 = list
            .width()
            .try_into()
            .map_err(|_| CircleError::render("surface width exceeds u16"))?;
        let height_u16: u16 = list
            .height()
            .try_into()
            .map_err(|_| CircleError::render("surface height exceeds u16"))?;

        let mut frame = FrameRGBA {
            width: list.width(),
            height: list.height(),
            data: vec![0; (list.width() as usize) * (list.height() as usize) * 4],
            premultiplied: true,
        };
        if width_u16 == 0 || height_u16 == 0 {
            return Ok(frame);
        }

        let mut scratch = vello_cpu::Pixmap::new(width_u16, height_u16);
        let mut segment: Vec<&DrawOp> = Vec::new();
        for op in list.ops() {
            match op {
                DrawOp::Clear { rect } => {
                    self.flush_segment(&segment, &mut scratch, &mut frame)?;
                    segment.clear();
                    clear_region(&mut frame, *rect);
                }
                _ => segment.push(op),
            }
        }
        self.flush_segment(&segment, &mut scratch, &mut frame)?;

        tracing::debug!(
            strokes = list.stroke_count(),
            fills = list.fill_count(),
            texts = list.text_count(),
            "rendered draw list"
        );
        Ok(frame)
    }

    fn flush_segment(
        &mut self,
        segment: &[&DrawOp],
        scratch: &mut vello_cpu::Pixmap,
        frame: &mut FrameRGBA,
    ) -> CircleResult<()> {
        if segment.is_empty() {
            return Ok(());
        }
        let (w, h) = (scratch.width(), scratch.height());
        let mut ctx = vello_cpu::RenderContext::new(w, h);
        for op in segment {
            self.draw_op(&mut ctx, op)?;
        }
        ctx.flush();
        clear_pixmap_to_transparent(scratch);
        ctx.render_to_pixmap(scratch);
        over_in_place(&mut frame.data, scratch.data_as_u8_slice())
    }

    fn draw_op(&mut self, ctx: &mut vello_cpu::RenderContext, op: &DrawOp) -> CircleResult<()> {
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        match op {
            DrawOp::Clear { .. } => Ok(()),
            DrawOp::FillPath {
                path,
                transform,
                paint,
            } => self.fill_path(ctx, path, *transform, paint),
            DrawOp::StrokePath {
                path,
                transform,
                stroke,
            } => {
                stroke_path(ctx, path, *transform, stroke);
                Ok(())
            }
            DrawOp::FillText {
                text,
                transform,
                font,
                color,
            } => self.fill_text(ctx, text, *transform, font, color),
        }
    }

    fn fill_path(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        path: &BezPath,
        transform: Affine,
        paint: &Paint,
    ) -> CircleResult<()> {
        ctx.set_transform(affine_to_cpu(transform));
        match paint {
            Paint::Solid(color) => {
                let Some(c) = parse_color(color) else {
                    return Ok(());
                };
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
            }
            Paint::LinearGradient { start, end, stops } => {
                let img = self.gradient_paint(*start, *end, stops, ctx.width(), ctx.height())?;
                // Gradient images live in surface space regardless of the path transform.
                ctx.set_paint_transform(affine_to_cpu(transform.inverse()));
                ctx.set_paint(img);
            }
        }
        ctx.fill_path(&bezpath_to_cpu(path));
        Ok(())
    }

    fn fill_text(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        transform: Affine,
        font: &FontSpec,
        color: &str,
    ) -> CircleResult<()> {
        if !self.text.has_fonts() {
            if !self.warned_no_fonts {
                tracing::warn!("no fonts registered; text ops are skipped");
                self.warned_no_fonts = true;
            }
            return Ok(());
        }
        if !font.size_px.is_finite() || font.size_px <= 0.0 || text.is_empty() {
            return Ok(());
        }
        let Some(c) = parse_color(color) else {
            return Ok(());
        };
        let brush = TextBrushRgba8 {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        };
        let Some(shaped) = self.text.shape(text, font, brush)? else {
            return Ok(());
        };

        let (dx, dy) = shaped.anchor_offset(font.align, font.baseline);
        ctx.set_transform(affine_to_cpu(transform * Affine::translate((dx, dy))));
        for line in shaped.layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&shaped.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }

    fn gradient_paint(
        &mut self,
        start: Point,
        end: Point,
        stops: &[GradientStop],
        w: u16,
        h: u16,
    ) -> CircleResult<vello_cpu::Image> {
        let resolved: SmallVec<[(f64, Rgba8); 4]> = stops
            .iter()
            .map(|s| {
                (
                    s.offset.clamp(0.0, 1.0),
                    parse_color(&s.color).unwrap_or(Rgba8::TRANSPARENT),
                )
            })
            .collect();
        let key = GradientKey {
            w,
            h,
            axis: [
                start.x.to_bits(),
                start.y.to_bits(),
                end.x.to_bits(),
                end.y.to_bits(),
            ],
            stops: resolved
                .iter()
                .map(|(o, c)| (o.to_bits(), [c.r, c.g, c.b, c.a]))
                .collect(),
        };
        if let Some(img) = self.gradient_cache.get(&key).cloned() {
            return Ok(img);
        }

        let axis = end - start;
        let len2 = axis.hypot2();
        let mut bytes = vec![0u8; (w as usize) * (h as usize) * 4];
        for y in 0..h as usize {
            for x in 0..w as usize {
                let p = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                let t = if len2 <= f64::EPSILON {
                    0.0
                } else {
                    ((p - start).dot(axis) / len2).clamp(0.0, 1.0)
                };
                let c = sample_stops(&resolved, t).to_premul();
                let idx = (y * w as usize + x) * 4;
                bytes[idx..idx + 4].copy_from_slice(&c.to_array());
            }
        }

        let pixmap = pixmap_from_premul_bytes(&bytes, w, h);
        let img = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };
        self.gradient_cache.insert(key, img.clone());
        Ok(img)
    }
}

fn stroke_path(
    ctx: &mut vello_cpu::RenderContext,
    path: &BezPath,
    transform: Affine,
    stroke: &StrokeStyle,
) {
    let Some(c) = parse_color(&stroke.color) else {
        return;
    };
    if !stroke.width.is_finite() || stroke.width <= 0.0 {
        return;
    }
    ctx.set_transform(affine_to_cpu(transform));
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
    ctx.set_stroke(
        vello_cpu::kurbo::Stroke::new(stroke.width)
            .with_join(vello_cpu::kurbo::Join::Miter)
            .with_miter_limit(10.0)
            .with_caps(vello_cpu::kurbo::Cap::Butt),
    );
    ctx.stroke_path(&bezpath_to_cpu(path));
}

fn parse_color(css: &str) -> Option<Rgba8> {
    let parsed = Rgba8::parse_css(css);
    if parsed.is_none() {
        tracing::debug!(color = css, "unparseable color renders as transparent");
    }
    parsed.filter(|c| c.a > 0)
}

/// Piecewise-linear interpolation over sorted stops; clamps outside the first/last stop.
fn sample_stops(stops: &[(f64, Rgba8)], t: f64) -> Rgba8 {
    let Some(&(first_o, first_c)) = stops.first() else {
        return Rgba8::TRANSPARENT;
    };
    if t <= first_o {
        return first_c;
    }
    for pair in stops.windows(2) {
        let (o0, c0) = pair[0];
        let (o1, c1) = pair[1];
        if t <= o1 {
            let span = o1 - o0;
            let u = if span <= f64::EPSILON {
                1.0
            } else {
                (t - o0) / span
            };
            let lerp = |a: u8, b: u8| -> u8 {
                let af = f64::from(a);
                let bf = f64::from(b);
                (af + (bf - af) * u).round().clamp(0.0, 255.0) as u8
            };
            return Rgba8::new(
                lerp(c0.r, c1.r),
                lerp(c0.g, c1.g),
                lerp(c0.b, c1.b),
                lerp(c0.a, c1.a),
            );
        }
    }
    stops.last().map(|&(_, c)| c).unwrap_or(Rgba8::TRANSPARENT)
}

fn clear_region(frame: &mut FrameRGBA, rect: Rect) {
    let w = frame.width as usize;
    let clamp_x = |v: f64| v.clamp(0.0, frame.width as f64) as usize;
    let clamp_y = |v: f64| v.clamp(0.0, frame.height as f64) as usize;
    let (x0, x1) = (clamp_x(rect.x0.floor()), clamp_x(rect.x1.ceil()));
    let (y0, y1) = (clamp_y(rect.y0.floor()), clamp_y(rect.y1.ceil()));
    if x0 >= x1 {
        return;
    }
    for y in y0..y1 {
        let row = y * w * 4;
        frame.data[row + x0 * 4..row + x1 * 4].fill(0);
    }
}

fn clear_pixmap_to_transparent(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn pixmap_from_premul_bytes(bytes: &[u8], w: u16, h: u16) -> vello_cpu::Pixmap {
    let mut may_have_opacities = false;
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| {
            may_have_opacities |= px[3] != 255;
            vello_cpu::peniko::color::PremulRgba8 {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }
        })
        .collect::<Vec<_>>();
    vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, may_have_opacities)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
