use kurbo::PathEl;
use xxhash_rust::xxh3::Xxh3;

use crate::foundation::core::{Affine, BezPath};
use crate::render::ops::{DrawList, DrawOp};
use crate::render::surface::{FontSpec, Paint, Surface, TextAlign, TextBaseline};

const XXH3_SEED: u64 = 0x8b5ad4a0c7d8e9f1;

/// Stable 128-bit fingerprint of a recorded op stream.
///
/// Two renders of the same configuration onto same-sized surfaces must produce equal
/// fingerprints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct OpsFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl OpsFingerprint {
    pub fn to_hex(self) -> String {
        format!("{:016x}{:016x}", self.hi, self.lo)
    }
}

pub fn fingerprint_ops(list: &DrawList) -> OpsFingerprint {
    let mut h = StableHasher::new();
    h.write_u32(list.width());
    h.write_u32(list.height());
    h.write_u32(list.len() as u32);
    for op in list.ops() {
        write_op(&mut h, op);
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> OpsFingerprint {
        let v = self.inner.digest128();
        OpsFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_op(h: &mut StableHasher, op: &DrawOp) {
    match op {
        DrawOp::Clear { rect } => {
            h.write_u8(0);
            h.write_f64(rect.x0);
            h.write_f64(rect.y0);
            h.write_f64(rect.x1);
            h.write_f64(rect.y1);
        }
        DrawOp::FillPath {
            path,
            transform,
            paint,
        } => {
            h.write_u8(1);
            write_path(h, path);
            write_affine(h, *transform);
            write_paint(h, paint);
        }
        DrawOp::StrokePath {
            path,
            transform,
            stroke,
        } => {
            h.write_u8(2);
            write_path(h, path);
            write_affine(h, *transform);
            h.write_str(&stroke.color);
            h.write_f64(stroke.width);
        }
        DrawOp::FillText {
            text,
            transform,
            font,
            color,
        } => {
            h.write_u8(3);
            h.write_str(text);
            write_affine(h, *transform);
            write_font(h, font);
            h.write_str(color);
        }
    }
}

fn write_affine(h: &mut StableHasher, a: Affine) {
    for c in a.as_coeffs() {
        h.write_f64(c);
    }
}

fn write_path(h: &mut StableHasher, path: &BezPath) {
    let els = path.elements();
    h.write_u32(els.len() as u32);
    for el in els {
        match *el {
            PathEl::MoveTo(p) => {
                h.write_u8(0);
                h.write_f64(p.x);
                h.write_f64(p.y);
            }
            PathEl::LineTo(p) => {
                h.write_u8(1);
                h.write_f64(p.x);
                h.write_f64(p.y);
            }
            PathEl::QuadTo(p1, p2) => {
                h.write_u8(2);
                for p in [p1, p2] {
                    h.write_f64(p.x);
                    h.write_f64(p.y);
                }
            }
            PathEl::CurveTo(p1, p2, p3) => {
                h.write_u8(3);
                for p in [p1, p2, p3] {
                    h.write_f64(p.x);
                    h.write_f64(p.y);
                }
            }
            PathEl::ClosePath => h.write_u8(4),
        }
    }
}

fn write_paint(h: &mut StableHasher, paint: &Paint) {
    match paint {
        Paint::Solid(c) => {
            h.write_u8(0);
            h.write_str(c);
        }
        Paint::LinearGradient { start, end, stops } => {
            h.write_u8(1);
            h.write_f64(start.x);
            h.write_f64(start.y);
            h.write_f64(end.x);
            h.write_f64(end.y);
            h.write_u32(stops.len() as u32);
            for s in stops {
                h.write_f64(s.offset);
                h.write_str(&s.color);
            }
        }
    }
}

fn write_font(h: &mut StableHasher, font: &FontSpec) {
    h.write_f64(font.size_px);
    h.write_str(&font.family);
    h.write_u8(match font.align {
        TextAlign::Start => 0,
        TextAlign::Center => 1,
        TextAlign::End => 2,
    });
    h.write_u8(match font.baseline {
        TextBaseline::Alphabetic => 0,
        TextBaseline::Middle => 1,
        TextBaseline::Top => 2,
    });
}

#[cfg(test)]
#[path = "../../tests/unit/render/fingerprint.rs"]
mod tests;
