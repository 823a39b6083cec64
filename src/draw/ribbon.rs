use std::f64::consts::{FRAC_PI_2, TAU};

use crate::config::model::Style;
use crate::draw::pen::Pen;
use crate::foundation::core::{Point, TOP, polar};
use crate::foundation::math::SplitMix64;
use crate::render::surface::{FontSpec, TextAlign, TextBaseline};

pub const OUTER_FONT_FAMILY: &str = "Cinzel, serif";
pub const JAPANESE_FONT_FAMILY: &str = "'Noto Sans JP', sans-serif";

/// Phrase running around the outer ring for `style`.
pub fn outer_corpus(style: Style) -> &'static str {
    match style {
        Style::Classic => {
            "EQUIVALENT EXCHANGE • HUMANKIND CANNOT GAIN ANYTHING WITHOUT GIVING SOMETHING IN RETURN •"
        }
        Style::Elemental => {
            "EARTH • AIR • FIRE • WATER • SPIRIT • MATTER • ENERGY • TRANSFORMATION • BALANCE •"
        }
        Style::Runic => {
            "ANSUZ • URUZ • THURISAZ • KENAZ • RAIDO • GEBO • SOWILO • HAGALAZ • TIWAZ • BERKANA • ALGIZ •"
        }
        Style::Celestial => {
            "SUN • MOON • MERCURY • VENUS • MARS • JUPITER • SATURN • CELESTIAL ORDER • COSMIC BALANCE •"
        }
        Style::Modern => {
            "MATTER • ENERGY • TIME • SPACE • ENTROPY • ORDER • CHAOS • CREATION • DESTRUCTION • UNITY •"
        }
    }
}

/// Second, smaller ribbon drawn only by some styles: `(phrase, font family)`.
pub fn inner_ribbon(style: Style) -> Option<(&'static str, &'static str)> {
    match style {
        Style::Runic => Some((
            "守護の印 • 力の源 • 創造の力 • 変革の理 • 反応の環 • 等価交換 •",
            JAPANESE_FONT_FAMILY,
        )),
        Style::Celestial => Some((
            "AS ABOVE • SO BELOW • THE MACROCOSM • THE MICROCOSM • HARMONY • BALANCE •",
            OUTER_FONT_FAMILY,
        )),
        _ => None,
    }
}

/// Lay `text` out one character at a time around a circle, starting at the top and running
/// clockwise, each character rotated so its baseline is tangent to the circle.
pub fn draw_text_along_circle(
    pen: &mut Pen<'_>,
    text: &str,
    center: Point,
    radius: f64,
    font_size: f64,
    font_family: &str,
) {
    pen.set_font(FontSpec {
        size_px: font_size,
        family: font_family.to_string(),
        align: TextAlign::Center,
        baseline: TextBaseline::Middle,
    });

    let count = text.chars().count();
    if count == 0 {
        return;
    }
    let step = TAU / count as f64;
    let mut buf = [0u8; 4];
    for (i, ch) in text.chars().enumerate() {
        let angle = i as f64 * step + TOP;
        pen.save();
        pen.translate(polar(center, radius, angle).to_vec2());
        pen.rotate(angle + FRAC_PI_2);
        pen.fill_text(ch.encode_utf8(&mut buf));
        pen.restore();
    }
}

/// Outer ribbon at 0.9r plus, for runic and celestial, an inner ribbon at 0.45r.
pub fn draw_runic_text(pen: &mut Pen<'_>, center: Point, radius: f64, style: Style, color: &str) {
    pen.set_fill_color(color);

    let font_size = (radius * 0.05).floor();
    draw_text_along_circle(
        pen,
        outer_corpus(style),
        center,
        radius * 0.9,
        font_size,
        OUTER_FONT_FAMILY,
    );

    if let Some((phrase, family)) = inner_ribbon(style) {
        draw_text_along_circle(
            pen,
            phrase,
            center,
            radius * 0.45,
            font_size * 0.8,
            family,
        );
    }
}

const RUNES: [char; 24] = [
    'ᚠ', 'ᚢ', 'ᚦ', 'ᚨ', 'ᚱ', 'ᚲ', 'ᚷ', 'ᚹ', 'ᚺ', 'ᚾ', 'ᛁ', 'ᛃ', 'ᛇ', 'ᛈ', 'ᛉ', 'ᛊ', 'ᛏ', 'ᛒ', 'ᛖ',
    'ᛗ', 'ᛚ', 'ᛜ', 'ᛞ', 'ᛟ',
];

/// First and last code point of the alchemical symbol block used by [`generate_runic_text`].
const ALCHEMICAL: (u32, u32) = (0x1F700, 0x1F73F);

/// `length` characters drawn from the Elder Futhark runes and 64 alchemical symbols.
///
/// Deterministic for a given `seed`. The default circle pipeline never calls this.
pub fn generate_runic_text(length: usize, seed: u64) -> String {
    let alchemical = (ALCHEMICAL.1 - ALCHEMICAL.0 + 1) as usize;
    let pool = RUNES.len() + alchemical;
    let mut rng = SplitMix64::new(seed);
    (0..length)
        .map(|_| {
            let pick = rng.next_index(pool);
            if pick < RUNES.len() {
                RUNES[pick]
            } else {
                char::from_u32(ALCHEMICAL.0 + (pick - RUNES.len()) as u32).unwrap_or(RUNES[0])
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/draw/ribbon.rs"]
mod tests;
