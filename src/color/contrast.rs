//! WCAG 2.0 contrast helpers used by the CLI to vet color pairs.

/// WCAG conformance bucket of a contrast ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContrastLevel {
    Aaa,
    Aa,
    Fail,
}

impl ContrastLevel {
    pub fn for_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else {
            Self::Fail
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Aaa => "AAA compliant (excellent readability)",
            Self::Aa => "AA compliant (good readability)",
            Self::Fail => "not compliant (readability issues)",
        }
    }
}

/// Summary returned by [`color_contrast_info`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastInfo {
    pub contrast_ratio: f64,
    pub level: ContrastLevel,
    pub compliance_level: &'static str,
    pub rgb: [u8; 3],
}

/// Parse `#rgb` / `#rrggbb` (the `#` is optional).
pub fn hex_to_rgb(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let byte = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some([byte(0)?, byte(2)?, byte(4)?])
}

/// Lowercase `#rrggbb`.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

pub fn relative_luminance([r, g, b]: [u8; 3]) -> f64 {
    let lin = |c: u8| {
        let c = f64::from(c) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * lin(r) + 0.7152 * lin(g) + 0.0722 * lin(b)
}

/// Contrast ratio in `1.0..=21.0`, order-independent. `None` if either color fails to parse.
pub fn contrast_ratio(a: &str, b: &str) -> Option<f64> {
    let la = relative_luminance(hex_to_rgb(a)?);
    let lb = relative_luminance(hex_to_rgb(b)?);
    let (light, dark) = if la >= lb { (la, lb) } else { (lb, la) };
    Some((light + 0.05) / (dark + 0.05))
}

pub fn color_contrast_info(foreground: &str, background: &str) -> Option<ContrastInfo> {
    let contrast_ratio = contrast_ratio(foreground, background)?;
    let level = ContrastLevel::for_ratio(contrast_ratio);
    Some(ContrastInfo {
        contrast_ratio,
        level,
        compliance_level: level.description(),
        rgb: hex_to_rgb(foreground)?,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/color/contrast.rs"]
mod tests;
