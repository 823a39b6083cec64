use std::path::Path;

use crate::foundation::error::{CircleError, CircleResult};

/// Inclusive range accepted for [`CircleConfig::complexity`] and [`CircleConfig::symbol_density`].
pub const LEVEL_RANGE: std::ops::RangeInclusive<u32> = 1..=5;
/// Inclusive range accepted for [`CircleConfig::size`].
pub const SIZE_RANGE: std::ops::RangeInclusive<u32> = 300..=1000;

/// Geometry/glyph/text theme of a circle.
///
/// Unknown names deserialize to [`Style::Classic`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Style {
    #[default]
    Classic,
    Elemental,
    Runic,
    Celestial,
    Modern,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Classic,
        Style::Elemental,
        Style::Runic,
        Style::Celestial,
        Style::Modern,
    ];

    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "elemental" => Self::Elemental,
            "runic" => Self::Runic,
            "celestial" => Self::Celestial,
            "modern" => Self::Modern,
            _ => Self::Classic,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Elemental => "elemental",
            Self::Runic => "runic",
            Self::Celestial => "celestial",
            Self::Modern => "modern",
        }
    }
}

impl From<String> for Style {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Style> for String {
    fn from(s: Style) -> Self {
        s.as_str().to_string()
    }
}

/// Named primary color. Unknown names deserialize to [`ColorScheme::Gold`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColorScheme {
    #[default]
    Gold,
    Azure,
    Crimson,
    Emerald,
    Purple,
    Silver,
    Pink,
}

impl ColorScheme {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "azure" => Self::Azure,
            "crimson" => Self::Crimson,
            "emerald" => Self::Emerald,
            "purple" => Self::Purple,
            "silver" => Self::Silver,
            "pink" => Self::Pink,
            _ => Self::Gold,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Azure => "azure",
            Self::Crimson => "crimson",
            Self::Emerald => "emerald",
            Self::Purple => "purple",
            Self::Silver => "silver",
            Self::Pink => "pink",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Self::Gold => "#FFD700",
            Self::Azure => "#3B82F6",
            Self::Crimson => "#E11D48",
            Self::Emerald => "#10B981",
            Self::Purple => "#9333EA",
            Self::Silver => "#CBD5E1",
            Self::Pink => "#F472B6",
        }
    }
}

impl From<String> for ColorScheme {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<ColorScheme> for String {
    fn from(s: ColorScheme) -> Self {
        s.as_str().to_string()
    }
}

/// Background preset keyword. Unknown names deserialize to [`BackgroundPreset::Dark`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BackgroundPreset {
    #[default]
    Dark,
    Gradient,
    Night,
    Mystic,
    Forest,
    Blood,
    Paper,
    Stone,
}

impl BackgroundPreset {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "gradient" => Self::Gradient,
            "night" => Self::Night,
            "mystic" => Self::Mystic,
            "forest" => Self::Forest,
            "blood" => Self::Blood,
            "paper" => Self::Paper,
            "stone" => Self::Stone,
            _ => Self::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Gradient => "gradient",
            Self::Night => "night",
            Self::Mystic => "mystic",
            Self::Forest => "forest",
            Self::Blood => "blood",
            Self::Paper => "paper",
            Self::Stone => "stone",
        }
    }

    /// Flat fill color. `Gradient` has none: it paints a multi-stop ramp instead.
    pub fn hex(self) -> Option<&'static str> {
        match self {
            Self::Dark => Some("#1E1E2A"),
            Self::Gradient => None,
            Self::Night => Some("#172554"),
            Self::Mystic => Some("#581c87"),
            Self::Forest => Some("#14532d"),
            Self::Blood => Some("#7f1d1d"),
            Self::Paper => Some("#fef3c7"),
            Self::Stone => Some("#4b5563"),
        }
    }
}

impl From<String> for BackgroundPreset {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<BackgroundPreset> for String {
    fn from(s: BackgroundPreset) -> Self {
        s.as_str().to_string()
    }
}

/// Everything a single render needs to know. Immutable per render call.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleConfig {
    pub complexity: u32,
    pub style: Style,
    pub color_scheme: ColorScheme,
    #[serde(default)]
    pub background_color: BackgroundPreset,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_background_color: Option<String>,
    #[serde(default)]
    pub use_custom_colors: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<String>,
    pub size: u32,
    pub symbol_density: u32,
    pub show_text: bool,
    /// Presentation-only flag; the drawing engine never reads it.
    #[serde(default = "animation_on")]
    pub animation: bool,
}

fn animation_on() -> bool {
    true
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            complexity: 3,
            style: Style::Classic,
            color_scheme: ColorScheme::Gold,
            background_color: BackgroundPreset::Dark,
            custom_primary_color: None,
            custom_background_color: None,
            use_custom_colors: false,
            theme_id: None,
            size: 500,
            symbol_density: 3,
            show_text: true,
            animation: true,
        }
    }
}

impl CircleConfig {
    pub fn from_json_str(s: &str) -> CircleResult<Self> {
        serde_json::from_str(s).map_err(|e| CircleError::serde(format!("circle config: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> CircleResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            CircleError::Other(anyhow::anyhow!(
                "failed to read config '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> CircleResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CircleError::serde(e.to_string()))
    }

    /// Check every field against its declared range.
    pub fn validate(&self) -> CircleResult<()> {
        if !LEVEL_RANGE.contains(&self.complexity) {
            return Err(CircleError::validation(format!(
                "complexity must be in 1..=5, got {}",
                self.complexity
            )));
        }
        if !LEVEL_RANGE.contains(&self.symbol_density) {
            return Err(CircleError::validation(format!(
                "symbolDensity must be in 1..=5, got {}",
                self.symbol_density
            )));
        }
        if !SIZE_RANGE.contains(&self.size) {
            return Err(CircleError::validation(format!(
                "size must be in 300..=1000, got {}",
                self.size
            )));
        }
        Ok(())
    }

    /// Copy with complexity and density forced into `1..=5` and size into `300..=1000`.
    pub fn clamped(&self) -> Self {
        let clamp = |v: u32, r: &std::ops::RangeInclusive<u32>| v.clamp(*r.start(), *r.end());
        Self {
            complexity: clamp(self.complexity, &LEVEL_RANGE),
            symbol_density: clamp(self.symbol_density, &LEVEL_RANGE),
            size: clamp(self.size, &SIZE_RANGE),
            ..self.clone()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
