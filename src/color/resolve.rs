use crate::config::model::{BackgroundPreset, CircleConfig};
use crate::config::theme::ThemeLookup;

/// Stop colors of the `gradient` background, top-left corner first.
pub const GRADIENT_STOPS: [&str; 3] = ["#312E81", "#581C87", "#831843"];
/// Fill painted behind the circle on the `paper` background.
pub const PAPER_DISK_COLOR: &str = "rgba(0, 0, 0, 0.8)";

/// How the full surface is painted before any circle geometry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackgroundFill {
    /// Flat fill with a CSS color string, passed through as resolved.
    Solid(String),
    /// Top-left to bottom-right ramp over [`GRADIENT_STOPS`].
    Gradient,
    /// Light paper fill plus a dark disk of the full circle radius.
    Paper,
}

impl BackgroundFill {
    /// Flat color of this fill, if it has a single one.
    pub fn base_color(&self) -> Option<&str> {
        match self {
            Self::Solid(c) => Some(c.as_str()),
            Self::Gradient => None,
            Self::Paper => BackgroundPreset::Paper.hex(),
        }
    }
}

/// Output of [`resolve_colors`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedColors {
    pub primary_color: String,
    pub background: BackgroundFill,
}

/// Resolve primary and background colors independently with the precedence
/// custom colors > theme > keyword table > default.
///
/// Custom values are used verbatim; malformed strings are not validated here.
pub fn resolve_colors(config: &CircleConfig, themes: &dyn ThemeLookup) -> ResolvedColors {
    let custom = |v: &Option<String>| -> Option<String> {
        if !config.use_custom_colors {
            return None;
        }
        v.as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
    };
    let theme = config
        .theme_id
        .as_deref()
        .and_then(|id| themes.theme(id));

    let primary_color = custom(&config.custom_primary_color)
        .or_else(|| theme.map(|t| t.primary_color.clone()))
        .unwrap_or_else(|| config.color_scheme.hex().to_string());

    let background = match custom(&config.custom_background_color)
        .or_else(|| theme.map(|t| t.background_color.clone()))
    {
        Some(c) => BackgroundFill::Solid(c),
        None => match config.background_color {
            BackgroundPreset::Gradient => BackgroundFill::Gradient,
            BackgroundPreset::Paper => BackgroundFill::Paper,
            other => BackgroundFill::Solid(
                other
                    .hex()
                    .unwrap_or(DEFAULT_BACKGROUND)
                    .to_string(),
            ),
        },
    };

    ResolvedColors {
        primary_color,
        background,
    }
}

const DEFAULT_BACKGROUND: &str = "#1E1E2A";

#[cfg(test)]
#[path = "../../tests/unit/color/resolve.rs"]
mod tests;
