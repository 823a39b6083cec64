//! Named color triples selectable in place of a raw color scheme keyword.

/// A primary/background/accent color triple.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleTheme {
    pub id: String,
    pub name: String,
    pub description: String,
    pub primary_color: String,
    pub background_color: String,
    pub accent_color: String,
    pub category: String,
    pub is_preset: bool,
}

/// Lookup seam between the drawing engine and whatever owns the theme table.
pub trait ThemeLookup {
    fn theme(&self, id: &str) -> Option<&CircleTheme>;
}

/// Lookup that never resolves anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoThemes;

impl ThemeLookup for NoThemes {
    fn theme(&self, _id: &str) -> Option<&CircleTheme> {
        None
    }
}

impl ThemeLookup for [CircleTheme] {
    fn theme(&self, id: &str) -> Option<&CircleTheme> {
        self.iter().find(|t| t.id == id)
    }
}

impl ThemeLookup for Vec<CircleTheme> {
    fn theme(&self, id: &str) -> Option<&CircleTheme> {
        self.as_slice().theme(id)
    }
}

/// The built-in preset table.
#[derive(Clone, Debug)]
pub struct PresetThemes {
    themes: Vec<CircleTheme>,
}

impl Default for PresetThemes {
    fn default() -> Self {
        Self::new()
    }
}

impl PresetThemes {
    pub fn new() -> Self {
        let themes = PRESETS
            .iter()
            .map(|p| CircleTheme {
                id: p.id.to_string(),
                name: p.name.to_string(),
                description: p.description.to_string(),
                primary_color: p.primary.to_string(),
                background_color: p.background.to_string(),
                accent_color: p.accent.to_string(),
                category: p.category.to_string(),
                is_preset: true,
            })
            .collect();
        Self { themes }
    }

    pub fn all(&self) -> &[CircleTheme] {
        &self.themes
    }

    pub fn by_category(&self, category: &str) -> Vec<&CircleTheme> {
        themes_by_category(&self.themes, category)
    }
}

/// Themes of `themes` whose category id equals `category`, in table order.
pub fn themes_by_category<'a>(themes: &'a [CircleTheme], category: &str) -> Vec<&'a CircleTheme> {
    themes.iter().filter(|t| t.category == category).collect()
}

impl ThemeLookup for PresetThemes {
    fn theme(&self, id: &str) -> Option<&CircleTheme> {
        self.themes.as_slice().theme(id)
    }
}

/// `(id, display name)` of every preset category.
pub const THEME_CATEGORIES: [(&str, &str); 7] = [
    ("japanese", "Japanese"),
    ("futuristic", "Futuristic"),
    ("ancient", "Ancient"),
    ("mystical", "Mystical"),
    ("celestial", "Celestial"),
    ("dark", "Dark"),
    ("alchemy", "Alchemy"),
];

struct Preset {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    primary: &'static str,
    background: &'static str,
    accent: &'static str,
    category: &'static str,
}

const PRESETS: [Preset; 10] = [
    Preset {
        id: "traditional-japanese",
        name: "Traditional",
        description: "Calm palette drawn from traditional Japanese design",
        primary: "#BA2636",
        background: "#2C2C2C",
        accent: "#E8B568",
        category: "japanese",
    },
    Preset {
        id: "zen-garden",
        name: "Zen Garden",
        description: "Moss and raw silk tones of a Japanese garden",
        primary: "#7BA05B",
        background: "#EBE8E1",
        accent: "#8C754A",
        category: "japanese",
    },
    Preset {
        id: "sakura",
        name: "Sakura",
        description: "Cherry blossom pink over lacquer black",
        primary: "#F2AEB1",
        background: "#0D0D0D",
        accent: "#F8F1E9",
        category: "japanese",
    },
    Preset {
        id: "futuristic",
        name: "Futuristic",
        description: "Saturated cyberpunk cyan and magenta",
        primary: "#00FFFF",
        background: "#0A0A1E",
        accent: "#FF00FF",
        category: "futuristic",
    },
    Preset {
        id: "neon-dream",
        name: "Neon Dream",
        description: "Neon signage over a night city",
        primary: "#FE53BB",
        background: "#1A1A2E",
        accent: "#08F7FE",
        category: "futuristic",
    },
    Preset {
        id: "ancient-stone",
        name: "Ancient Stone",
        description: "Weathered gold on old stone tablets",
        primary: "#BCA37F",
        background: "#3E3232",
        accent: "#822F2F",
        category: "ancient",
    },
    Preset {
        id: "mystical-forest",
        name: "Mystical Forest",
        description: "Emerald light in a deep forest",
        primary: "#70E2A3",
        background: "#1B3440",
        accent: "#EDD892",
        category: "mystical",
    },
    Preset {
        id: "celestial",
        name: "Celestial",
        description: "Starlight over the night sky",
        primary: "#F0E7DB",
        background: "#081F2D",
        accent: "#FFCB6B",
        category: "celestial",
    },
    Preset {
        id: "blood-moon",
        name: "Blood Moon",
        description: "A red moon in a dark night",
        primary: "#D33C36",
        background: "#130B13",
        accent: "#782020",
        category: "dark",
    },
    Preset {
        id: "alchemist-gold",
        name: "Alchemist Gold",
        description: "Bright gold and burning orange of the classic alchemist",
        primary: "#F1C40F",
        background: "#2C3E50",
        accent: "#E67E22",
        category: "alchemy",
    },
];

#[cfg(test)]
#[path = "../../tests/unit/config/theme.rs"]
mod tests;
