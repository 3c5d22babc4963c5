//! The DaisyUI reference themes and the labels used to list them.

/// Every official DaisyUI theme, in picker order.
pub const DAISYUI_THEMES: [&str; 32] = [
    "light",
    "dark",
    "cupcake",
    "bumblebee",
    "emerald",
    "corporate",
    "synthwave",
    "retro",
    "cyberpunk",
    "valentine",
    "halloween",
    "garden",
    "forest",
    "aqua",
    "lofi",
    "pastel",
    "fantasy",
    "wireframe",
    "black",
    "luxury",
    "dracula",
    "cmyk",
    "autumn",
    "business",
    "acid",
    "lemonade",
    "night",
    "coffee",
    "winter",
    "dim",
    "nord",
    "sunset",
];

/// DaisyUI themes that render with a dark base.
pub const DAISYUI_DARK_THEMES: [&str; 11] = [
    "dark",
    "synthwave",
    "halloween",
    "forest",
    "black",
    "luxury",
    "dracula",
    "night",
    "coffee",
    "dim",
    "cyberpunk",
];

const FALLBACK_EMOJI: &str = "🎨";

/// Groups used by the theme page to lay out the DaisyUI themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeCategory {
    Classic,
    Colorful,
    Futuristic,
    Natural,
    Creative,
    Special,
}

impl ThemeCategory {
    pub const ALL: [ThemeCategory; 6] = [
        ThemeCategory::Classic,
        ThemeCategory::Colorful,
        ThemeCategory::Futuristic,
        ThemeCategory::Natural,
        ThemeCategory::Creative,
        ThemeCategory::Special,
    ];

    /// The DaisyUI themes in this group, in display order.
    pub fn themes(self) -> &'static [&'static str] {
        match self {
            ThemeCategory::Classic => &["light", "dark", "corporate", "business"],
            ThemeCategory::Colorful => &[
                "cupcake",
                "bumblebee",
                "emerald",
                "valentine",
                "garden",
                "aqua",
                "pastel",
            ],
            ThemeCategory::Futuristic => &["cyberpunk", "synthwave", "dracula", "luxury", "black"],
            ThemeCategory::Natural => &["forest", "autumn", "coffee", "winter", "nord"],
            ThemeCategory::Creative => &[
                "retro",
                "halloween",
                "fantasy",
                "wireframe",
                "acid",
                "lemonade",
                "sunset",
            ],
            ThemeCategory::Special => &["lofi", "night", "dim", "cmyk"],
        }
    }

    /// Returns the heading shown above the group.
    pub fn label(self) -> &'static str {
        match self {
            ThemeCategory::Classic => "Classic",
            ThemeCategory::Colorful => "Colorful",
            ThemeCategory::Futuristic => "Futuristic",
            ThemeCategory::Natural => "Natural",
            ThemeCategory::Creative => "Creative",
            ThemeCategory::Special => "Special",
        }
    }
}

/// Returns the group a DaisyUI theme belongs to, if any.
pub fn category(theme: &str) -> Option<ThemeCategory> {
    ThemeCategory::ALL
        .into_iter()
        .find(|group| group.themes().iter().any(|t| *t == theme))
}

/// Returns the theme identifier with its first letter uppercased.
///
/// # Example
///
/// ```rust
/// use themekeeper::display_name;
///
/// assert_eq!(display_name("dracula"), "Dracula");
/// assert_eq!(display_name(""), "");
/// ```
pub fn display_name(theme: &str) -> String {
    let mut chars = theme.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns the glyph shown next to a theme in the picker.
///
/// Themes without a dedicated glyph get a palette.
pub fn emoji(theme: &str) -> &'static str {
    match theme {
        "light" => "☀️",
        "dark" => "🌙",
        "cupcake" => "🧁",
        "bumblebee" => "🐝",
        "emerald" => "💚",
        "corporate" => "🏢",
        "synthwave" => "🌃",
        "retro" => "📼",
        "cyberpunk" => "🤖",
        "valentine" => "💝",
        "halloween" => "🎃",
        "garden" => "🌸",
        "forest" => "🌲",
        "aqua" => "🌊",
        "lofi" => "🎧",
        "pastel" => "🎨",
        "fantasy" => "🦄",
        "wireframe" => "📐",
        "black" => "⚫",
        "luxury" => "✨",
        "dracula" => "🧛",
        "cmyk" => "🖨️",
        "autumn" => "🍂",
        "business" => "💼",
        "acid" => "🟢",
        "lemonade" => "🍋",
        "night" => "🌌",
        "coffee" => "☕",
        "winter" => "❄️",
        "dim" => "🔅",
        "nord" => "🏔️",
        "sunset" => "🌅",
        _ => FALLBACK_EMOJI,
    }
}
