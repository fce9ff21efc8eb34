/// Two-valued UI theme preference persisted by the hosting page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Particle colour per theme as linear RGB (light theme renders black points
/// on a light page, dark theme white points).
pub const POINT_COLOUR_LIGHT: [f32; 3] = [0.0, 0.0, 0.0];
pub const POINT_COLOUR_DARK: [f32; 3] = [1.0, 1.0, 1.0];

pub fn point_colour(theme: Theme) -> [f32; 3] {
    match theme {
        Theme::Light => POINT_COLOUR_LIGHT,
        Theme::Dark => POINT_COLOUR_DARK,
    }
}

/// Block quote accent border colour per theme.
pub const QUOTE_ACCENT_LIGHT: &str = "#3182ce";
pub const QUOTE_ACCENT_DARK: &str = "#63b3ed";

/// Block quote tinted background per theme.
pub const QUOTE_BACKGROUND_LIGHT: &str = "#f7fafc";
pub const QUOTE_BACKGROUND_DARK: &str = "#2d3748";

pub fn quote_accent(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => QUOTE_ACCENT_LIGHT,
        Theme::Dark => QUOTE_ACCENT_DARK,
    }
}

pub fn quote_background(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => QUOTE_BACKGROUND_LIGHT,
        Theme::Dark => QUOTE_BACKGROUND_DARK,
    }
}

/// Code spans and blocks share one colour scheme in both themes.
pub const CODE_BACKGROUND: &str = "#171923";
pub const CODE_FOREGROUND: &str = "#ffffff";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_names_round_trip() {
        assert_eq!(Theme::from_name("light"), Some(Theme::Light));
        assert_eq!(Theme::from_name("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_name("sepia"), None);
        assert_eq!(Theme::Dark.name(), "dark");
    }

    #[test]
    fn point_colours_match_theme() {
        assert_eq!(point_colour(Theme::Light), [0.0, 0.0, 0.0]);
        assert_eq!(point_colour(Theme::Dark), [1.0, 1.0, 1.0]);
    }
}
