//! The two fixed background/text palettes.

use serde::Serialize;

use folio_core::Theme;

/// Surface colors for one theme. Accent colors come from the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub card_background: &'static str,
    pub border: &'static str,
}

pub const DARK: Palette = Palette {
    background: "#0F172A",
    text: "#F1F5F9",
    card_background: "#1E293B",
    border: "#334155",
};

pub const LIGHT: Palette = Palette {
    background: "#FFFFFF",
    text: "#1F2937",
    card_background: "#F8FAFC",
    border: "#E5E7EB",
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Palette {
        match theme {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_do_not_share_surface_colors() {
        assert_ne!(DARK.background, LIGHT.background);
        assert_ne!(DARK.text, LIGHT.text);
        assert_ne!(DARK.card_background, LIGHT.card_background);
        assert_ne!(DARK.border, LIGHT.border);
    }

    #[test]
    fn for_theme_selects_palette() {
        assert_eq!(Palette::for_theme(Theme::Dark), DARK);
        assert_eq!(Palette::for_theme(Theme::Light), LIGHT);
    }
}
