use super::Theme;
use egui::{Color32, Visuals};

/// App colors that egui's [`Visuals`] do not cover, mostly the card faces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub accent: Color32,
    pub card_fill: Color32,
    pub card_fill_hovered: Color32,
    pub card_stroke: Color32,
    pub card_text: Color32,
    pub window_fill: Color32,
}

impl Palette {
    pub fn of(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    fn dark() -> Self {
        Self {
            accent: Color32::from_rgb(102, 153, 255),
            card_fill: Color32::from_rgb(32, 36, 44),
            card_fill_hovered: Color32::from_rgb(40, 46, 58),
            card_stroke: Color32::from_rgb(62, 70, 84),
            card_text: Color32::from_rgb(224, 228, 236),
            window_fill: Color32::from_rgb(22, 25, 31),
        }
    }

    fn light() -> Self {
        Self {
            accent: Color32::from_rgb(38, 98, 217),
            card_fill: Color32::WHITE,
            card_fill_hovered: Color32::from_rgb(244, 247, 252),
            card_stroke: Color32::from_rgb(208, 214, 224),
            card_text: Color32::from_rgb(34, 38, 46),
            window_fill: Color32::from_rgb(246, 247, 250),
        }
    }
}

pub fn visuals(theme: Theme) -> Visuals {
    let palette = Palette::of(theme);

    let mut visuals = if theme.is_dark() {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    visuals.hyperlink_color = palette.accent;
    visuals.panel_fill = palette.window_fill;
    visuals.selection.bg_fill = palette.accent;
    visuals.window_fill = palette.window_fill;

    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visuals_track_the_theme() {
        assert!(visuals(Theme::Dark).dark_mode);
        assert!(!visuals(Theme::Light).dark_mode);
    }

    #[test]
    fn visuals_pick_up_the_palette_fill() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(visuals(theme).panel_fill, Palette::of(theme).window_fill);
        }
    }

    #[test]
    fn palettes_differ_between_themes() {
        assert_ne!(Palette::of(Theme::Light), Palette::of(Theme::Dark));
    }
}
