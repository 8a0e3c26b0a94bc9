use iced::theme::Palette;
use iced::{Color, Theme};

/// Hex color palette for the course page.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) background: String,
    pub(crate) foreground: String,
    pub(crate) dim_foreground: String,
    pub(crate) surface: String,
    pub(crate) surface_muted: String,
    pub(crate) text: String,
    pub(crate) muted_text: String,
    pub(crate) subtle_text: String,
    pub(crate) border: String,
    pub(crate) outline: String,
    pub(crate) badge: String,
    pub(crate) badge_text: String,
    pub(crate) accent: String,
    pub(crate) accent_hover: String,
    pub(crate) accent_soft: String,
    pub(crate) banner: String,
    pub(crate) highlight: String,
    pub(crate) star: String,
    pub(crate) scrim: String,
    pub(crate) green: String,
    pub(crate) yellow: String,
    pub(crate) red: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            background: String::from("#000000"),
            foreground: String::from("#FFFFFF"),
            dim_foreground: String::from("#9CA3AF"),
            surface: String::from("#FFFFFF"),
            surface_muted: String::from("#F3F4F6"),
            text: String::from("#111827"),
            muted_text: String::from("#4B5563"),
            subtle_text: String::from("#6B7280"),
            border: String::from("#E5E7EB"),
            outline: String::from("#4B5563"),
            badge: String::from("#374151"),
            badge_text: String::from("#D1D5DB"),
            // ACCENT COLORS
            accent: String::from("#9333EA"),
            accent_hover: String::from("#7E22CE"),
            accent_soft: String::from("#F3E8FF"),
            banner: String::from("#A855F7"),
            highlight: String::from("#C084FC"),
            star: String::from("#FACC15"),
            scrim: String::from("#00000080"),
            // STATUS COLORS
            green: String::from("#16A34A"),
            yellow: String::from("#EAB308"),
            red: String::from("#DC2626"),
        }
    }
}

/// Palette resolved into iced colors.
#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) background: Color,
    pub(crate) foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) surface: Color,
    pub(crate) surface_muted: Color,
    pub(crate) text: Color,
    pub(crate) muted_text: Color,
    pub(crate) subtle_text: Color,
    pub(crate) border: Color,
    pub(crate) outline: Color,
    pub(crate) badge: Color,
    pub(crate) badge_text: Color,
    pub(crate) accent: Color,
    pub(crate) accent_hover: Color,
    pub(crate) accent_soft: Color,
    pub(crate) banner: Color,
    pub(crate) highlight: Color,
    pub(crate) star: Color,
    pub(crate) scrim: Color,
    pub(crate) green: Color,
    pub(crate) yellow: Color,
    pub(crate) red: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            background: parse_hex_color(&p.background),
            foreground: parse_hex_color(&p.foreground),
            dim_foreground: parse_hex_color(&p.dim_foreground),
            surface: parse_hex_color(&p.surface),
            surface_muted: parse_hex_color(&p.surface_muted),
            text: parse_hex_color(&p.text),
            muted_text: parse_hex_color(&p.muted_text),
            subtle_text: parse_hex_color(&p.subtle_text),
            border: parse_hex_color(&p.border),
            outline: parse_hex_color(&p.outline),
            badge: parse_hex_color(&p.badge),
            badge_text: parse_hex_color(&p.badge_text),
            accent: parse_hex_color(&p.accent),
            accent_hover: parse_hex_color(&p.accent_hover),
            accent_soft: parse_hex_color(&p.accent_soft),
            banner: parse_hex_color(&p.banner),
            highlight: parse_hex_color(&p.highlight),
            star: parse_hex_color(&p.star),
            scrim: parse_hex_color(&p.scrim),
            green: parse_hex_color(&p.green),
            yellow: parse_hex_color(&p.yellow),
            red: parse_hex_color(&p.red),
        }
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA`, falling back to magenta on bad input.
pub(crate) fn parse_hex_color(value: &str) -> Color {
    match try_parse_hex_color(value) {
        Some(color) => color,
        None => {
            log::warn!("invalid palette color {value:?}");
            Color::from_rgb8(0xFF, 0x00, 0xFF)
        },
    }
}

fn try_parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
        return None;
    }

    let channel = |index: usize| {
        u8::from_str_radix(&hex[index * 2..index * 2 + 2], 16).ok()
    };

    let (r, g, b) = (channel(0)?, channel(1)?, channel(2)?);
    let alpha = if hex.len() == 8 { channel(3)? } else { u8::MAX };

    Some(Color::from_rgba8(r, g, b, f32::from(alpha) / 255.0))
}

/// Application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::from_palette(String::from("quantum"), &ColorPalette::default())
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.green,
            warning: palette.yellow,
            danger: palette.red,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    /// Build an application theme from a hex palette.
    pub(crate) fn from_palette(id: String, raw_palette: &ColorPalette) -> Self {
        Self {
            id,
            iced_palette: IcedColorPalette::from(raw_palette),
        }
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Holds the active theme.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self {
            current: AppTheme::default(),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_six_digit_hex_when_parsed_then_color_is_opaque() {
        let color = parse_hex_color("#9333EA");

        assert_eq!(color, Color::from_rgb8(0x93, 0x33, 0xEA));
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn given_eight_digit_hex_when_parsed_then_alpha_is_applied() {
        let color = parse_hex_color("#00000080");

        assert!((color.a - 128.0 / 255.0).abs() < f32::EPSILON);
        assert_eq!(color.r, 0.0);
    }

    #[test]
    fn given_malformed_hex_when_parsed_then_fallback_is_used() {
        let fallback = Color::from_rgb8(0xFF, 0x00, 0xFF);

        assert_eq!(parse_hex_color("9333EA"), fallback);
        assert_eq!(parse_hex_color("#93"), fallback);
        assert_eq!(parse_hex_color("#GG33EA"), fallback);
    }

    #[test]
    fn given_default_palette_when_resolved_then_every_color_parses() {
        let palette = IcedColorPalette::from(&ColorPalette::default());

        assert_eq!(palette.background, Color::BLACK);
        assert_eq!(palette.surface, Color::WHITE);
        assert!(palette.scrim.a < 1.0);
    }
}
