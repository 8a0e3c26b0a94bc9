use iced::Font;
use iced::font::Weight;

/// UI font configuration.
#[derive(Debug, Clone)]
pub(crate) struct UiFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for UiFonts {
    fn default() -> Self {
        Self {
            font_type: Font::default(),
            size: 14.0,
        }
    }
}

/// Emphasis faces derived from the UI font.
#[derive(Debug, Clone)]
pub(crate) struct EmphasisFonts {
    pub(crate) semibold: Font,
    pub(crate) bold: Font,
}

impl Default for EmphasisFonts {
    fn default() -> Self {
        Self {
            semibold: Font {
                weight: Weight::Semibold,
                ..Font::default()
            },
            bold: Font {
                weight: Weight::Bold,
                ..Font::default()
            },
        }
    }
}

/// Combined font configuration for the course page.
#[derive(Debug, Default, Clone)]
pub(crate) struct FontsConfig {
    pub(crate) ui: UiFonts,
    pub(crate) emphasis: EmphasisFonts,
}

impl FontsConfig {
    /// Small print such as durations and badges.
    pub(crate) fn caption_size(&self) -> f32 {
        self.ui.size - 2.0
    }

    /// Secondary lines such as roles and list items.
    pub(crate) fn small_size(&self) -> f32 {
        self.ui.size
    }

    /// Regular paragraph text.
    pub(crate) fn body_size(&self) -> f32 {
        self.ui.size + 2.0
    }
}
