use ratatui::style::{Color, Style};

/// Color palette for the transcript display
///
/// A single bluish dark scheme in the iceberg family; kept as one palette
/// struct so every renderer takes its colors from the same place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub bg: Color,
    pub panel_bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub blue: Color,
    pub cyan: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
}

pub struct Theme;

impl Theme {
    /// The built-in palette
    pub fn palette() -> ThemePalette {
        ThemePalette {
            bg: Color::Rgb(22, 24, 33),
            panel_bg: Color::Rgb(30, 33, 50),
            fg: Color::Rgb(198, 200, 209),
            muted: Color::Rgb(107, 112, 137),
            border: Color::Rgb(60, 65, 90),
            blue: Color::Rgb(132, 160, 198),
            cyan: Color::Rgb(137, 184, 194),
            green: Color::Rgb(180, 190, 130),
            yellow: Color::Rgb(226, 164, 120),
            red: Color::Rgb(226, 120, 120),
        }
    }
}

impl ThemePalette {
    /// Base style for transcript text
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Muted style for secondary text
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted).bg(self.bg)
    }
}

impl Default for ThemePalette {
    fn default() -> Self {
        Theme::palette()
    }
}
