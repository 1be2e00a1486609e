use ratatui::style::Color;

/// Colors of the marquee screen: backdrop, slide cards, status bar
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Borders and secondary text
    pub grey1: Color,
    pub grey2: Color,

    // Slide accents
    pub orange: Color,
    pub yellow: Color,
    pub green: Color,
    pub aqua: Color,
    pub blue: Color,
    pub purple: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub accent: Color,
}

impl Theme {
    /// Colors cycled through by consecutive slides
    pub fn slide_palette(&self) -> [Color; 6] {
        [
            self.aqua,
            self.yellow,
            self.purple,
            self.green,
            self.orange,
            self.blue,
        ]
    }

    /// Accent color of the slide at authored position `index`
    pub fn slide_color(&self, index: usize) -> Color {
        let palette = self.slide_palette();
        palette[index % palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        // Default to Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            grey1: Color::Rgb(0x92, 0x83, 0x74),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            orange: Color::Rgb(0xe7, 0x8a, 0x4e),
            yellow: Color::Rgb(0xd8, 0xa6, 0x57),
            green: Color::Rgb(0xa9, 0xb6, 0x65),
            aqua: Color::Rgb(0x89, 0xb4, 0x82),
            blue: Color::Rgb(0x7d, 0xae, 0xa3),
            purple: Color::Rgb(0xd3, 0x86, 0x9b),
            success: Color::Rgb(0xa9, 0xb6, 0x65),
            warning: Color::Rgb(0xe7, 0x8a, 0x4e),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_colors_cycle() {
        let theme = Theme::default();
        assert_eq!(theme.slide_color(0), theme.aqua);
        assert_eq!(theme.slide_color(5), theme.blue);
        assert_eq!(theme.slide_color(6), theme.slide_color(0));
    }
}
