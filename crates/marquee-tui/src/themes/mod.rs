//! Theme registry and color parsing

use ratatui::style::Color;

use crate::theme::Theme;

/// bg0, bg1, bg2, grey1, grey2, orange, yellow, green, aqua, blue, purple, accent
type Palette = [u32; 12];

const NORD: Palette = [
    0x2e3440, 0x3b4252, 0x434c5e, 0x5e687a, 0xd8dee9, 0xd08770,
    0xebcb8b, 0xa3be8c, 0x8fbcbb, 0x88c0d0, 0x81a1c1, 0x8fbcbb,
];

const DRACULA: Palette = [
    0x282a36, 0x21222c, 0x44475a, 0x5a5c6d, 0x7a7c8d, 0xffb86c,
    0xf1fa8c, 0x50fa7b, 0x8be9fd, 0xbd93f9, 0xff79c6, 0xbd93f9,
];

const ONE_DARK: Palette = [
    0x282c34, 0x21252b, 0x3e4451, 0x4b5263, 0x7f848e, 0xd19a66,
    0xe5c07b, 0x98c379, 0x56b6c2, 0x61afef, 0xc678dd, 0x56b6c2,
];

const MONOKAI: Palette = [
    0x272822, 0x3e3d32, 0x49483e, 0x5f5c4d, 0x908c77, 0xfd971f,
    0xe6db74, 0xa6e22e, 0x66d9ef, 0x66d9ef, 0xae81ff, 0xae81ff,
];

fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

fn from_palette(p: &Palette) -> Theme {
    Theme {
        bg0: rgb(p[0]),
        bg1: rgb(p[1]),
        bg2: rgb(p[2]),
        grey1: rgb(p[3]),
        grey2: rgb(p[4]),
        orange: rgb(p[5]),
        yellow: rgb(p[6]),
        green: rgb(p[7]),
        aqua: rgb(p[8]),
        blue: rgb(p[9]),
        purple: rgb(p[10]),
        success: rgb(p[7]),
        warning: rgb(p[5]),
        accent: rgb(p[11]),
    }
}

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB" (plus a trailing alpha digit pair / digit, ignored)
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB[A] -> RRGGBB
        3 | 4 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        // Full form: RRGGBB[AA]
        6 | 8 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Parse a CSS color: hex, `rgb()`/`rgba()` or a basic named color
pub fn parse_css_color(value: &str) -> Option<Color> {
    let value = value.trim();
    let lower = value.to_ascii_lowercase();

    if let Some(args) = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let channels: Vec<u8> = args
            .split(',')
            .take(3)
            .map(|part| part.trim().parse::<u8>().ok())
            .collect::<Option<_>>()?;
        return match channels[..] {
            [r, g, b] => Some(Color::Rgb(r, g, b)),
            _ => None,
        };
    }

    match lower.as_str() {
        "white" => Some(Color::Rgb(0xff, 0xff, 0xff)),
        "black" => Some(Color::Rgb(0x00, 0x00, 0x00)),
        "red" => Some(Color::Rgb(0xff, 0x00, 0x00)),
        "green" => Some(Color::Rgb(0x00, 0x80, 0x00)),
        "blue" => Some(Color::Rgb(0x00, 0x00, 0xff)),
        "gray" | "grey" => Some(Color::Rgb(0x80, 0x80, 0x80)),
        _ if value.starts_with('#') => parse_hex_color(value),
        _ => None,
    }
}

/// Load a theme by name
pub fn load_theme(name: &str) -> Theme {
    match name.to_lowercase().as_str() {
        "nord" => from_palette(&NORD),
        "dracula" => from_palette(&DRACULA),
        "one-dark" | "onedark" => from_palette(&ONE_DARK),
        "monokai" => from_palette(&MONOKAI),
        // Gruvbox dark is the default and the fallback
        _ => Theme::default(),
    }
}

/// Get list of available theme names
pub fn available_themes() -> Vec<&'static str> {
    vec!["gruvbox-dark", "nord", "dracula", "one-dark", "monokai"]
}
