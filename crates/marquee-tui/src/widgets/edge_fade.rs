use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use marquee_core::fade::{Edge, FadeOverlay};

use crate::metrics::CellMetrics;
use crate::themes::parse_css_color;

/// Blends the cells under each fade overlay toward the overlay color
pub struct EdgeFadeWidget<'a> {
    overlays: &'a [FadeOverlay],
    metrics: CellMetrics,
    /// Stand-in for unparseable overlay colors and for non-RGB cell colors
    fallback: Color,
}

impl<'a> EdgeFadeWidget<'a> {
    pub fn new(overlays: &'a [FadeOverlay], fallback: Color) -> Self {
        Self {
            overlays,
            metrics: CellMetrics::default(),
            fallback,
        }
    }

    pub fn metrics(mut self, metrics: CellMetrics) -> Self {
        self.metrics = metrics;
        self
    }
}

impl Widget for EdgeFadeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        for overlay in self.overlays {
            let color = parse_css_color(&overlay.color).unwrap_or(self.fallback);
            // Both fades together may cover the whole viewport, never more
            let width = self
                .metrics
                .whole_columns(overlay.width)
                .min(area.width.div_ceil(2));

            for i in 0..width {
                let alpha = overlay.opacity_at((i as f64 + 0.5) / width as f64);
                if alpha <= 0.0 {
                    continue;
                }
                let x = match overlay.edge {
                    Edge::Left => area.x + i,
                    Edge::Right => area.right() - 1 - i,
                };
                for y in area.top()..area.bottom() {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        let fg = blend(cell.fg, color, alpha, self.fallback);
                        let bg = blend(cell.bg, color, alpha, self.fallback);
                        cell.set_fg(fg).set_bg(bg);
                    }
                }
            }
        }
    }
}

/// Mix `over` onto `base` with opacity `alpha`
pub fn blend(base: Color, over: Color, alpha: f64, fallback: Color) -> Color {
    let (br, bg, bb) = rgb_of(base).or_else(|| rgb_of(fallback)).unwrap_or((0, 0, 0));
    let Some((or, og, ob)) = rgb_of(over) else {
        return base;
    };
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |b: u8, o: u8| (b as f64 + (o as f64 - b as f64) * alpha).round() as u8;
    Color::Rgb(mix(br, or), mix(bg, og), mix(bb, ob))
}

fn rgb_of(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        Color::Black => Some((0, 0, 0)),
        Color::White => Some((0xff, 0xff, 0xff)),
        _ => None,
    }
}
