use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};

use marquee_core::replicator::ReplicatedTrack;
use marquee_core::Direction;

use super::slide::SlideWidget;
use crate::metrics::CellMetrics;
use crate::theme::Theme;

/// The viewport with the replicated track translated by `offset` columns.
///
/// Slide edges are placed at fractional positions and rounded individually,
/// so the frame at offset `-period` matches the frame at 0 exactly. A
/// rightward track is anchored one period to the left; its leading copy then
/// covers the viewport while it travels right.
pub struct MarqueeWidget<'t, 'a, C> {
    track: &'t ReplicatedTrack<'a, C>,
    offset: f64,
    direction: Direction,
    metrics: CellMetrics,
    theme: &'t Theme,
}

impl<'t, 'a, C: AsRef<str>> MarqueeWidget<'t, 'a, C> {
    pub fn new(track: &'t ReplicatedTrack<'a, C>, theme: &'t Theme) -> Self {
        Self {
            track,
            offset: 0.0,
            direction: Direction::Left,
            metrics: CellMetrics::default(),
            theme,
        }
    }

    /// Current translate offset in columns
    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn metrics(mut self, metrics: CellMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    fn render_slide(&self, content: &str, index: usize, start: i64, width: u16, area: Rect, buf: &mut Buffer) {
        let scratch_area = Rect::new(0, 0, width, area.height);
        let mut scratch = Buffer::empty(scratch_area);
        let accent = self.theme.slide_color(index);
        SlideWidget::new(content)
            .style(Style::default().fg(accent).bg(self.theme.bg1))
            .border_style(Style::default().fg(self.theme.grey1).bg(self.theme.bg0))
            .render(scratch_area, &mut scratch);

        for sx in 0..width {
            let x = start + sx as i64;
            if x < 0 || x >= area.width as i64 {
                continue;
            }
            for y in 0..area.height {
                if let (Some(src), Some(dst)) = (
                    scratch.cell((sx, y)),
                    buf.cell_mut((area.x + x as u16, area.y + y)),
                ) {
                    *dst = src.clone();
                }
            }
        }
    }
}

impl<C: AsRef<str>> Widget for MarqueeWidget<'_, '_, C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.bg0));
        if self.track.is_empty() || area.is_empty() {
            return;
        }

        let slide_cols = self.metrics.columns(self.track.slide_width());
        let period = slide_cols * self.track.source_len() as f64;
        let anchor = match self.direction {
            Direction::Left => 0.0,
            Direction::Right => -period,
        };
        let origin = self.offset + anchor;

        for (k, entry) in self.track.iter().enumerate() {
            let start = (k as f64 * slide_cols + origin).round() as i64;
            let end = ((k + 1) as f64 * slide_cols + origin).round() as i64;
            if end <= 0 || start >= area.width as i64 || end <= start {
                continue;
            }
            let width = (end - start).min(u16::MAX as i64) as u16;
            self.render_slide(entry.content.as_ref(), entry.key.index, start, width, area, buf);
        }
    }
}
