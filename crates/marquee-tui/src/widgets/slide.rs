use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Fixed-width slide wrapper: a rounded card with its content centered
#[derive(Debug, Clone)]
pub struct SlideWidget<'a> {
    content: &'a str,
    style: Style,
    border_style: Style,
}

impl<'a> SlideWidget<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            style: Style::default(),
            border_style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }
}

impl Widget for SlideWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Cards need room for both borders; narrower slides show bare text
        let inner = if area.width >= 3 && area.height >= 3 {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(self.border_style)
                .style(self.style);
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            buf.set_style(area, self.style);
            area
        };

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let label = truncate_to_width(self.content, inner.width as usize);
        let row = Rect::new(inner.x, inner.y + (inner.height - 1) / 2, inner.width, 1);
        Paragraph::new(Line::from(label))
            .style(self.style.add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .render(row, buf);
    }
}

/// Cut `text` to at most `max_width` columns, marking the cut with an ellipsis
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
            .collect()
    }

    #[test]
    fn test_content_centered_in_card() {
        let area = Rect::new(0, 0, 9, 3);
        let mut buf = Buffer::empty(area);
        SlideWidget::new("abc").render(area, &mut buf);

        assert_eq!(row(&buf, 0), "╭───────╮");
        assert_eq!(row(&buf, 1), "│  abc  │");
        assert_eq!(row(&buf, 2), "╰───────╯");
    }

    #[test]
    fn test_narrow_slide_has_no_card() {
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        SlideWidget::new("xy").render(area, &mut buf);
        assert_eq!(row(&buf, 0), "xy");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Crossterm", 5), "Cros…");
        assert_eq!(truncate_to_width("Rust", 4), "Rust");
        assert_eq!(truncate_to_width("Rust", 0), "");
    }
}
