use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use marquee_core::{Direction, EngineState};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let config = app.slider.config();

        let state_str = match app.slider.state() {
            EngineState::Running => "RUNNING",
            EngineState::Paused => "PAUSED",
            EngineState::Uninitialized => "STATIC",
        };
        let arrow = match config.direction {
            Direction::Left => "←",
            Direction::Right => "→",
        };
        let flag = |on: bool| if on { "on" } else { "off" };

        let status_text = if let Some(msg) = &app.status_message {
            msg.clone()
        } else {
            format!(
                " {} {} | {}s | {} × {} | hover-pause: {} | fade: {}",
                state_str,
                arrow,
                config.duration_secs,
                config.width,
                app.slider.slides().len(),
                flag(config.pause_on_hover),
                flag(config.blur_borders),
            )
        };

        let help_hint = " q:quit r:reverse +/-:speed [/]:width h:hover b:fade space:pause ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let state_color = match app.slider.state() {
            EngineState::Running => theme.success,
            EngineState::Paused => theme.warning,
            EngineState::Uninitialized => theme.grey2,
        };

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(state_color).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
