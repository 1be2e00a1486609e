use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use tracing::info;

use marquee_core::AppConfig;
use marquee_tui::{
    animation::Compositor,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{EdgeFadeWidget, MarqueeWidget, StatusBarWidget},
    App,
};

pub fn run(config: AppConfig, static_render: bool) -> Result<()> {
    let compositor = if static_render {
        Compositor::disabled()
    } else {
        Compositor::new()
    };

    let event_handler =
        EventHandler::new(config.ui.tick_rate_ms).with_animation_fps(config.ui.animation_fps);

    // Props are validated before the terminal is touched
    let mut app = App::new(config, compositor)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        SetTitle("Marquee")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &mut app, &event_handler);

    app.unmount();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    result
}

fn main_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    terminal.draw(|frame| draw(frame, app))?;

    // The track is on screen now
    app.mount();

    loop {
        // Use the fast frame rate only while the strip is moving
        let event = if app.needs_animation_frame() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => app.apply(handle_key_event(key)),
                AppEvent::Mouse(mouse) => app.handle_mouse(mouse),
                AppEvent::FocusLost => app.focus_lost(),
                AppEvent::Resize(width, height) => {
                    info!(width, height, "Terminal resized");
                }
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }

        terminal.draw(|frame| draw(frame, app))?;
    }

    Ok(())
}

fn draw(frame: &mut Frame, app: &mut App) {
    let size = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(app.theme.bg0)), size);

    // Title, marquee centered vertically, status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(app.ui.slide_height.max(1)),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);

    let title = Paragraph::new(Line::from(" Marquee"))
        .style(
            Style::default()
                .fg(app.theme.accent)
                .bg(app.theme.bg0)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Left);
    frame.render_widget(title, rows[0]);

    let viewport = rows[2];
    app.viewport = viewport;
    draw_marquee(frame, viewport, app);

    StatusBarWidget::render(frame, rows[4], app);
}

fn draw_marquee(frame: &mut Frame, area: Rect, app: &App) {
    let offset = app.current_offset(Instant::now());
    let track = app.slider.track();
    let config = app.slider.config();

    frame.render_widget(
        MarqueeWidget::new(&track, &app.theme)
            .offset(offset)
            .direction(config.direction)
            .metrics(app.metrics),
        area,
    );

    let fades = app.slider.fades();
    frame.render_widget(
        EdgeFadeWidget::new(&fades, app.theme.bg0).metrics(app.metrics),
        area,
    );
}
