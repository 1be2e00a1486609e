use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use marquee_core::config::UiConfig;
use marquee_core::{AppConfig, EngineState, PointerEvent, Slider, SliderConfig};
use ratatui::layout::{Position, Rect};
use tracing::{debug, info};

use crate::animation::{Compositor, TerminalAnimator, TrackId};
use crate::input::Action;
use crate::metrics::CellMetrics;
use crate::theme::Theme;
use crate::themes::load_theme;

/// Track driven by the main marquee
pub const MARQUEE_TRACK: TrackId = TrackId(0);

/// Factor applied per speed/width key press
const STEP: f64 = 1.25;
/// Shortest loop the speed keys will reach
const MIN_DURATION_SECS: f64 = 0.5;
/// Longest loop the speed keys will reach (one day)
const MAX_DURATION_SECS: f64 = 86_400.0;

/// Application state
pub struct App {
    pub ui: UiConfig,
    pub theme: Theme,
    pub metrics: CellMetrics,
    compositor: Compositor,
    pub slider: Slider<String, TerminalAnimator>,
    /// Screen area of the marquee, used for hover hit-testing
    pub viewport: Rect,
    hovered: bool,
    touching: bool,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, compositor: Compositor) -> anyhow::Result<Self> {
        let metrics = CellMetrics::from_config(&config.ui);
        let theme = load_theme(&config.ui.theme);
        let slides = config.slide_items();
        let animator = compositor.animator(MARQUEE_TRACK, metrics);
        let slider = Slider::new(config.slider, slides, animator)?;

        Ok(Self {
            ui: config.ui,
            theme,
            metrics,
            compositor,
            slider,
            viewport: Rect::default(),
            hovered: false,
            touching: false,
            status_message: None,
            should_quit: false,
        })
    }

    /// The marquee is on screen; start the loop
    pub fn mount(&mut self) {
        self.slider.mount();
        info!(
            slides = self.slider.slides().len(),
            state = ?self.slider.state(),
            "Marquee mounted"
        );
    }

    pub fn unmount(&mut self) {
        self.slider.unmount();
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_touching(&self) -> bool {
        self.touching
    }

    /// Translate mouse input into pointer and touch events for the slider
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let inside = self
            .viewport
            .contains(Position::new(mouse.column, mouse.row));

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.set_hovered(inside),
            MouseEventKind::Down(MouseButton::Left) if inside => {
                self.set_hovered(true);
                if !self.touching {
                    self.touching = true;
                    self.slider.handle_event(PointerEvent::TouchStart);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.touching {
                    self.touching = false;
                    self.slider.handle_event(PointerEvent::TouchEnd);
                }
                self.set_hovered(inside);
            }
            _ => {}
        }
    }

    /// The pointer left together with the terminal focus
    pub fn focus_lost(&mut self) {
        if self.touching {
            self.touching = false;
            self.slider.handle_event(PointerEvent::TouchEnd);
        }
        self.set_hovered(false);
    }

    fn set_hovered(&mut self, hovered: bool) {
        if self.hovered == hovered {
            return;
        }
        self.hovered = hovered;
        let event = if hovered {
            PointerEvent::PointerEnter
        } else {
            PointerEvent::PointerLeave
        };
        self.slider.handle_event(event);
    }

    pub fn apply(&mut self, action: Action) {
        let mut config = self.slider.config().clone();
        match action {
            Action::Quit => {
                self.should_quit = true;
                return;
            }
            Action::None => return,
            Action::TogglePlayback => {
                match self.slider.state() {
                    EngineState::Running => self.slider.pause(),
                    EngineState::Paused => self.slider.resume(),
                    EngineState::Uninitialized => {}
                }
                self.status_message = None;
                return;
            }
            Action::ReverseDirection => config.direction = config.direction.reversed(),
            Action::Faster => {
                config.duration_secs = (config.duration_secs / STEP).max(MIN_DURATION_SECS)
            }
            Action::Slower => {
                config.duration_secs = (config.duration_secs * STEP).min(MAX_DURATION_SECS)
            }
            Action::Wider => config.width = config.width.scale(STEP),
            Action::Narrower => {
                let narrower = config.width.scale(1.0 / STEP);
                if self.metrics.columns(narrower) >= 1.0 {
                    config.width = narrower;
                }
            }
            Action::TogglePauseOnHover => config.pause_on_hover = !config.pause_on_hover,
            Action::ToggleBlur => config.blur_borders = !config.blur_borders,
        }
        self.reconfigure(config);
    }

    fn reconfigure(&mut self, config: SliderConfig) {
        debug!(?config, "Reconfiguring slider");
        match self.slider.set_config(config) {
            Ok(()) => self.status_message = None,
            Err(e) => self.status_message = Some(format!(" {}", e)),
        }
    }

    /// Sampled track offset in columns; zero while static
    pub fn current_offset(&self, now: Instant) -> f64 {
        self.compositor.sample(MARQUEE_TRACK, now).unwrap_or(0.0)
    }

    /// Whether the next frame differs from the last one
    pub fn needs_animation_frame(&self) -> bool {
        self.compositor.is_animating()
    }

    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use marquee_core::{Direction, Length};

    use super::*;

    fn app(pause_on_hover: bool) -> App {
        let mut config = AppConfig::default();
        config.slider.pause_on_hover = pause_on_hover;
        let mut app = App::new(config, Compositor::new()).unwrap();
        app.viewport = Rect::new(0, 2, 40, 3);
        app.mount();
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_mount_starts_loop() {
        let app = app(false);
        assert_eq!(app.slider.state(), EngineState::Running);
        assert!(app.needs_animation_frame());
        assert_eq!(app.compositor().live_count(MARQUEE_TRACK), 1);
    }

    #[test]
    fn test_hover_pauses_when_enabled() {
        let mut app = app(true);

        app.handle_mouse(mouse(MouseEventKind::Moved, 5, 3));
        assert!(app.is_hovered());
        assert_eq!(app.slider.state(), EngineState::Paused);

        app.handle_mouse(mouse(MouseEventKind::Moved, 5, 10));
        assert!(!app.is_hovered());
        assert_eq!(app.slider.state(), EngineState::Running);
    }

    #[test]
    fn test_hover_ignored_when_disabled() {
        let mut app = app(false);
        app.handle_mouse(mouse(MouseEventKind::Moved, 5, 3));
        assert_eq!(app.slider.state(), EngineState::Running);
    }

    #[test]
    fn test_press_pauses_even_without_hover_pause() {
        let mut app = app(false);

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 3));
        assert!(app.is_touching());
        assert_eq!(app.slider.state(), EngineState::Paused);

        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 5, 3));
        assert_eq!(app.slider.state(), EngineState::Running);
    }

    #[test]
    fn test_press_outside_viewport_ignored() {
        let mut app = app(false);
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 20));
        assert!(!app.is_touching());
        assert_eq!(app.slider.state(), EngineState::Running);
    }

    #[test]
    fn test_focus_lost_releases_pointer() {
        let mut app = app(true);
        app.handle_mouse(mouse(MouseEventKind::Moved, 5, 3));
        assert_eq!(app.slider.state(), EngineState::Paused);

        app.focus_lost();
        assert!(!app.is_hovered());
        assert_eq!(app.slider.state(), EngineState::Running);
    }

    #[test]
    fn test_reverse_restarts_single_timeline() {
        let mut app = app(false);
        app.apply(Action::ReverseDirection);
        assert_eq!(app.slider.config().direction, Direction::Right);
        assert_eq!(app.compositor().live_count(MARQUEE_TRACK), 1);
        assert_eq!(app.slider.state(), EngineState::Running);
    }

    #[test]
    fn test_speed_and_width_steps() {
        let mut app = app(false);
        let duration = app.slider.config().duration_secs;

        app.apply(Action::Faster);
        assert!(app.slider.config().duration_secs < duration);
        app.apply(Action::Slower);
        assert!((app.slider.config().duration_secs - duration).abs() < 1e-9);

        app.apply(Action::Wider);
        assert_eq!(app.slider.config().width, Length::px(250.0));
        assert_eq!(app.compositor().live_count(MARQUEE_TRACK), 1);
    }

    #[test]
    fn test_slower_stops_at_one_day() {
        let mut app = app(false);
        for _ in 0..200 {
            app.apply(Action::Slower);
        }
        assert_eq!(app.slider.config().duration_secs, MAX_DURATION_SECS);
        assert_eq!(app.slider.state(), EngineState::Running);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_narrower_stops_at_one_column() {
        let mut app = app(false);
        for _ in 0..100 {
            app.apply(Action::Narrower);
        }
        assert!(app.metrics.columns(app.slider.config().width) >= 1.0);
    }

    #[test]
    fn test_toggle_playback() {
        let mut app = app(false);
        app.apply(Action::TogglePlayback);
        assert_eq!(app.slider.state(), EngineState::Paused);
        assert!(!app.needs_animation_frame());
        app.apply(Action::TogglePlayback);
        assert_eq!(app.slider.state(), EngineState::Running);
    }

    #[test]
    fn test_toggle_blur_keeps_timeline() {
        let mut app = app(false);
        app.apply(Action::ToggleBlur);
        assert!(app.slider.config().blur_borders);
        assert_eq!(app.slider.fades().len(), 2);
        assert_eq!(app.compositor().live_count(MARQUEE_TRACK), 1);
    }

    #[test]
    fn test_static_compositor() {
        let mut app = App::new(AppConfig::default(), Compositor::disabled()).unwrap();
        app.mount();
        assert_eq!(app.slider.state(), EngineState::Uninitialized);
        assert_eq!(app.current_offset(Instant::now()), 0.0);
    }

    #[test]
    fn test_quit() {
        let mut app = app(false);
        app.apply(Action::Quit);
        assert!(app.should_quit);
    }
}
