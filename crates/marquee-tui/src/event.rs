use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    frame_interval: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate_ms.max(1));
        Self {
            tick_rate,
            frame_interval: tick_rate,
        }
    }

    /// Poll faster while an animation is playing
    pub fn with_animation_fps(mut self, fps: u32) -> Self {
        if fps > 0 {
            self.frame_interval = Duration::from_secs_f64(1.0 / fps as f64).min(self.tick_rate);
        }
        self
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll with the animation frame interval as timeout
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.frame_interval)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    // (crossterm 0.27+ sends release events on some systems)
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => Ok(Some(AppEvent::Mouse(mouse))),
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                Event::FocusLost => Ok(Some(AppEvent::FocusLost)),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse moved or a button changed state
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// The terminal window lost focus; the pointer is gone
    FocusLost,
    /// Tick event for periodic updates
    Tick,
}
