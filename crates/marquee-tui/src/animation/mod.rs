//! Software animation facility for the terminal
//!
//! ## Pure helpers
//! - `timing` - cycle position and interpolation
//!
//! ## Stateful parts
//! - `timeline` - one keyframe animation with pause/play
//! - `compositor` - live timelines per track, and the `AnimationFacility`
//!   implementation handed to `LoopEngine`
//!
//! # Usage
//!
//! ```ignore
//! use marquee_tui::animation::{Compositor, TrackId};
//!
//! let compositor = Compositor::new();
//! let animator = compositor.animator(TrackId(0), metrics);
//! let mut slider = Slider::new(config, slides, animator)?;
//! slider.mount();
//!
//! // Each frame
//! let offset = compositor.sample(TrackId(0), Instant::now()).unwrap_or(0.0);
//! ```

pub mod timing;

pub mod compositor;
pub mod timeline;

pub use compositor::{Compositor, TerminalAnimator, TimelineHandle, TrackId};
pub use timeline::Timeline;
