//! Terminal implementation of the platform animation facility
//!
//! The compositor keeps every live timeline, keyed by the track it drives.
//! Animators start timelines for one track; the renderer samples the track
//! offset every frame. Only `cancel` removes a timeline.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Instant;

use marquee_core::engine::{AnimationFacility, AnimationHandle, KeyframeAnimation};
use marquee_core::Error;
use tracing::trace;

use super::timeline::Timeline;
use crate::metrics::CellMetrics;

/// Identifies one scrolling track on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub u32);

#[derive(Debug)]
struct Entry {
    track: TrackId,
    timeline: Timeline,
}

#[derive(Debug)]
struct Registry {
    enabled: bool,
    next_id: u64,
    entries: BTreeMap<u64, Entry>,
}

/// Shared registry of running timelines
#[derive(Debug, Clone)]
pub struct Compositor {
    registry: Rc<RefCell<Registry>>,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compositor {
    pub fn new() -> Self {
        Self::with_animations(true)
    }

    /// A compositor that refuses to animate (static rendering)
    pub fn disabled() -> Self {
        Self::with_animations(false)
    }

    fn with_animations(enabled: bool) -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                enabled,
                next_id: 0,
                entries: BTreeMap::new(),
            })),
        }
    }

    /// Facility that starts timelines on `track`
    pub fn animator(&self, track: TrackId, metrics: CellMetrics) -> TerminalAnimator {
        TerminalAnimator {
            track,
            metrics,
            registry: Rc::clone(&self.registry),
        }
    }

    /// Offset of `track` in columns at `now`, from its most recent timeline
    pub fn sample(&self, track: TrackId, now: Instant) -> Option<f64> {
        self.registry
            .borrow()
            .entries
            .values()
            .rev()
            .find(|entry| entry.track == track)
            .map(|entry| entry.timeline.sample(now))
    }

    /// Number of timelines currently driving `track`
    pub fn live_count(&self, track: TrackId) -> usize {
        self.registry
            .borrow()
            .entries
            .values()
            .filter(|entry| entry.track == track)
            .count()
    }

    /// Whether any timeline is playing (frames need redrawing)
    pub fn is_animating(&self) -> bool {
        self.registry
            .borrow()
            .entries
            .values()
            .any(|entry| !entry.timeline.is_paused())
    }
}

/// [`AnimationFacility`] bound to one track of a [`Compositor`]
#[derive(Debug, Clone)]
pub struct TerminalAnimator {
    track: TrackId,
    metrics: CellMetrics,
    registry: Rc<RefCell<Registry>>,
}

impl TerminalAnimator {
    pub fn track(&self) -> TrackId {
        self.track
    }

    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }
}

impl AnimationFacility for TerminalAnimator {
    type Handle = TimelineHandle;

    fn animate(&mut self, animation: &KeyframeAnimation) -> marquee_core::Result<TimelineHandle> {
        let mut registry = self.registry.borrow_mut();
        if !registry.enabled {
            return Err(Error::AnimationUnavailable(
                "animations are disabled for this terminal".to_string(),
            ));
        }

        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.insert(
            id,
            Entry {
                track: self.track,
                timeline: Timeline::start(animation, &self.metrics, Instant::now()),
            },
        );
        trace!(id, track = self.track.0, "Timeline registered");

        Ok(TimelineHandle {
            id,
            registry: Rc::clone(&self.registry),
        })
    }
}

/// Playback handle of one registered timeline
#[derive(Debug)]
pub struct TimelineHandle {
    id: u64,
    registry: Rc<RefCell<Registry>>,
}

impl TimelineHandle {
    fn with_timeline(&self, f: impl FnOnce(&mut Timeline)) {
        if let Some(entry) = self.registry.borrow_mut().entries.get_mut(&self.id) {
            f(&mut entry.timeline);
        }
    }
}

impl AnimationHandle for TimelineHandle {
    fn pause(&mut self) {
        self.with_timeline(|timeline| timeline.pause_at(Instant::now()));
    }

    fn play(&mut self) {
        self.with_timeline(|timeline| timeline.play_at(Instant::now()));
    }

    fn cancel(&mut self) {
        self.registry.borrow_mut().entries.remove(&self.id);
        trace!(id = self.id, "Timeline cancelled");
    }

    fn is_paused(&self) -> bool {
        // A cancelled timeline no longer plays
        self.registry
            .borrow()
            .entries
            .get(&self.id)
            .map_or(true, |entry| entry.timeline.is_paused())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use marquee_core::{Direction, EngineState, Length, LoopEngine, LoopGeometry, SliderConfig};

    fn animation() -> KeyframeAnimation {
        let geometry = LoopGeometry::new(Length::ch(4.0), 2, Direction::Left);
        KeyframeAnimation::looping(&geometry, Duration::from_secs(8))
    }

    #[test]
    fn test_handle_lifecycle() {
        let compositor = Compositor::new();
        let mut animator = compositor.animator(TrackId(0), CellMetrics::default());

        let mut handle = animator.animate(&animation()).unwrap();
        assert_eq!(compositor.live_count(TrackId(0)), 1);
        assert!(compositor.is_animating());

        handle.pause();
        assert!(handle.is_paused());
        assert!(!compositor.is_animating());

        handle.play();
        assert!(!handle.is_paused());

        handle.cancel();
        assert_eq!(compositor.live_count(TrackId(0)), 0);
        assert!(compositor.sample(TrackId(0), Instant::now()).is_none());
    }

    #[test]
    fn test_tracks_are_independent() {
        let compositor = Compositor::new();
        let mut top = compositor.animator(TrackId(0), CellMetrics::default());
        let mut bottom = compositor.animator(TrackId(1), CellMetrics::default());

        let _a = top.animate(&animation()).unwrap();
        let mut b = bottom.animate(&animation()).unwrap();
        b.cancel();

        assert_eq!(compositor.live_count(TrackId(0)), 1);
        assert_eq!(compositor.live_count(TrackId(1)), 0);
    }

    #[test]
    fn test_disabled_compositor_refuses() {
        let compositor = Compositor::disabled();
        let mut animator = compositor.animator(TrackId(0), CellMetrics::default());
        assert!(matches!(
            animator.animate(&animation()),
            Err(Error::AnimationUnavailable(_))
        ));
    }

    #[test]
    fn test_engine_never_leaks_timelines() {
        let compositor = Compositor::new();
        let animator = compositor.animator(TrackId(3), CellMetrics::default());
        let mut engine = LoopEngine::mounted(animator);

        for duration_secs in [10.0, 20.0, 30.0] {
            let config = SliderConfig {
                duration_secs,
                ..Default::default()
            };
            engine.reconcile(&config, 4);
        }
        assert_eq!(compositor.live_count(TrackId(3)), 1);
        assert_eq!(engine.state(), EngineState::Running);

        drop(engine);
        assert_eq!(compositor.live_count(TrackId(3)), 0);
    }
}
