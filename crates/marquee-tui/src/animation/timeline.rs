//! Software keyframe animation sampled by the renderer

use std::time::{Duration, Instant};

use marquee_core::engine::KeyframeAnimation;

use super::timing::{lerp, loop_fraction};
use crate::metrics::CellMetrics;

/// A linear, endlessly repeating translate resolved to terminal columns.
///
/// Time is tracked as accumulated play time, so pausing freezes the offset
/// and playing continues from it.
#[derive(Debug, Clone)]
pub struct Timeline {
    from: f64,
    to: f64,
    duration: Duration,
    /// Play time accumulated before the current run
    banked: Duration,
    /// Start of the current run; `None` while paused
    running_since: Option<Instant>,
}

impl Timeline {
    /// Start playing `animation` at `now`
    pub fn start(animation: &KeyframeAnimation, metrics: &CellMetrics, now: Instant) -> Self {
        Self {
            from: metrics.columns(animation.from.translate_x),
            to: metrics.columns(animation.to.translate_x),
            duration: animation.timing.duration,
            banked: Duration::ZERO,
            running_since: Some(now),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.running_since.is_none()
    }

    /// Total play time at `now`
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.running_since {
            Some(since) => self.banked + now.saturating_duration_since(since),
            None => self.banked,
        }
    }

    pub fn pause_at(&mut self, now: Instant) {
        if let Some(since) = self.running_since.take() {
            self.banked += now.saturating_duration_since(since);
        }
    }

    pub fn play_at(&mut self, now: Instant) {
        if self.running_since.is_none() {
            self.running_since = Some(now);
        }
    }

    /// Translate offset in columns at `now`
    pub fn sample(&self, now: Instant) -> f64 {
        lerp(self.from, self.to, loop_fraction(self.elapsed(now), self.duration))
    }

    /// Distance covered by one iteration, in columns
    pub fn span(&self) -> f64 {
        self.to - self.from
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::{Direction, Length, LoopGeometry};

    fn looping(duration_secs: u64) -> KeyframeAnimation {
        let geometry = LoopGeometry::new(Length::ch(10.0), 3, Direction::Left);
        KeyframeAnimation::looping(&geometry, Duration::from_secs(duration_secs))
    }

    #[test]
    fn test_linear_progress() {
        let t0 = Instant::now();
        let timeline = Timeline::start(&looping(10), &CellMetrics::default(), t0);

        assert_eq!(timeline.sample(t0), 0.0);
        assert!((timeline.sample(t0 + Duration::from_secs(5)) + 15.0).abs() < 1e-9);
        assert_eq!(timeline.span(), -30.0);
    }

    #[test]
    fn test_snaps_back_each_cycle() {
        let t0 = Instant::now();
        let timeline = Timeline::start(&looping(10), &CellMetrics::default(), t0);

        assert!(timeline.sample(t0 + Duration::from_secs(10)).abs() < 1e-9);
        assert!((timeline.sample(t0 + Duration::from_secs(12)) + 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_pause_preserves_offset() {
        let t0 = Instant::now();
        let mut timeline = Timeline::start(&looping(10), &CellMetrics::default(), t0);

        timeline.pause_at(t0 + Duration::from_secs(2));
        let frozen = timeline.sample(t0 + Duration::from_secs(2));
        assert!(timeline.is_paused());
        assert_eq!(timeline.sample(t0 + Duration::from_secs(9)), frozen);

        // A second pause must not move the offset
        timeline.pause_at(t0 + Duration::from_secs(9));
        assert_eq!(timeline.sample(t0 + Duration::from_secs(9)), frozen);

        timeline.play_at(t0 + Duration::from_secs(9));
        let resumed = timeline.sample(t0 + Duration::from_secs(10));
        assert!((resumed + 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_play_while_playing_is_noop() {
        let t0 = Instant::now();
        let mut timeline = Timeline::start(&looping(10), &CellMetrics::default(), t0);
        timeline.play_at(t0 + Duration::from_secs(4));
        assert_eq!(timeline.elapsed(t0 + Duration::from_secs(5)), Duration::from_secs(5));
    }
}
