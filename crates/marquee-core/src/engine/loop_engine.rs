//! Lifecycle owner of the single looping animation of one slider

use tracing::{debug, warn};

use super::facility::{AnimationFacility, AnimationHandle};
use super::keyframes::KeyframeAnimation;
use crate::config::SliderConfig;
use crate::geometry::LoopGeometry;
use crate::interaction::PlaybackControl;

/// Observable engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No live animation (before the first reconcile, after teardown, or idle)
    Uninitialized,
    Running,
    Paused,
}

/// A started animation together with the parameters it was created from
struct LiveAnimation<H> {
    handle: H,
    animation: KeyframeAnimation,
}

/// Owns at most one running loop animation.
///
/// Any geometry change goes through [`LoopEngine::reconcile`], which cancels
/// the previous animation before starting its replacement. Play/pause state
/// lives in the handle only.
pub struct LoopEngine<F: AnimationFacility> {
    facility: F,
    live: Option<LiveAnimation<F::Handle>>,
    /// Last requested animation, replayed when the track mounts
    requested: Option<KeyframeAnimation>,
    mounted: bool,
}

impl<F: AnimationFacility> LoopEngine<F> {
    /// Create an engine whose track is not mounted yet
    pub fn new(facility: F) -> Self {
        Self {
            facility,
            live: None,
            requested: None,
            mounted: false,
        }
    }

    /// Create an engine whose track is already available
    pub fn mounted(facility: F) -> Self {
        let mut engine = Self::new(facility);
        engine.mounted = true;
        engine
    }

    pub fn state(&self) -> EngineState {
        match &self.live {
            None => EngineState::Uninitialized,
            Some(live) if live.handle.is_paused() => EngineState::Paused,
            Some(_) => EngineState::Running,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Parameters of the live animation, if any
    pub fn active_animation(&self) -> Option<&KeyframeAnimation> {
        self.live.as_ref().map(|live| &live.animation)
    }

    pub fn facility(&self) -> &F {
        &self.facility
    }

    /// Restart the loop for `config` and `slide_count` slides.
    ///
    /// Always a full restart: the previous animation is cancelled first. With
    /// zero slides the engine goes idle. Before the track is mounted the
    /// request is only recorded.
    pub fn reconcile(&mut self, config: &SliderConfig, slide_count: usize) {
        if slide_count == 0 {
            self.requested = None;
            if self.live.is_some() {
                debug!("No slides left, stopping loop animation");
            }
            self.release();
            return;
        }

        let duration = match config.duration() {
            Ok(duration) => duration,
            Err(e) => {
                // Never leave an animation from older props running
                warn!("Stopping loop animation: {}", e);
                self.requested = None;
                self.release();
                return;
            }
        };
        let geometry = LoopGeometry::from_config(config, slide_count);
        let animation = KeyframeAnimation::looping(&geometry, duration);
        self.requested = Some(animation);

        if !self.mounted {
            debug!("Track not mounted yet, deferring loop animation");
            return;
        }

        self.start(animation);
    }

    /// The track element became available; start any deferred loop
    pub fn mount(&mut self) {
        self.mounted = true;
        if self.live.is_none() {
            if let Some(animation) = self.requested {
                self.start(animation);
            }
        }
    }

    /// The track element went away; release the animation
    pub fn unmount(&mut self) {
        self.release();
        self.mounted = false;
    }

    /// Cancel and drop the live animation, back to `Uninitialized`
    pub fn teardown(&mut self) {
        self.release();
    }

    /// Freeze in place; no-op without an animation or when already paused
    pub fn pause(&mut self) {
        if let Some(live) = self.live.as_mut() {
            if !live.handle.is_paused() {
                live.handle.pause();
                debug!("Loop animation paused");
            }
        }
    }

    /// Continue from the paused offset; no-op without an animation or when playing
    pub fn resume(&mut self) {
        if let Some(live) = self.live.as_mut() {
            if live.handle.is_paused() {
                live.handle.play();
                debug!("Loop animation resumed");
            }
        }
    }

    fn start(&mut self, animation: KeyframeAnimation) {
        self.release();

        match self.facility.animate(&animation) {
            Ok(handle) => {
                debug!(
                    to = %animation.to.translate_x,
                    duration_ms = animation.duration().as_millis() as u64,
                    "Loop animation started"
                );
                self.live = Some(LiveAnimation { handle, animation });
            }
            Err(e) => {
                warn!("Rendering static strip: {}", e);
            }
        }
    }

    fn release(&mut self) {
        if let Some(mut live) = self.live.take() {
            live.handle.cancel();
        }
    }
}

impl<F: AnimationFacility> PlaybackControl for LoopEngine<F> {
    fn pause(&mut self) {
        LoopEngine::pause(self);
    }

    fn resume(&mut self) {
        LoopEngine::resume(self);
    }
}

impl<F: AnimationFacility> Drop for LoopEngine<F> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<F: AnimationFacility> std::fmt::Debug for LoopEngine<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoopEngine")
            .field("state", &self.state())
            .field("mounted", &self.mounted)
            .field("active", &self.active_animation())
            .finish()
    }
}
