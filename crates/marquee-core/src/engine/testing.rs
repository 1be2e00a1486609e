//! In-memory animation facility for unit tests

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::facility::{AnimationFacility, AnimationHandle};
use super::keyframes::KeyframeAnimation;

#[derive(Debug, Default)]
struct Log {
    created: usize,
    pause_calls: usize,
    play_calls: usize,
    /// (id, duration) of animations not cancelled yet
    live: Vec<(usize, Duration)>,
}

/// Facility that records every call; clones share the same log
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingFacility {
    log: Rc<RefCell<Log>>,
    unavailable: bool,
}

impl RecordingFacility {
    pub(crate) fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    pub(crate) fn created(&self) -> usize {
        self.log.borrow().created
    }

    pub(crate) fn live_count(&self) -> usize {
        self.log.borrow().live.len()
    }

    pub(crate) fn live_durations(&self) -> Vec<Duration> {
        self.log.borrow().live.iter().map(|(_, d)| *d).collect()
    }

    pub(crate) fn pause_calls(&self) -> usize {
        self.log.borrow().pause_calls
    }

    pub(crate) fn play_calls(&self) -> usize {
        self.log.borrow().play_calls
    }
}

impl AnimationFacility for RecordingFacility {
    type Handle = RecordingHandle;

    fn animate(&mut self, animation: &KeyframeAnimation) -> crate::Result<RecordingHandle> {
        if self.unavailable {
            return Err(crate::Error::AnimationUnavailable(
                "test facility disabled".to_string(),
            ));
        }

        let mut log = self.log.borrow_mut();
        let id = log.created;
        log.created += 1;
        log.live.push((id, animation.duration()));

        Ok(RecordingHandle {
            id,
            paused: false,
            log: Rc::clone(&self.log),
        })
    }
}

#[derive(Debug)]
pub(crate) struct RecordingHandle {
    id: usize,
    paused: bool,
    log: Rc<RefCell<Log>>,
}

impl AnimationHandle for RecordingHandle {
    fn pause(&mut self) {
        self.paused = true;
        self.log.borrow_mut().pause_calls += 1;
    }

    fn play(&mut self) {
        self.paused = false;
        self.log.borrow_mut().play_calls += 1;
    }

    fn cancel(&mut self) {
        let id = self.id;
        self.log.borrow_mut().live.retain(|(live_id, _)| *live_id != id);
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}
