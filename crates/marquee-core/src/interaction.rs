//! Pointer and touch gating of pause/resume
//!
//! Hover is gated by `pause_on_hover`; touch always pauses and resumes.

use tracing::trace;

/// Pointer/touch events delivered by the host, in occurrence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    PointerEnter,
    PointerLeave,
    TouchStart,
    TouchEnd,
}

/// The call the gate issued for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
    Pause,
    Resume,
}

/// Anything that can be paused and resumed idempotently
pub trait PlaybackControl {
    fn pause(&mut self);
    fn resume(&mut self);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionGate {
    pause_on_hover: bool,
}

impl InteractionGate {
    pub fn new(pause_on_hover: bool) -> Self {
        Self { pause_on_hover }
    }

    pub fn pause_on_hover(&self) -> bool {
        self.pause_on_hover
    }

    pub fn set_pause_on_hover(&mut self, pause_on_hover: bool) {
        self.pause_on_hover = pause_on_hover;
    }

    /// Action an event maps to under the current flag
    pub fn action_for(&self, event: PointerEvent) -> Option<GateAction> {
        match event {
            PointerEvent::PointerEnter if self.pause_on_hover => Some(GateAction::Pause),
            PointerEvent::PointerLeave if self.pause_on_hover => Some(GateAction::Resume),
            PointerEvent::PointerEnter | PointerEvent::PointerLeave => None,
            PointerEvent::TouchStart => Some(GateAction::Pause),
            PointerEvent::TouchEnd => Some(GateAction::Resume),
        }
    }

    /// Forward `event` to `target`; at most one call per event
    pub fn handle<P: PlaybackControl + ?Sized>(
        &self,
        event: PointerEvent,
        target: &mut P,
    ) -> Option<GateAction> {
        let action = self.action_for(event);
        match action {
            Some(GateAction::Pause) => target.pause(),
            Some(GateAction::Resume) => target.resume(),
            None => {}
        }
        trace!(?event, ?action, "Pointer event gated");
        action
    }
}
