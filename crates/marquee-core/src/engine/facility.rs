//! Seams to the host's animation facility

use super::keyframes::KeyframeAnimation;

/// The platform's keyframe animation facility, bound to one track element
pub trait AnimationFacility {
    type Handle: AnimationHandle;

    /// Start `animation` on the track and hand back its playback handle.
    ///
    /// Returns [`crate::Error::AnimationUnavailable`] when the host cannot
    /// animate at all (the slider then renders statically).
    fn animate(&mut self, animation: &KeyframeAnimation) -> crate::Result<Self::Handle>;
}

/// Playback control over one running platform animation.
///
/// Dropping a handle does not stop the animation; owners must `cancel` it.
pub trait AnimationHandle {
    /// Freeze at the current offset
    fn pause(&mut self);

    /// Continue from the frozen offset
    fn play(&mut self);

    /// Stop and release the animation
    fn cancel(&mut self);

    fn is_paused(&self) -> bool;
}
