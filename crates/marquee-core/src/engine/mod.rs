//! Looping animation engine
//!
//! - `keyframes` - animation descriptions (keyframes and loop timing)
//! - `facility` - traits the host implements to run animations
//! - `loop_engine` - the lifecycle owner of one slider's loop

pub mod facility;
pub mod keyframes;
pub mod loop_engine;

#[cfg(test)]
pub(crate) mod testing;

pub use facility::{AnimationFacility, AnimationHandle};
pub use keyframes::{AnimationTiming, Keyframe, KeyframeAnimation};
pub use loop_engine::{EngineState, LoopEngine};
