//! Keyframe animation descriptions handed to the platform

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::geometry::LoopGeometry;
use crate::length::Length;

/// A single horizontal translate keyframe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Position within one iteration, 0.0..=1.0
    pub offset: f64,
    pub translate_x: Length,
}

impl Keyframe {
    /// The keyframe as a CSS transform
    pub fn transform(&self) -> String {
        format!("translateX({})", self.translate_x)
    }
}

/// Timing of a loop: linear easing, repeated forever
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationTiming {
    pub duration: Duration,
}

impl AnimationTiming {
    /// CSS name of the easing
    pub const EASING: &'static str = "linear";
    /// CSS iteration count
    pub const ITERATIONS: &'static str = "infinite";
}

/// Two-keyframe translate animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyframeAnimation {
    pub from: Keyframe,
    pub to: Keyframe,
    pub timing: AnimationTiming,
}

impl KeyframeAnimation {
    /// The endless linear loop from offset 0 to the geometry's translate distance
    pub fn looping(geometry: &LoopGeometry, duration: Duration) -> Self {
        let distance = geometry.translate_distance();
        Self {
            from: Keyframe {
                offset: 0.0,
                translate_x: Length::new(0.0, distance.unit()),
            },
            to: Keyframe {
                offset: 1.0,
                translate_x: distance,
            },
            timing: AnimationTiming { duration },
        }
    }

    pub fn keyframes(&self) -> [Keyframe; 2] {
        [self.from, self.to]
    }

    pub fn duration(&self) -> Duration {
        self.timing.duration
    }
}
