//! Serializable snapshot of everything a host needs to render one slider

use serde::Serialize;

use crate::config::{Direction, SliderConfig};
use crate::engine::{AnimationTiming, KeyframeAnimation};
use crate::fade::{edge_fades, FadeOverlay};
use crate::geometry::{LoopGeometry, REPLICATION_FACTOR};
use crate::replicator::replicate;
use crate::slide::SlideItem;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanEntry {
    pub copy: usize,
    pub index: usize,
    pub width: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanAnimation {
    /// CSS transforms of the start and end keyframes
    pub keyframes: [String; 2],
    pub duration_ms: u64,
    pub easing: String,
    pub iterations: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    pub slide_count: usize,
    pub slide_width: String,
    pub direction: Direction,
    pub replication_factor: usize,
    pub container_width: String,
    pub translate_distance: String,
    pub pause_on_hover: bool,
    /// `None` when there is nothing to animate
    pub animation: Option<PlanAnimation>,
    pub sequence: Vec<PlanEntry>,
    pub overlays: Vec<FadeOverlay>,
}

impl RenderPlan {
    pub fn build<C: ToString>(config: &SliderConfig, slides: &[SlideItem<C>]) -> crate::Result<Self> {
        config.validate()?;

        let geometry = LoopGeometry::from_config(config, slides.len());
        let track = replicate(slides, config.width);

        let duration = config.duration()?;
        let animation = (!geometry.is_empty()).then(|| {
            let animation = KeyframeAnimation::looping(&geometry, duration);
            PlanAnimation {
                keyframes: [animation.from.transform(), animation.to.transform()],
                duration_ms: animation.duration().as_millis() as u64,
                easing: AnimationTiming::EASING.to_string(),
                iterations: AnimationTiming::ITERATIONS.to_string(),
            }
        });

        let sequence = track
            .iter()
            .map(|entry| PlanEntry {
                copy: entry.key.copy,
                index: entry.key.index,
                width: entry.width.to_string(),
                content: entry.content.to_string(),
            })
            .collect();

        Ok(Self {
            slide_count: geometry.slide_count(),
            slide_width: config.width.to_string(),
            direction: config.direction,
            replication_factor: REPLICATION_FACTOR,
            container_width: track.container_width().to_string(),
            translate_distance: geometry.translate_distance().to_string(),
            pause_on_hover: config.pause_on_hover,
            animation,
            sequence,
            overlays: edge_fades(config),
        })
    }
}
