//! The host-facing slider component
//!
//! Glues the replicator, the loop engine and the interaction gate together
//! and decides when a prop change needs a fresh animation.

use tracing::{debug, warn};

use crate::config::SliderConfig;
use crate::engine::{AnimationFacility, EngineState, LoopEngine};
use crate::fade::{edge_fades, FadeOverlay};
use crate::geometry::LoopGeometry;
use crate::interaction::{GateAction, InteractionGate, PointerEvent};
use crate::replicator::{replicate, ReplicatedTrack};
use crate::slide::SlideItem;

pub struct Slider<C, F: AnimationFacility> {
    config: SliderConfig,
    slides: Vec<SlideItem<C>>,
    engine: LoopEngine<F>,
    gate: InteractionGate,
}

impl<C: PartialEq, F: AnimationFacility> Slider<C, F> {
    /// Create an unmounted slider; the loop starts on [`Slider::mount`]
    pub fn new(config: SliderConfig, slides: Vec<SlideItem<C>>, facility: F) -> crate::Result<Self> {
        config.validate()?;

        let mut engine = LoopEngine::new(facility);
        engine.reconcile(&config, slides.len());

        Ok(Self {
            gate: InteractionGate::new(config.pause_on_hover),
            config,
            slides,
            engine,
        })
    }

    /// Supply fresh props.
    ///
    /// The loop restarts only when width, duration, direction or the slides
    /// (by value) changed. Invalid props are rejected and the old ones kept.
    pub fn set_props(&mut self, config: SliderConfig, slides: Vec<SlideItem<C>>) -> crate::Result<()> {
        if let Err(e) = config.validate() {
            warn!("Rejected slider props: {}", e);
            return Err(e);
        }

        let restart = self.config.geometry_differs(&config) || self.slides != slides;

        self.gate.set_pause_on_hover(config.pause_on_hover);
        self.config = config;
        self.slides = slides;

        if restart {
            debug!(slides = self.slides.len(), "Geometry changed, restarting loop");
            self.engine.reconcile(&self.config, self.slides.len());
        }

        Ok(())
    }

    /// Replace only the configuration, keeping the slides
    pub fn set_config(&mut self, config: SliderConfig) -> crate::Result<()>
    where
        C: Clone,
    {
        let slides = self.slides.clone();
        self.set_props(config, slides)
    }
}

impl<C, F: AnimationFacility> Slider<C, F> {
    pub fn mount(&mut self) {
        self.engine.mount();
    }

    pub fn unmount(&mut self) {
        self.engine.unmount();
    }

    /// Route a pointer/touch event through the interaction gate
    pub fn handle_event(&mut self, event: PointerEvent) -> Option<GateAction> {
        self.gate.handle(event, &mut self.engine)
    }

    pub fn pause(&mut self) {
        self.engine.pause();
    }

    pub fn resume(&mut self) {
        self.engine.resume();
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn slides(&self) -> &[SlideItem<C>] {
        &self.slides
    }

    pub fn geometry(&self) -> LoopGeometry {
        LoopGeometry::from_config(&self.config, self.slides.len())
    }

    /// The triplicated render sequence
    pub fn track(&self) -> ReplicatedTrack<'_, C> {
        replicate(&self.slides, self.config.width)
    }

    pub fn fades(&self) -> Vec<FadeOverlay> {
        edge_fades(&self.config)
    }

    pub fn state(&self) -> EngineState {
        self.engine.state()
    }

    pub fn engine(&self) -> &LoopEngine<F> {
        &self.engine
    }
}

impl<C: std::fmt::Debug, F: AnimationFacility> std::fmt::Debug for Slider<C, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slider")
            .field("config", &self.config)
            .field("slides", &self.slides)
            .field("engine", &self.engine)
            .finish()
    }
}
