pub mod config;
pub mod engine;
pub mod error;
pub mod fade;
pub mod geometry;
pub mod interaction;
pub mod length;
pub mod plan;
pub mod replicator;
pub mod slide;
pub mod slider;

pub use config::{AppConfig, Direction, SliderConfig};
pub use engine::{AnimationFacility, AnimationHandle, EngineState, LoopEngine};
pub use error::{Error, Result};
pub use geometry::{LoopGeometry, REPLICATION_FACTOR};
pub use interaction::{InteractionGate, PointerEvent};
pub use length::{Length, LengthUnit};
pub use slide::SlideItem;
pub use slider::Slider;
