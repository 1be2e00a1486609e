use crate::config::{Direction, SliderConfig};
use crate::length::Length;

/// How many times the authored sequence is laid out on the track.
///
/// After one full traversal of `width * N` a complete copy is still in place
/// on either side of the viewport, whatever the viewport width.
pub const REPLICATION_FACTOR: usize = 3;

/// Loop geometry derived from the slider configuration and slide count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopGeometry {
    slide_width: Length,
    slide_count: usize,
    direction: Direction,
}

impl LoopGeometry {
    pub fn new(slide_width: Length, slide_count: usize, direction: Direction) -> Self {
        Self {
            slide_width,
            slide_count,
            direction,
        }
    }

    pub fn from_config(config: &SliderConfig, slide_count: usize) -> Self {
        Self::new(config.width, slide_count, config.direction)
    }

    pub fn slide_width(&self) -> Length {
        self.slide_width
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_empty(&self) -> bool {
        self.slide_count == 0
    }

    /// Width of one authored copy of the sequence (`width * N`)
    pub fn period(&self) -> Length {
        self.slide_width.scale(self.slide_count as f64)
    }

    /// End offset of the loop keyframes: `-width*N` leftwards, `+width*N` rightwards
    pub fn translate_distance(&self) -> Length {
        match self.direction {
            Direction::Left => self.period().negate(),
            Direction::Right => self.period(),
        }
    }

    /// Layout width of the scrolling track (`width * N * 3`)
    pub fn container_width(&self) -> Length {
        self.period().scale(REPLICATION_FACTOR as f64)
    }

    /// Number of entries on the track
    pub fn rendered_len(&self) -> usize {
        self.slide_count * REPLICATION_FACTOR
    }
}
