//! Content replication for the seamless loop
//!
//! Lays the authored slides out [`REPLICATION_FACTOR`] times in order, each
//! entry carrying the slider's width. Entries borrow the authored content.

use crate::geometry::REPLICATION_FACTOR;
use crate::length::Length;
use crate::slide::SlideItem;

/// Stable key of a track entry: which copy, and the authored position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideKey {
    pub copy: usize,
    pub index: usize,
}

/// One entry of the replicated track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackEntry<'a, C> {
    pub key: SlideKey,
    pub content: &'a C,
    /// Effective width (the slider width, never the declared one)
    pub width: Length,
}

/// The flat render sequence plus the track's layout width
#[derive(Debug, Clone, PartialEq)]
pub struct ReplicatedTrack<'a, C> {
    entries: Vec<TrackEntry<'a, C>>,
    slide_width: Length,
    container_width: Length,
}

impl<'a, C> ReplicatedTrack<'a, C> {
    pub fn entries(&self) -> &[TrackEntry<'a, C>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn slide_width(&self) -> Length {
        self.slide_width
    }

    pub fn container_width(&self) -> Length {
        self.container_width
    }

    /// Number of authored slides behind the track
    pub fn source_len(&self) -> usize {
        self.entries.len() / REPLICATION_FACTOR
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackEntry<'a, C>> {
        self.entries.iter()
    }
}

/// Triplicate `slides`, applying `width` to every entry
pub fn replicate<C>(slides: &[SlideItem<C>], width: Length) -> ReplicatedTrack<'_, C> {
    let entries = (0..REPLICATION_FACTOR)
        .flat_map(|copy| {
            slides.iter().enumerate().map(move |(index, slide)| TrackEntry {
                key: SlideKey { copy, index },
                content: slide.content(),
                width: slide.effective_width(width),
            })
        })
        .collect();

    ReplicatedTrack {
        entries,
        slide_width: width,
        container_width: width.scale((slides.len() * REPLICATION_FACTOR) as f64),
    }
}
