//! SVG-style primitives for drawing a slider.
//!
//! The track is laid out in a `TRACK_EXTENT` × `TRACK_EXTENT` box: the track
//! runs horizontally through the middle, tick marks span the full height.

use crate::geometry::{RenderGeometry, TRACK_EXTENT, Tick};

/// Vertical center of the track, where the handle sits.
pub const TRACK_CENTER_Y: f32 = TRACK_EXTENT / 2.0;

/// A circle, positioned by its center.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SvgCircle {
    /// Center X.
    pub cx: f32,
    /// Center Y.
    pub cy: f32,
}

/// A straight line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SvgLine {
    /// Start X.
    pub x1: f32,
    /// Start Y.
    pub y1: f32,
    /// End X.
    pub x2: f32,
    /// End Y.
    pub y2: f32,
}

impl SvgLine {
    fn horizontal(x1: f32, x2: f32, y: f32) -> Self {
        Self { x1, y1: y, x2, y2: y }
    }

    fn vertical(x: f32, y1: f32, y2: f32) -> Self {
        Self { x1: x, y1, x2: x, y2 }
    }
}

/// A numeric label anchored at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SvgText {
    /// Anchor X.
    pub x: f32,
    /// Anchor Y.
    pub y: f32,
    /// Displayed number.
    pub value: i32,
}

/// Everything a renderer needs to draw one slider.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderScene {
    /// Full-length track.
    pub background_track: SvgLine,
    /// Filled part of the track, from the start to the handle.
    pub range_track: SvgLine,
    /// The handle.
    pub thumb: SvgCircle,
    /// One vertical mark per tick.
    pub ticks: Vec<SvgLine>,
    /// One label per tick, under its mark.
    pub labels: Vec<SvgText>,
}

impl SliderScene {
    pub(super) fn build(geometry: &RenderGeometry, ticks: &[Tick]) -> Self {
        Self {
            background_track: SvgLine::horizontal(0.0, TRACK_EXTENT, TRACK_CENTER_Y),
            range_track: SvgLine::horizontal(0.0, geometry.range_end, TRACK_CENTER_Y),
            thumb: SvgCircle {
                cx: geometry.handle_center,
                cy: TRACK_CENTER_Y,
            },
            ticks: ticks
                .iter()
                .map(|tick| SvgLine::vertical(tick.position, 0.0, TRACK_EXTENT))
                .collect(),
            labels: ticks
                .iter()
                .map(|tick| SvgText {
                    x: tick.position,
                    y: TRACK_EXTENT,
                    value: tick.label,
                })
                .collect(),
        }
    }
}
