//! Pure slider geometry.
//!
//! Every conversion between pointer pixels, normalized percent and tick
//! positions lives here. Nothing in this module holds state: tick sets and the
//! snap flag are passed in explicitly, so the functions can be exercised
//! without a rendering surface or an event loop.
//!
//! # Units
//!
//! - *px*: track-local pixels, `0..=track_width_px`.
//! - *percent*: normalized slider value, `0.0..=1.0`.
//! - *track units*: the rendered track axis, `0..=TRACK_EXTENT`. Tick
//!   positions and [`RenderGeometry`] are expressed in track units.
//!
//! # Example
//!
//! ```
//! use rapid_slider::geometry::{build_tick_set, nearest_tick_percent, TRACK_EXTENT};
//!
//! let ticks = build_tick_set(5, TRACK_EXTENT);
//! assert_eq!(nearest_tick_percent(0.61, &ticks, true), 0.5);
//! assert_eq!(nearest_tick_percent(0.61, &ticks, false), 0.61);
//! ```

use std::ops::Deref;

/// Length of the rendered track axis in track units.
pub const TRACK_EXTENT: f32 = 100.0;

/// Clamps a raw value into the slider's value domain.
///
/// Returns `0.0` for anything at or below zero (including NaN), `1.0` for
/// anything above one, and the value itself otherwise.
pub fn clamp_to_unit(x: f32) -> f32 {
    if x > 1.0 {
        1.0
    } else if x > 0.0 {
        x
    } else {
        0.0
    }
}

/// Returns the width used for pixel/percent conversions.
///
/// A surface that is not laid out yet reports zero; it is treated as one pixel
/// wide so conversions stay finite.
pub fn effective_track_width(track_width_px: f32) -> f32 {
    if track_width_px.is_finite() && track_width_px > 0.0 {
        track_width_px
    } else {
        1.0
    }
}

/// Converts a normalized percent into a track-local pixel position.
pub fn position_from_percent(percent: f32, track_width_px: f32) -> f32 {
    percent * effective_track_width(track_width_px)
}

/// Converts a track-local pixel position into a normalized percent.
pub fn percent_from_position(position_px: f32, track_width_px: f32) -> f32 {
    position_px / effective_track_width(track_width_px)
}

/// One candidate snap position on the track.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick {
    /// Position in track units.
    pub position: f32,
    /// Rounded position, used as the tick's label.
    pub label: i32,
}

/// Ordered, evenly spaced ticks along the track.
///
/// Always rebuilt as a whole by [`build_tick_set`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TickSet {
    ticks: Vec<Tick>,
}

impl TickSet {
    /// An empty tick set, i.e. a continuous slider.
    pub const fn empty() -> Self {
        Self { ticks: Vec::new() }
    }

    /// Tick positions in track units, in order.
    pub fn positions(&self) -> impl Iterator<Item = f32> + '_ {
        self.ticks.iter().map(|tick| tick.position)
    }
}

impl Deref for TickSet {
    type Target = [Tick];

    fn deref(&self) -> &Self::Target {
        &self.ticks
    }
}

/// Builds `length` evenly spaced ticks spanning `[0, extent]` inclusive.
///
/// Fewer than two ticks cannot span the track, so `length < 2` yields an empty
/// set and the slider stays continuous.
pub fn build_tick_set(length: u32, extent: f32) -> TickSet {
    if length < 2 {
        return TickSet::empty();
    }

    let step = extent / (length - 1) as f32;
    let ticks = (0..length)
        .map(|index| {
            let position = step * index as f32;
            Tick {
                position,
                label: position.round() as i32,
            }
        })
        .collect();

    TickSet { ticks }
}

/// Quantizes `percent` to the nearest tick when snapping applies.
///
/// Snapping applies when `snap` is set and there are at least two ticks.
/// Distance ties resolve to the tick that comes first in the set. Without
/// snapping the input is returned unchanged.
pub fn nearest_tick_percent(percent: f32, ticks: &[Tick], snap: bool) -> f32 {
    snapped_tick(percent, ticks, snap).map_or(percent, |tick| tick.position / TRACK_EXTENT)
}

fn snapped_tick(percent: f32, ticks: &[Tick], snap: bool) -> Option<&Tick> {
    if !snap || ticks.len() < 2 {
        return None;
    }

    let target = percent * TRACK_EXTENT;
    ticks.iter().reduce(|closest, candidate| {
        if (candidate.position - target).abs() < (closest.position - target).abs() {
            candidate
        } else {
            closest
        }
    })
}

/// Numbers the renderer needs to draw the handle and the filled track.
///
/// Both coordinates are in track units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderGeometry {
    /// Center of the handle.
    pub handle_center: f32,
    /// End of the filled (range) part of the track.
    pub range_end: f32,
}

impl RenderGeometry {
    /// Resolves the geometry for a normalized percent.
    ///
    /// A snapped handle sits exactly on its tick.
    pub fn resolve(percent: f32, ticks: &[Tick], snap: bool) -> Self {
        let x = snapped_tick(percent, ticks, snap)
            .map_or(percent * TRACK_EXTENT, |tick| tick.position);
        Self {
            handle_center: x,
            range_end: x,
        }
    }

    /// The normalized value the handle currently shows.
    pub fn percent(&self) -> f32 {
        self.handle_center / TRACK_EXTENT
    }
}
