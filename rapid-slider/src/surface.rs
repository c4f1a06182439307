//! The rendering surface a slider is drawn on, seen from the core.
//!
//! The core never touches a renderer directly. It asks a [`TrackSurface`] two
//! things: how wide the track currently is, and how to map a document-space
//! pointer X into the track's local space. Everything else about drawing is
//! the host's business.

use std::sync::Arc;

use smallvec::SmallVec;

/// Marker every hit-testable slider element carries.
pub const SLIDER_MARKER: &str = "slider";

/// The element a pointer-down landed on, described by its markers.
///
/// A slider reacts to a target only when it carries both [`SLIDER_MARKER`]
/// and the slider's own name, so several sliders can share one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HitTarget {
    markers: SmallVec<[String; 4]>,
}

impl HitTarget {
    /// Creates a target from an arbitrary list of markers.
    pub fn new<I, M>(markers: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    /// A target belonging to the slider called `name`.
    pub fn slider(name: impl Into<String>) -> Self {
        Self::new([SLIDER_MARKER.to_string(), name.into()])
    }

    /// Returns `true` if the target carries `marker`.
    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }

    /// Returns `true` if this target is part of the slider called `name`.
    pub fn belongs_to(&self, name: &str) -> bool {
        self.has_marker(SLIDER_MARKER) && self.has_marker(name)
    }

    /// All markers, in insertion order.
    pub fn markers(&self) -> &[String] {
        &self.markers
    }
}

/// Horizontal part of a screen-to-local affine transform.
///
/// `a` is the X scale and `e` the X translation, as in an SVG screen CTM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    /// X scale.
    pub a: f32,
    /// X translation in document pixels.
    pub e: f32,
}

impl ScreenTransform {
    /// No scaling, no translation.
    pub const IDENTITY: Self = Self { a: 1.0, e: 0.0 };

    /// Creates a transform from scale and translation.
    pub const fn new(a: f32, e: f32) -> Self {
        Self { a, e }
    }

    /// Maps a document-space X coordinate into local track pixels.
    pub fn to_local(&self, document_x: f32) -> f32 {
        (document_x - self.e) / self.a
    }
}

impl Default for ScreenTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Capability the rendering collaborator provides to a slider.
pub trait TrackSurface {
    /// Current width of the track in local pixels. Zero when not laid out yet.
    fn track_width_px(&self) -> f32;

    /// Screen-to-local transform of `target`, or `None` when the surface
    /// cannot provide one yet.
    fn screen_transform(&self, target: &HitTarget) -> Option<ScreenTransform>;
}

impl<T: TrackSurface + ?Sized> TrackSurface for &T {
    fn track_width_px(&self) -> f32 {
        (**self).track_width_px()
    }

    fn screen_transform(&self, target: &HitTarget) -> Option<ScreenTransform> {
        (**self).screen_transform(target)
    }
}

impl<T: TrackSurface + ?Sized> TrackSurface for Arc<T> {
    fn track_width_px(&self) -> f32 {
        (**self).track_width_px()
    }

    fn screen_transform(&self, target: &HitTarget) -> Option<ScreenTransform> {
        (**self).screen_transform(target)
    }
}

/// A surface with fixed, host-managed geometry.
///
/// Hosts that lay out the track themselves can keep one of these per slider
/// and update it on resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticSurface {
    width: f32,
    transform: Option<ScreenTransform>,
}

impl StaticSurface {
    /// A laid-out surface of `width` local pixels mapped by `transform`.
    pub const fn new(width: f32, transform: ScreenTransform) -> Self {
        Self {
            width,
            transform: Some(transform),
        }
    }

    /// A surface that has not been laid out: zero width and no transform.
    pub const fn unmounted() -> Self {
        Self {
            width: 0.0,
            transform: None,
        }
    }

    /// Updates the track width.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Updates or clears the screen transform.
    pub fn set_transform(&mut self, transform: Option<ScreenTransform>) {
        self.transform = transform;
    }
}

impl TrackSurface for StaticSurface {
    fn track_width_px(&self) -> f32 {
        self.width
    }

    fn screen_transform(&self, _target: &HitTarget) -> Option<ScreenTransform> {
        self.transform
    }
}
