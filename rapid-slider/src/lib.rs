//! Headless, tick-aware slider for pointer-driven UIs.
//!
//! The crate turns document-space mouse and touch input into a normalized
//! value in `0.0..=1.0`, optionally snapped to evenly spaced ticks, and keeps
//! the handle geometry in sync with configuration the host may change at any
//! time, even mid-drag. Drawing is left to the host: the slider hands out
//! numbers ([`RenderGeometry`], [`TickSet`]) and SVG-style primitives
//! ([`SliderScene`]).
//!
//! # Components
//!
//! - [`geometry`]: pure pixel/percent/tick conversions.
//! - [`slider::SliderController`]: the Idle/Dragging state machine.
//! - [`slider::reconcile`]: configuration diffing into effects.
//! - [`Sliderbar`]: one slider instance composing the above.
//!
//! # Host loop
//!
//! ```
//! use rapid_slider::{
//!     PointerEvent, SliderConfig, Sliderbar,
//!     surface::{HitTarget, ScreenTransform, StaticSurface},
//! };
//!
//! let mut slider = Sliderbar::new(
//!     SliderConfig::default().name("teal").value(0.5).ticks(11).snap(true),
//!     StaticSurface::new(300.0, ScreenTransform::IDENTITY),
//! );
//!
//! // Forward every document event to every slider.
//! slider.handle_event(&PointerEvent::mouse_down(HitTarget::slider("teal"), 92.0));
//! slider.handle_event(&PointerEvent::MouseUp);
//! assert_eq!(slider.value(), 0.3);
//!
//! // Configuration changes may queue notifications for the next turn.
//! slider.update_config(|config| config.ticks(6));
//! assert_eq!(slider.flush_deferred(), 1);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod geometry;
pub mod pointer;
pub mod prop;
pub mod slider;
pub mod surface;

pub use geometry::{RenderGeometry, Tick, TickSet};
pub use pointer::{InputResponse, PointerEvent, TouchPoint};
pub use prop::{Callback, CallbackWith};
pub use slider::{SliderConfig, SliderScene, Sliderbar};
pub use surface::{HitTarget, ScreenTransform, StaticSurface, TrackSurface};
