//! A draggable, tick-aware slider component.
//!
//! ## Usage
//!
//! Create a [`Sliderbar`] from a [`SliderConfig`] and the surface it is drawn
//! on, forward every document pointer event to [`Sliderbar::handle_event`],
//! and call [`Sliderbar::flush_deferred`] once per turn after rendering.
//!
//! ```
//! use rapid_slider::{
//!     pointer::PointerEvent,
//!     slider::{SliderConfig, Sliderbar},
//!     surface::{HitTarget, ScreenTransform, StaticSurface},
//! };
//!
//! let surface = StaticSurface::new(200.0, ScreenTransform::new(1.0, 10.0));
//! let mut slider = Sliderbar::new(
//!     SliderConfig::default().name("volume").ticks(5).snap(true),
//!     surface,
//! )
//! .on_value_change(|value| println!("volume = {value}"));
//!
//! slider.handle_event(&PointerEvent::mouse_down(HitTarget::slider("volume"), 132.0));
//! assert_eq!(slider.value(), 0.5);
//! ```
use derive_setters::Setters;
use tracing::debug;

use crate::{
    geometry::{
        RenderGeometry, TRACK_EXTENT, TickSet, build_tick_set, clamp_to_unit,
        effective_track_width, nearest_tick_percent, percent_from_position, position_from_percent,
    },
    pointer::{InputResponse, PointerEvent},
    prop::{Callback, CallbackWith},
    surface::TrackSurface,
};

use deferred::{DeferredEmit, DeferredQueue};
use interaction::{DragSignal, InteractionContext};

pub use interaction::{DragSession, SliderController};
pub use reconcile::{ReconcileEffect, Reconciliation, reconcile};
pub use render::{SliderScene, SvgCircle, SvgLine, SvgText, TRACK_CENTER_Y};

mod deferred;
mod interaction;
mod reconcile;
mod render;

/// Name used when the host does not give the slider one.
pub const DEFAULT_SLIDER_NAME: &str = "rapid-sliderbar";

/// Host-supplied configuration of a [`Sliderbar`].
#[derive(Debug, Clone, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderConfig {
    /// Identity used for hit-testing; pointer targets must carry it.
    #[setters(into)]
    pub name: String,
    /// The current value, clamped to `0.0..=1.0` when used.
    #[cfg_attr(feature = "serde", serde(alias = "percent"))]
    pub value: f32,
    /// Number of ticks, ends included. Fewer than two means no ticks.
    pub ticks: u32,
    /// Whether values snap to the nearest tick.
    pub snap: bool,
}

impl SliderConfig {
    /// Sets the value under its older name.
    pub fn percent(self, percent: f32) -> Self {
        self.value(percent)
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SLIDER_NAME.to_string(),
            value: 0.5,
            ticks: 0,
            snap: false,
        }
    }
}

/// One slider instance.
///
/// Owns the tick set, the handle geometry, the drag controller and the queue
/// of deferred value notifications. All mutation goes through `&mut self`.
pub struct Sliderbar<S> {
    config: SliderConfig,
    surface: S,
    ticks: TickSet,
    geometry: RenderGeometry,
    controller: SliderController,
    deferred: DeferredQueue,
    on_drag_started: Callback,
    on_drag_ended: Callback,
    on_value_change: CallbackWith<f32>,
}

impl<S: TrackSurface> Sliderbar<S> {
    /// Creates a slider and resolves its initial ticks and geometry.
    ///
    /// The initial state is not a change: nothing is emitted.
    pub fn new(config: SliderConfig, surface: S) -> Self {
        let mut slider = Self {
            config,
            surface,
            ticks: TickSet::empty(),
            geometry: RenderGeometry::default(),
            controller: SliderController::new(),
            deferred: DeferredQueue::default(),
            on_drag_started: Callback::default(),
            on_drag_ended: Callback::default(),
            on_value_change: CallbackWith::default(),
        };
        let initial = reconcile(None, &slider.config);
        slider.apply(&initial);
        slider
    }

    /// Sets the handler for value changes caused by dragging or by tick/snap
    /// reconfiguration.
    pub fn on_value_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.on_value_change = CallbackWith::new(on_change);
        self
    }

    /// Sets the handler fired once when a drag starts.
    pub fn on_drag_started<F>(mut self, on_started: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_drag_started = Callback::new(on_started);
        self
    }

    /// Sets the handler fired once when a drag ends.
    pub fn on_drag_ended<F>(mut self, on_ended: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_drag_ended = Callback::new(on_ended);
        self
    }

    /// Replaces the configuration and applies whatever the change requires.
    ///
    /// Tick and snap changes queue a value notification for the next
    /// [`flush_deferred`](Self::flush_deferred); value changes only move the
    /// handle.
    pub fn set_config(&mut self, config: SliderConfig) -> Reconciliation {
        let reconciliation = reconcile(Some(&self.config), &config);
        self.config = config;
        self.apply(&reconciliation);
        reconciliation
    }

    /// Edits the configuration through its setters.
    ///
    /// ```
    /// # use rapid_slider::{slider::{SliderConfig, Sliderbar}, surface::StaticSurface};
    /// let mut slider = Sliderbar::new(SliderConfig::default(), StaticSurface::unmounted());
    /// slider.update_config(|config| config.ticks(11).snap(true));
    /// assert_eq!(slider.ticks().len(), 11);
    /// ```
    pub fn update_config(
        &mut self,
        update: impl FnOnce(SliderConfig) -> SliderConfig,
    ) -> Reconciliation {
        let next = update(self.config.clone());
        self.set_config(next)
    }

    fn apply(&mut self, reconciliation: &Reconciliation) {
        if reconciliation.is_empty() {
            return;
        }
        debug!(
            slider = %self.config.name,
            effects = ?reconciliation.effects(),
            "Applying configuration change"
        );

        for effect in reconciliation.effects() {
            match *effect {
                ReconcileEffect::RebuildTicks(count) => {
                    self.ticks = build_tick_set(count, TRACK_EXTENT);
                }
                ReconcileEffect::RecomputeGeometry => {
                    self.geometry = self.configured_geometry();
                }
                ReconcileEffect::EmitDeferred => {
                    self.deferred.push(DeferredEmit {
                        position_px: self.configured_position(),
                    });
                }
            }
        }
    }

    fn track_width(&self) -> f32 {
        effective_track_width(self.surface.track_width_px())
    }

    fn configured_position(&self) -> f32 {
        position_from_percent(clamp_to_unit(self.config.value), self.track_width())
    }

    fn configured_geometry(&self) -> RenderGeometry {
        let percent = percent_from_position(self.configured_position(), self.track_width());
        RenderGeometry::resolve(percent, &self.ticks, self.config.snap)
    }

    /// Feeds one document-level pointer event to the slider.
    pub fn handle_event(&mut self, event: &PointerEvent) -> InputResponse {
        let track_width = self.track_width();
        let ctx = InteractionContext {
            name: &self.config.name,
            surface: &self.surface,
            track_width,
            ticks: &self.ticks,
            snap: self.config.snap,
        };
        let (signals, response) = self.controller.handle_event(event, &ctx);

        for signal in signals {
            match signal {
                DragSignal::Started => self.on_drag_started.call(),
                DragSignal::Moved { geometry, value } => {
                    self.geometry = geometry;
                    self.on_value_change.call(value);
                }
                DragSignal::Ended => self.on_drag_ended.call(),
            }
        }

        response
    }

    /// Delivers the value notifications queued by earlier reconfiguration.
    ///
    /// Call this on the host's next turn, after the new ticks have been
    /// rendered. Each queued position is converted with the ticks and snap flag
    /// current at flush time. Returns the number of notifications sent.
    pub fn flush_deferred(&mut self) -> usize {
        let batch = self.deferred.take();
        let count = batch.len();
        let track_width = self.track_width();

        for emit in batch {
            let percent = percent_from_position(emit.position_px, track_width);
            let value = nearest_tick_percent(percent, &self.ticks, self.config.snap);
            debug!(slider = %self.config.name, value, "Deferred value emitted");
            self.on_value_change.call(value);
        }

        count
    }

    /// Number of notifications waiting for [`flush_deferred`](Self::flush_deferred).
    pub fn pending_emissions(&self) -> usize {
        self.deferred.len()
    }

    /// Current configuration.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Hit-test identity.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// The value the handle currently shows.
    pub fn value(&self) -> f32 {
        self.geometry.percent()
    }

    /// Current handle geometry.
    pub fn geometry(&self) -> RenderGeometry {
        self.geometry
    }

    /// Current ticks.
    pub fn ticks(&self) -> &TickSet {
        &self.ticks
    }

    /// Returns whether the slider handle is currently being dragged.
    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// The drag controller.
    pub fn controller(&self) -> &SliderController {
        &self.controller
    }

    /// The surface the slider is drawn on.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, e.g. to record a resize.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Drawing primitives for the current state.
    pub fn scene(&self) -> SliderScene {
        SliderScene::build(&self.geometry, &self.ticks)
    }
}
