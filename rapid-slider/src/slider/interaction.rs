use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
    geometry::{RenderGeometry, nearest_tick_percent, percent_from_position},
    pointer::{InputResponse, PointerEvent},
    surface::{HitTarget, ScreenTransform, TrackSurface},
};

/// State of one drag, from a recognized press to the matching release.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    target: HitTarget,
    transform: Option<ScreenTransform>,
}

impl DragSession {
    /// The element the drag started on.
    pub fn target(&self) -> &HitTarget {
        &self.target
    }

    /// Transform sampled when the drag started. It is not refreshed mid-drag.
    pub fn transform(&self) -> Option<ScreenTransform> {
        self.transform
    }

    /// Maps a document X into track pixels. Without a transform every
    /// pointer maps to 0.
    pub fn to_local(&self, document_x: f32) -> f32 {
        self.transform
            .map_or(0.0, |transform| transform.to_local(document_x))
    }
}

/// Controller for the `Sliderbar` drag state machine.
#[derive(Debug, Default)]
pub struct SliderController {
    session: Option<DragSession>,
}

/// What a pointer event caused, in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum DragSignal {
    Started,
    Moved {
        geometry: RenderGeometry,
        value: f32,
    },
    Ended,
}

pub(super) type DragSignals = SmallVec<[DragSignal; 2]>;

/// Everything the controller needs to know about the slider for one event.
pub(super) struct InteractionContext<'a> {
    pub name: &'a str,
    pub surface: &'a dyn TrackSurface,
    pub track_width: f32,
    pub ticks: &'a [crate::geometry::Tick],
    pub snap: bool,
}

impl SliderController {
    /// Creates an idle controller.
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Returns whether the slider handle is currently being dragged.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active drag, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub(super) fn handle_event(
        &mut self,
        event: &PointerEvent,
        ctx: &InteractionContext<'_>,
    ) -> (DragSignals, InputResponse) {
        let mut signals = DragSignals::new();
        let mut response = InputResponse::default();

        if event.is_release() {
            if self.end_dragging(ctx.name) {
                signals.push(DragSignal::Ended);
            }
            return (signals, response);
        }

        if event.is_press() {
            let Some(target) = event.target().filter(|target| target.belongs_to(ctx.name)) else {
                return (signals, response);
            };
            // A second press mid-drag keeps the session and only samples.
            if !self.is_dragging() {
                self.start_dragging(target, ctx);
                signals.push(DragSignal::Started);
            }
        } else if self.is_dragging() {
            response.prevent_default = matches!(event, PointerEvent::MouseMove { .. });
        }

        if let Some(client_x) = event.client_x() {
            signals.extend(self.sample(client_x, ctx));
        }

        (signals, response)
    }

    fn start_dragging(&mut self, target: &HitTarget, ctx: &InteractionContext<'_>) {
        let transform = ctx.surface.screen_transform(target);
        if transform.is_none() {
            debug!(
                slider = ctx.name,
                "No screen transform at drag start; pointer positions map to 0"
            );
        }
        debug!(slider = ctx.name, "Drag started");
        self.session = Some(DragSession {
            target: target.clone(),
            transform,
        });
    }

    /// Returns `true` when a drag actually ended.
    fn end_dragging(&mut self, name: &str) -> bool {
        if self.session.take().is_some() {
            debug!(slider = name, "Drag ended");
            true
        } else {
            false
        }
    }

    /// Converts a pointer X into a move signal. Positions on or beyond the
    /// track edges are dropped without clamping.
    fn sample(&self, client_x: f32, ctx: &InteractionContext<'_>) -> Option<DragSignal> {
        let session = self.session.as_ref()?;
        let position = session.to_local(client_x);

        if !(position > 0.0 && position < ctx.track_width) {
            trace!(
                slider = ctx.name,
                position,
                width = ctx.track_width,
                "Pointer outside track, sample ignored"
            );
            return None;
        }

        let percent = percent_from_position(position, ctx.track_width);
        let geometry = RenderGeometry::resolve(percent, ctx.ticks, ctx.snap);
        let value = nearest_tick_percent(percent, ctx.ticks, ctx.snap);
        trace!(slider = ctx.name, position, value, "Pointer sample accepted");

        Some(DragSignal::Moved { geometry, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::{TRACK_EXTENT, build_tick_set},
        surface::StaticSurface,
    };

    fn run(
        controller: &mut SliderController,
        surface: &StaticSurface,
        ticks: &[crate::geometry::Tick],
        snap: bool,
        event: PointerEvent,
    ) -> (DragSignals, InputResponse) {
        let ctx = InteractionContext {
            name: "s",
            surface,
            track_width: surface.track_width_px(),
            ticks,
            snap,
        };
        controller.handle_event(&event, &ctx)
    }

    fn surface() -> StaticSurface {
        StaticSurface::new(200.0, ScreenTransform::new(1.0, 100.0))
    }

    #[test]
    fn test_press_starts_and_jumps() {
        let mut controller = SliderController::new();
        let (signals, _) = run(
            &mut controller,
            &surface(),
            &[],
            false,
            PointerEvent::mouse_down(HitTarget::slider("s"), 150.0),
        );
        assert!(controller.is_dragging());
        assert_eq!(signals[0], DragSignal::Started);
        assert_eq!(
            signals[1],
            DragSignal::Moved {
                geometry: RenderGeometry {
                    handle_center: 25.0,
                    range_end: 25.0
                },
                value: 0.25
            }
        );
    }

    #[test]
    fn test_foreign_press_is_ignored() {
        let mut controller = SliderController::new();
        let (signals, _) = run(
            &mut controller,
            &surface(),
            &[],
            false,
            PointerEvent::mouse_down(HitTarget::slider("other"), 150.0),
        );
        assert!(signals.is_empty());
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_moves_ignored_while_idle() {
        let mut controller = SliderController::new();
        let (signals, response) = run(
            &mut controller,
            &surface(),
            &[],
            false,
            PointerEvent::mouse_move(150.0),
        );
        assert!(signals.is_empty());
        assert!(!response.prevent_default);
    }

    #[test]
    fn test_edge_positions_are_rejected() {
        let mut controller = SliderController::new();
        let s = surface();
        // Press exactly on the left edge: drag starts, no sample.
        let (signals, _) = run(
            &mut controller,
            &s,
            &[],
            false,
            PointerEvent::mouse_down(HitTarget::slider("s"), 100.0),
        );
        assert_eq!(signals.as_slice(), &[DragSignal::Started]);

        for x in [100.0, 300.0, 350.0, 20.0] {
            let (signals, response) =
                run(&mut controller, &s, &[], false, PointerEvent::mouse_move(x));
            assert!(signals.is_empty(), "x = {x}");
            assert!(response.prevent_default);
        }

        let (signals, _) = run(&mut controller, &s, &[], false, PointerEvent::mouse_move(299.0));
        assert_eq!(signals.len(), 1);
    }

    #[test]
    fn test_snapped_move_value() {
        let mut controller = SliderController::new();
        let ticks = build_tick_set(5, TRACK_EXTENT);
        let s = surface();
        run(
            &mut controller,
            &s,
            &ticks,
            true,
            PointerEvent::touch_start(HitTarget::slider("s"), 101.0),
        );
        let (signals, _) = run(&mut controller, &s, &ticks, true, PointerEvent::touch_move(222.0));
        assert_eq!(
            signals.as_slice(),
            &[DragSignal::Moved {
                geometry: RenderGeometry {
                    handle_center: 50.0,
                    range_end: 50.0
                },
                value: 0.5
            }]
        );
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut controller = SliderController::new();
        let s = surface();
        run(
            &mut controller,
            &s,
            &[],
            false,
            PointerEvent::mouse_down(HitTarget::slider("s"), 150.0),
        );
        let (first, _) = run(&mut controller, &s, &[], false, PointerEvent::MouseUp);
        let (second, _) = run(&mut controller, &s, &[], false, PointerEvent::MouseLeave);
        let (third, _) = run(&mut controller, &s, &[], false, PointerEvent::TouchEnd);
        assert_eq!(first.as_slice(), &[DragSignal::Ended]);
        assert!(second.is_empty());
        assert!(third.is_empty());
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_second_press_keeps_drag_and_samples() {
        let mut controller = SliderController::new();
        let s = surface();
        run(
            &mut controller,
            &s,
            &[],
            false,
            PointerEvent::mouse_down(HitTarget::slider("s"), 150.0),
        );
        let (signals, _) = run(
            &mut controller,
            &s,
            &[],
            false,
            PointerEvent::touch_start(HitTarget::slider("s"), 160.0),
        );
        assert!(matches!(
            signals.as_slice(),
            [DragSignal::Moved { value, .. }] if *value == 0.3
        ));

        let (ended, _) = run(&mut controller, &s, &[], false, PointerEvent::MouseUp);
        assert_eq!(ended.as_slice(), &[DragSignal::Ended]);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_touch_move_ignored_while_idle() {
        let mut controller = SliderController::new();
        let (signals, response) = run(
            &mut controller,
            &surface(),
            &[],
            false,
            PointerEvent::touch_move(150.0),
        );
        assert!(signals.is_empty());
        assert!(!response.prevent_default);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_missing_transform_maps_to_zero() {
        let mut controller = SliderController::new();
        let mut s = surface();
        s.set_transform(None);
        let (signals, _) = run(
            &mut controller,
            &s,
            &[],
            false,
            PointerEvent::mouse_down(HitTarget::slider("s"), 150.0),
        );
        assert_eq!(signals.as_slice(), &[DragSignal::Started]);
        assert!(controller.is_dragging());
        assert_eq!(controller.session().map(|s| s.to_local(999.0)), Some(0.0));
    }

    #[test]
    fn test_transform_is_sampled_once() {
        let mut controller = SliderController::new();
        let mut s = surface();
        run(
            &mut controller,
            &s,
            &[],
            false,
            PointerEvent::mouse_down(HitTarget::slider("s"), 150.0),
        );
        s.set_transform(Some(ScreenTransform::new(1.0, 0.0)));
        let (signals, _) = run(&mut controller, &s, &[], false, PointerEvent::mouse_move(200.0));
        // Still mapped with the translation captured at drag start.
        assert!(matches!(
            signals.as_slice(),
            [DragSignal::Moved { value, .. }] if *value == 0.5
        ));
    }
}
