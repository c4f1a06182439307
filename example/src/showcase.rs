use std::sync::Arc;

use parking_lot::RwLock;
use rapid_slider::{
    PointerEvent, ScreenTransform, SliderScene, Sliderbar, StaticSurface, TrackSurface,
};
use tracing::{debug, info};

use crate::{
    app_state::{DragState, SharedSliderState, SliderState},
    scenario::{Scenario, ScenarioError, SliderSpec, Step},
};

struct HostedSlider {
    slider: Sliderbar<StaticSurface>,
    state: SharedSliderState,
}

impl HostedSlider {
    fn new(spec: &SliderSpec) -> Self {
        let state: SharedSliderState = Arc::new(RwLock::new(SliderState::new(spec.config.value)));
        let surface = StaticSurface::new(spec.width, ScreenTransform::new(spec.scale, spec.offset));
        let name = spec.config.name.clone();

        let on_value = {
            let state = state.clone();
            let name = name.clone();
            move |value: f32| {
                info!(slider = %name, value, "Value changed");
                let mut state = state.write();
                state.value = value;
                state.notifications += 1;
            }
        };
        let on_started = {
            let state = state.clone();
            move || state.write().drag = DragState::Dragging
        };
        let on_ended = {
            let state = state.clone();
            move || state.write().drag = DragState::NotDragging
        };

        let slider = Sliderbar::new(spec.config.clone(), surface)
            .on_value_change(on_value)
            .on_drag_started(on_started)
            .on_drag_ended(on_ended);

        Self { slider, state }
    }

    /// Feeds the host's copy of the value back in, as a two-way binding does.
    fn sync_value(&mut self) {
        let value = self.state.read().value;
        if value != self.slider.config().value {
            self.slider.update_config(|config| config.value(value));
        }
    }
}

/// Summary of one slider after a run.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderReport {
    pub name: String,
    pub value: f32,
    pub drag: DragState,
    pub notifications: usize,
    pub scene: SliderScene,
}

/// A document hosting several sliders that share one event stream.
pub struct Showcase {
    sliders: Vec<HostedSlider>,
}

impl Showcase {
    pub fn new(specs: &[SliderSpec]) -> Self {
        Self {
            sliders: specs.iter().map(HostedSlider::new).collect(),
        }
    }

    /// Sends a document event to every slider.
    pub fn dispatch(&mut self, event: &PointerEvent) {
        for hosted in &mut self.sliders {
            let response = hosted.slider.handle_event(event);
            if response.prevent_default {
                debug!(slider = hosted.slider.name(), "Default action prevented");
            }
        }
        self.sync_values();
    }

    /// Ends the current turn: delivers deferred notifications and syncs the
    /// host's values back into the sliders.
    pub fn end_turn(&mut self) -> usize {
        let delivered = self
            .sliders
            .iter_mut()
            .map(|hosted| hosted.slider.flush_deferred())
            .sum();
        self.sync_values();
        delivered
    }

    fn sync_values(&mut self) {
        for hosted in &mut self.sliders {
            hosted.sync_value();
        }
    }

    fn find_mut(&mut self, name: &str, index: usize) -> Result<&mut HostedSlider, ScenarioError> {
        self.sliders
            .iter_mut()
            .find(|hosted| hosted.slider.name() == name)
            .ok_or_else(|| ScenarioError::UnknownSlider {
                index,
                name: name.to_string(),
            })
    }

    pub fn apply(&mut self, index: usize, step: &Step) -> Result<(), ScenarioError> {
        if let Some(event) = step.pointer_event() {
            self.dispatch(&event);
            return Ok(());
        }

        match step {
            Step::Configure {
                slider,
                value,
                ticks,
                snap,
            } => {
                let hosted = self.find_mut(slider, index)?;
                if let Some(value) = value {
                    hosted.state.write().value = *value;
                }
                let reconciliation = hosted.slider.update_config(|mut config| {
                    config.value = value.unwrap_or(config.value);
                    config.ticks = ticks.unwrap_or(config.ticks);
                    config.snap = snap.unwrap_or(config.snap);
                    config
                });
                info!(
                    slider = %slider,
                    deferred = reconciliation.deferred_emissions(),
                    "Configuration changed"
                );
            }
            Step::Resize { slider, width } => {
                let hosted = self.find_mut(slider, index)?;
                hosted.slider.surface_mut().set_width(*width);
                info!(
                    slider = %slider,
                    width = hosted.slider.surface().track_width_px(),
                    "Track resized"
                );
            }
            _ => {}
        }
        Ok(())
    }

    pub fn run(&mut self, scenario: &Scenario) -> Result<(), ScenarioError> {
        for (index, step) in scenario.steps.iter().enumerate() {
            self.apply(index, step)?;
            let delivered = self.end_turn();
            if delivered > 0 {
                debug!(step = index, delivered, "Deferred notifications delivered");
            }
        }
        Ok(())
    }

    pub fn reports(&self) -> Vec<SliderReport> {
        self.sliders
            .iter()
            .map(|hosted| {
                let state = *hosted.state.read();
                SliderReport {
                    name: hosted.slider.name().to_string(),
                    value: state.value,
                    drag: state.drag,
                    notifications: state.notifications,
                    scene: hosted.slider.scene(),
                }
            })
            .collect()
    }
}
