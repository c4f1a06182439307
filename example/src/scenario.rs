//! Scripted input for the showcase.
//!
//! A scenario is a JSON document listing the sliders to create and the steps
//! to replay against them:
//!
//! ```json
//! {
//!   "sliders": [{ "name": "teal", "value": 0.5, "ticks": 11, "snap": true }],
//!   "steps": [
//!     { "type": "mouse_down", "target": "teal", "x": 190 },
//!     { "type": "mouse_up" },
//!     { "type": "configure", "slider": "teal", "ticks": 6 }
//!   ]
//! }
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use rapid_slider::{HitTarget, PointerEvent, SliderConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_TRACK_WIDTH: f32 = 300.0;
const DEFAULT_TRACK_OFFSET: f32 = 40.0;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse scenario {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Step {index} refers to unknown slider `{name}`")]
    UnknownSlider { index: usize, name: String },
}

/// One slider of the showcase and where its track sits in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    #[serde(flatten)]
    pub config: SliderConfig,
    #[serde(default = "default_track_width")]
    pub width: f32,
    #[serde(default = "default_track_offset")]
    pub offset: f32,
    #[serde(default = "default_scale")]
    pub scale: f32,
}

impl SliderSpec {
    fn new(name: &str, value: f32, ticks: u32, snap: bool) -> Self {
        Self {
            config: SliderConfig::default()
                .name(name)
                .value(value)
                .ticks(ticks)
                .snap(snap),
            width: DEFAULT_TRACK_WIDTH,
            offset: DEFAULT_TRACK_OFFSET,
            scale: 1.0,
        }
    }
}

fn default_track_width() -> f32 {
    DEFAULT_TRACK_WIDTH
}

fn default_track_offset() -> f32 {
    DEFAULT_TRACK_OFFSET
}

fn default_scale() -> f32 {
    1.0
}

/// The brown, teal and gold sliders of the demo page.
pub fn showcase_sliders() -> Vec<SliderSpec> {
    vec![
        SliderSpec::new("brown", 0.22, 6, false),
        SliderSpec::new("teal", 0.50, 11, true),
        SliderSpec::new("gold", 0.87, 41, false),
    ]
}

/// One scripted action. Pointer coordinates are document-space X.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    MouseDown { target: String, x: f32 },
    MouseMove { x: f32 },
    MouseUp,
    MouseLeave,
    TouchStart { target: String, x: f32 },
    TouchMove { x: f32 },
    TouchEnd,
    Configure {
        slider: String,
        #[serde(default)]
        value: Option<f32>,
        #[serde(default)]
        ticks: Option<u32>,
        #[serde(default)]
        snap: Option<bool>,
    },
    Resize { slider: String, width: f32 },
}

impl Step {
    /// The pointer event this step dispatches, if it is a pointer step.
    pub fn pointer_event(&self) -> Option<PointerEvent> {
        let event = match self {
            Step::MouseDown { target, x } => {
                PointerEvent::mouse_down(HitTarget::slider(target.as_str()), *x)
            }
            Step::MouseMove { x } => PointerEvent::mouse_move(*x),
            Step::MouseUp => PointerEvent::MouseUp,
            Step::MouseLeave => PointerEvent::MouseLeave,
            Step::TouchStart { target, x } => {
                PointerEvent::touch_start(HitTarget::slider(target.as_str()), *x)
            }
            Step::TouchMove { x } => PointerEvent::touch_move(*x),
            Step::TouchEnd => PointerEvent::TouchEnd,
            Step::Configure { .. } | Step::Resize { .. } => return None,
        };
        Some(event)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default = "showcase_sliders")]
    pub sliders: Vec<SliderSpec>,
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let raw = fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ScenarioError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Drags teal and gold, reconfigures brown and gold, and strays off the
    /// track once on purpose.
    pub fn builtin() -> Self {
        let x = |local: f32| DEFAULT_TRACK_OFFSET + local;
        Self {
            sliders: showcase_sliders(),
            steps: vec![
                Step::MouseDown {
                    target: "teal".into(),
                    x: x(150.0),
                },
                Step::MouseMove { x: x(95.0) },
                Step::MouseMove { x: x(420.0) },
                Step::MouseUp,
                Step::MouseLeave,
                Step::Configure {
                    slider: "brown".into(),
                    value: None,
                    ticks: None,
                    snap: Some(true),
                },
                Step::TouchStart {
                    target: "gold".into(),
                    x: x(270.0),
                },
                Step::TouchMove { x: x(285.0) },
                Step::TouchEnd,
                Step::Configure {
                    slider: "gold".into(),
                    value: None,
                    ticks: Some(5),
                    snap: None,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scenario_with_defaults() {
        let raw = r#"{
            "steps": [
                { "type": "mouse_down", "target": "teal", "x": 190 },
                { "type": "configure", "slider": "teal", "ticks": 6 },
                { "type": "mouse_up" }
            ]
        }"#;
        let scenario: Scenario = serde_json::from_str(raw).expect("valid scenario");
        assert_eq!(scenario.sliders, showcase_sliders());
        assert_eq!(scenario.steps.len(), 3);
        assert_eq!(
            scenario.steps[1],
            Step::Configure {
                slider: "teal".into(),
                value: None,
                ticks: Some(6),
                snap: None,
            }
        );
    }

    #[test]
    fn test_parse_slider_spec_with_legacy_percent() {
        let raw = r#"{ "name": "x", "percent": 0.25, "ticks": 3, "offset": 0 }"#;
        let spec: SliderSpec = serde_json::from_str(raw).expect("valid slider");
        assert_eq!(spec.config.value, 0.25);
        assert_eq!(spec.config.ticks, 3);
        assert!(!spec.config.snap);
        assert_eq!(spec.offset, 0.0);
        assert_eq!(spec.width, DEFAULT_TRACK_WIDTH);
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = Scenario::load(Path::new("/nonexistent/scenario.json"))
            .expect_err("missing file must fail");
        assert!(matches!(err, ScenarioError::Read { .. }));
    }

    #[test]
    fn test_pointer_steps_convert() {
        let step = Step::MouseDown {
            target: "teal".into(),
            x: 10.0,
        };
        let event = step.pointer_event().expect("pointer step");
        assert!(event.target().is_some_and(|t| t.belongs_to("teal")));
        assert!(
            Step::Resize {
                slider: "teal".into(),
                width: 1.0
            }
            .pointer_event()
            .is_none()
        );
    }
}
