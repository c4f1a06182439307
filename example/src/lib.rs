//! Showcase host for `rapid-slider`: three named sliders in one document,
//! driven by a scripted pointer scenario.
mod app_state;
mod scenario;
mod showcase;

use std::{collections::BTreeMap, path::PathBuf};

use anyhow::Context;
use rapid_slider::SliderScene;

pub use app_state::{DragState, SliderState};
pub use scenario::{Scenario, ScenarioError, SliderSpec, Step, showcase_sliders};
pub use showcase::{Showcase, SliderReport};

/// What to replay and how to report it.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub scenario: Option<PathBuf>,
    pub json: bool,
}

pub fn run(options: &RunOptions) -> anyhow::Result<()> {
    let scenario = match &options.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::builtin(),
    };
    tracing::info!(
        sliders = scenario.sliders.len(),
        steps = scenario.steps.len(),
        "Replaying scenario"
    );

    let mut showcase = Showcase::new(&scenario.sliders);
    showcase.run(&scenario)?;
    let reports = showcase.reports();

    if options.json {
        let scenes: BTreeMap<&str, &SliderScene> = reports
            .iter()
            .map(|report| (report.name.as_str(), &report.scene))
            .collect();
        let rendered =
            serde_json::to_string_pretty(&scenes).context("Failed to serialize slider scenes")?;
        println!("{rendered}");
    } else {
        for report in &reports {
            println!(
                "{:<8} value {:.3}  {:<13} ticks {:>2}  notifications {}",
                report.name,
                report.value,
                report.drag.to_string(),
                report.scene.ticks.len(),
                report.notifications,
            );
        }
    }

    Ok(())
}
