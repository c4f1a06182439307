use std::{fmt, sync::Arc};

use parking_lot::RwLock;

/// Whether the host believes a slider is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    Dragging,
    #[default]
    NotDragging,
}

impl fmt::Display for DragState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragState::Dragging => f.write_str("Dragging"),
            DragState::NotDragging => f.write_str("Not Dragging"),
        }
    }
}

/// The host's own copy of one slider's output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderState {
    pub value: f32,
    pub drag: DragState,
    pub notifications: usize,
}

impl SliderState {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            drag: DragState::NotDragging,
            notifications: 0,
        }
    }
}

pub type SharedSliderState = Arc<RwLock<SliderState>>;
