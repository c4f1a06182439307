//! Document-level pointer events as a slider consumes them.
//!
//! Hosts forward every document mouse and touch event to every slider; each
//! slider decides for itself whether an event concerns it. This keeps a drag
//! alive while the pointer strays outside the control during a fast move.

use smallvec::SmallVec;

use crate::surface::HitTarget;

/// One active touch contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Platform touch identifier.
    pub id: u64,
    /// Document-space X.
    pub client_x: f32,
    /// Document-space Y.
    pub client_y: f32,
}

impl TouchPoint {
    /// Creates a touch contact.
    pub const fn new(id: u64, client_x: f32, client_y: f32) -> Self {
        Self {
            id,
            client_x,
            client_y,
        }
    }
}

/// Touch contacts on the event target, first contact first.
pub type TouchList = SmallVec<[TouchPoint; 2]>;

/// A pointer event delivered at document scope.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// Mouse button pressed over `target`.
    MouseDown {
        /// Element under the pointer.
        target: HitTarget,
        /// Document-space X.
        client_x: f32,
    },
    /// Mouse moved anywhere in the document.
    MouseMove {
        /// Document-space X.
        client_x: f32,
    },
    /// Mouse button released anywhere in the document.
    MouseUp,
    /// Mouse left the document.
    MouseLeave,
    /// A touch began on `target`.
    TouchStart {
        /// Element under the touch.
        target: HitTarget,
        /// Contacts on the target.
        touches: TouchList,
    },
    /// A touch moved.
    TouchMove {
        /// Contacts on the target the touch started on.
        touches: TouchList,
    },
    /// A touch ended.
    TouchEnd,
}

impl PointerEvent {
    /// Mouse press helper.
    pub fn mouse_down(target: HitTarget, client_x: f32) -> Self {
        Self::MouseDown { target, client_x }
    }

    /// Mouse move helper.
    pub fn mouse_move(client_x: f32) -> Self {
        Self::MouseMove { client_x }
    }

    /// Single-contact touch start helper.
    pub fn touch_start(target: HitTarget, client_x: f32) -> Self {
        Self::TouchStart {
            target,
            touches: smallvec::smallvec![TouchPoint::new(0, client_x, 0.0)],
        }
    }

    /// Single-contact touch move helper.
    pub fn touch_move(client_x: f32) -> Self {
        Self::TouchMove {
            touches: smallvec::smallvec![TouchPoint::new(0, client_x, 0.0)],
        }
    }

    /// The element a press or touch start landed on.
    pub fn target(&self) -> Option<&HitTarget> {
        match self {
            Self::MouseDown { target, .. } | Self::TouchStart { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Document-space X of the event, using the first contact for touches.
    pub fn client_x(&self) -> Option<f32> {
        match self {
            Self::MouseDown { client_x, .. } | Self::MouseMove { client_x } => Some(*client_x),
            Self::TouchStart { touches, .. } | Self::TouchMove { touches } => {
                touches.first().map(|touch| touch.client_x)
            }
            Self::MouseUp | Self::MouseLeave | Self::TouchEnd => None,
        }
    }

    /// Returns `true` for events that begin a drag.
    pub fn is_press(&self) -> bool {
        matches!(self, Self::MouseDown { .. } | Self::TouchStart { .. })
    }

    /// Returns `true` for events that end a drag.
    pub fn is_release(&self) -> bool {
        matches!(self, Self::MouseUp | Self::MouseLeave | Self::TouchEnd)
    }
}

/// What the host should do with the native event after the slider saw it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputResponse {
    /// Suppress the platform's default handling (text selection while
    /// dragging, for instance).
    pub prevent_default: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_x_uses_first_touch() {
        let event = PointerEvent::TouchMove {
            touches: smallvec::smallvec![
                TouchPoint::new(3, 120.0, 5.0),
                TouchPoint::new(4, 10.0, 5.0)
            ],
        };
        assert_eq!(event.client_x(), Some(120.0));
        assert_eq!(
            PointerEvent::TouchMove {
                touches: TouchList::new()
            }
            .client_x(),
            None
        );
        assert_eq!(PointerEvent::MouseUp.client_x(), None);
    }

    #[test]
    fn test_press_and_release_classification() {
        let target = HitTarget::slider("s");
        assert!(PointerEvent::mouse_down(target.clone(), 1.0).is_press());
        assert!(PointerEvent::touch_start(target, 1.0).is_press());
        assert!(PointerEvent::MouseLeave.is_release());
        assert!(PointerEvent::TouchEnd.is_release());
        assert!(!PointerEvent::mouse_move(3.0).is_press());
        assert!(!PointerEvent::mouse_move(3.0).is_release());
    }
}
