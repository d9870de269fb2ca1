//! Interaction state machine.
//!
//! ## State transitions
//!
//! ```text
//! Idle     -> Pressed   (pointer down)
//! Pressed  -> Dragging  (pointer move while down)
//! Dragging -> Dragging  (further moves)
//! Any      -> Idle      (deferred: release/leave schedules a reset that is
//!                        consumed at the start of the NEXT dispatched event)
//! ```
//!
//! The deferred reset reproduces the release/click ordering of event-driven
//! hosts: the click that trails a release must still observe "was dragging"
//! so it can suppress itself. `Pad` owns the pending flag; this module only
//! models the states.

use crate::geometry::{Point, Rect};
use crate::select::DragTarget;

/// Everything frozen at press time that the transform math needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PressSnapshot {
    /// Pointer location when the press landed.
    pub pointer: Point,
    /// Selection bounding rect when the press landed.
    pub rect: Rect,
}

/// What the press grabbed. Absent when the press landed with no selection;
/// such a press can still become a drag (suppressing the trailing click) but
/// transforms nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grab {
    pub target: DragTarget,
    pub snapshot: PressSnapshot,
}

/// Current interaction state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InputState {
    #[default]
    Idle,
    /// Pointer is down, no movement observed yet.
    Pressed { grab: Option<Grab> },
    /// Pointer is down and has moved.
    Dragging { grab: Option<Grab> },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self, Self::Pressed { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// The active grab, if any, regardless of pressed/dragging.
    pub fn grab(&self) -> Option<Grab> {
        match self {
            Self::Pressed { grab } | Self::Dragging { grab } => *grab,
            Self::Idle => None,
        }
    }

    /// Enter `Pressed` with the given grab.
    pub fn begin_press(&mut self, grab: Option<Grab>) {
        *self = Self::Pressed { grab };
    }

    /// Promote `Pressed` to `Dragging`, keeping the grab. No-op otherwise.
    pub fn promote_to_drag(&mut self) {
        if let Self::Pressed { grab } = *self {
            *self = Self::Dragging { grab };
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
