//! Pointer/keyboard raw-event handling for the pad.
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current interaction, a press-time snapshot for the transform math, and
//! a token-keyed throttle so per-frame geometry work never runs faster than
//! the display consumes it.
//!
//! ## Modules
//!
//! - `state` - interaction state machine and press snapshot
//! - `throttle` - token-keyed move coalescing
//! - `pointer` - pointer move/down/up/leave/click entry points
//! - `keyboard` - key down/up entry points

mod state;
mod throttle;

mod keyboard;
mod pointer;

pub use state::{Grab, InputState, PressSnapshot};
pub use throttle::Throttle;
