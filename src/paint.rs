//! Pluggable paint handling.
//!
//! Rendering of individual objects is delegated to host-registered handlers.
//! Each paint pass walks the document in paint order and offers every object
//! to the handlers in registration order; the first handler to claim an
//! object stops the chain for it.

use crate::types::PadObject;
use tracing::trace;

/// Whether a handler claimed an object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintOutcome {
    Handled,
    Unhandled,
}

/// A capability for drawing one kind of object. Handlers own whatever
/// drawing surface they target; the engine only routes objects to them.
pub trait PaintHandler {
    /// Offer `object` for drawing. `previously_handled` reports whether an
    /// earlier handler already claimed it during this pass. Return
    /// [`PaintOutcome::Handled`] to claim it and stop the chain.
    fn attempt_paint(&mut self, object: &PadObject, previously_handled: bool) -> PaintOutcome;
}

/// Run one object through `handlers` in order; first claim wins.
pub fn dispatch_paint(handlers: &mut [Box<dyn PaintHandler>], object: &PadObject) -> PaintOutcome {
    let mut handled = false;
    for handler in handlers.iter_mut() {
        if handler.attempt_paint(object, handled) == PaintOutcome::Handled {
            handled = true;
            break;
        }
    }
    if !handled {
        trace!(kind = ?object.kind, "object declined by every paint handler");
    }
    if handled {
        PaintOutcome::Handled
    } else {
        PaintOutcome::Unhandled
    }
}
