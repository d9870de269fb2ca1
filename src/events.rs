//! Semantic events emitted to the host.
//!
//! The engine pushes events into an outbox as it processes raw input; the
//! host drains them after each call (see `Pad::drain_events`). This keeps the
//! whole pipeline synchronous and single-threaded: no callback ever re-enters
//! the engine while it is mid-mutation.

use crate::geometry::{Point, Size};
use uuid::Uuid;

/// Everything the host can observe from the engine.
#[derive(Clone, Debug, PartialEq)]
pub enum PadEvent {
    /// The set of selected objects changed.
    SelectionChanged(Vec<Uuid>),
    /// A handled (post-throttle) pointer move.
    MouseMove { position: Point },
    /// A click that was not suppressed by a drag.
    Click { position: Point },
    /// The host should re-render.
    PaintRequest,
    /// The drawing surface was resized.
    Resize { size: Size },
    /// A paint pass completed.
    Paint,
    /// Interval accounting: paints since the last flush plus current object count.
    Telemetry { paint_count: u64, object_count: usize },
    /// Starting content parsed successfully.
    DocLoaded,
    /// Starting content was malformed; the engine continues with an empty document.
    DocLoadFailed,
}
