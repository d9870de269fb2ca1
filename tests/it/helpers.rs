//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestPadBuilder` - builder for pads pre-populated with objects
//! - `drag()` - a full press/move/release/click sequence with the move
//!   frames spaced past the pointer throttle
//! - small fixture constructors

use std::time::{Duration, Instant};

use uuid::Uuid;
use wirepad::chord::KeyModifiers;
use wirepad::geometry::{Point, Size};
use wirepad::ids::SequentialIdGenerator;
use wirepad::types::{Location, ObjectKind, PadObject};
use wirepad::{Pad, PadConfig};

// ============================================================================
// TestPadBuilder
// ============================================================================

/// Builder for pads with deterministic (sequential) object ids.
///
/// # Example
/// ```ignore
/// let mut pad = TestPadBuilder::new()
///     .with_rect(0.0, 0.0, 100.0, 100.0)
///     .with_rect(50.0, 50.0, 100.0, 100.0)
///     .selected(0)
///     .build();
/// ```
pub struct TestPadBuilder {
    objects: Vec<PadObject>,
    selected: Vec<usize>,
}

impl Default for TestPadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPadBuilder {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            selected: Vec::new(),
        }
    }

    /// Add a rect object at the given position and size.
    pub fn with_rect(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.objects.push(rect_object(x, y, w, h));
        self
    }

    /// Mark the object at insertion index `index` as selected.
    pub fn selected(mut self, index: usize) -> Self {
        self.selected.push(index);
        self
    }

    pub fn build(self) -> Pad {
        let mut ids = SequentialIdGenerator::new();
        let mut pad = Pad::new(PadConfig::default());
        let mut chosen: Vec<Uuid> = Vec::new();
        for (i, obj) in self.objects.into_iter().enumerate() {
            let id = pad.document_mut().add_object(obj, &mut ids);
            if self.selected.contains(&i) {
                chosen.push(id);
            }
        }
        pad.document_mut().select_ids(&chosen);
        pad
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn rect_object(x: f32, y: f32, w: f32, h: f32) -> PadObject {
    PadObject::new(ObjectKind::Rect, Location::new(x, y), Size::new(w, h))
}

/// Id of the object at paint-order index `index`.
pub fn id_at(pad: &Pad, index: usize) -> Uuid {
    pad.document().objects()[index].id
}

/// Install the test log subscriber once; safe to call from any test.
/// Run with `RUST_LOG=wirepad=trace` to see engine traces for a failure.
pub fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Interaction driving
// ============================================================================

/// Interval safely past the default move throttle.
pub const FRAME: Duration = Duration::from_millis(60);

/// Drive a full press-drag-release-click sequence through the pad, with move
/// frames spaced past the throttle so none are dropped.
pub fn drag(pad: &mut Pad, from: Point, to: Point, mods: KeyModifiers) {
    let mut now = Instant::now();
    pad.pointer_pressed(from, mods);
    now += FRAME;
    pad.pointer_moved_at(from, mods, now);
    now += FRAME;
    pad.pointer_moved_at(to, mods, now);
    pad.pointer_released();
    pad.clicked(to, mods);
}
