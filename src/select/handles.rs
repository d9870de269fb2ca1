//! Resize handle layout and hit testing.
//!
//! A selection's bounding rect grows four handles: edge midpoints in the
//! `plus` shape, corners in the `cross` shape. Each handle is a fixed-size
//! square hit box centered on its anchor. Hit testing walks the handles in a
//! fixed order and the first hit wins; there is no further tie-breaking.

use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Which four handles a selection shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleShape {
    /// Edge-midpoint handles: top, right, bottom, left.
    #[default]
    Plus,
    /// Corner handles: topLeft, topRight, bottomRight, bottomLeft.
    Cross,
}

/// A named anchor on the selection bounding rect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handle {
    Top,
    Right,
    Bottom,
    Left,
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// What a press grabbed: a specific handle, or the selection body (a
/// whole-selection move). An explicit variant rather than an optional handle,
/// so every dispatch site has to handle the move case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragTarget {
    /// No handle under the pointer; dragging moves the whole selection.
    Move,
    Handle(Handle),
}

/// The four anchors generated for a rect, in hit-test order.
#[derive(Clone, Copy, Debug)]
pub struct HandleLayout {
    pub shape: HandleShape,
    /// Side of each square hit box, in pixels.
    pub size: f32,
    pub anchors: [(Handle, Point); 4],
}

impl HandleLayout {
    /// Compute the anchors for `rect`. Hit-test order is top/right/bottom/left
    /// for `plus` and topLeft/topRight/bottomRight/bottomLeft for `cross`.
    pub fn new(rect: Rect, shape: HandleShape, size: f32) -> Self {
        let anchors = match shape {
            HandleShape::Plus => [
                (Handle::Top, Point::new(rect.x + rect.w / 2.0, rect.y)),
                (Handle::Right, Point::new(rect.right(), rect.y + rect.h / 2.0)),
                (Handle::Bottom, Point::new(rect.x + rect.w / 2.0, rect.bottom())),
                (Handle::Left, Point::new(rect.x, rect.y + rect.h / 2.0)),
            ],
            HandleShape::Cross => [
                (Handle::TopLeft, Point::new(rect.x, rect.y)),
                (Handle::TopRight, Point::new(rect.right(), rect.y)),
                (Handle::BottomRight, Point::new(rect.right(), rect.bottom())),
                (Handle::BottomLeft, Point::new(rect.x, rect.bottom())),
            ],
        };

        Self { shape, size, anchors }
    }

    /// The square hit box centered on `anchor`.
    pub fn hit_box(&self, anchor: Point) -> Rect {
        Rect::new(
            anchor.x - self.size / 2.0,
            anchor.y - self.size / 2.0,
            self.size,
            self.size,
        )
    }

    /// First handle (in layout order) whose hit box contains `pointer`.
    pub fn hit_test(&self, pointer: Point) -> Option<Handle> {
        self.anchors
            .iter()
            .find(|(_, anchor)| self.hit_box(*anchor).contains(pointer))
            .map(|(handle, _)| *handle)
    }

    /// What a press at `pointer` grabs.
    pub fn target_at(&self, pointer: Point) -> DragTarget {
        match self.hit_test(pointer) {
            Some(handle) => DragTarget::Handle(handle),
            None => DragTarget::Move,
        }
    }
}
