//! Primitive geometry: points, sizes, rectangles, and the folds over them
//! that the selection engine is built on.

use serde::{Deserialize, Serialize};

/// A position in surface coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair. Components are kept non-negative by document
/// normalization; geometry code may assume that invariant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            w: size.w,
            h: size.h,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Whether `point` lies inside this rect. Edges are inclusive.
    pub fn contains(&self, point: Point) -> bool {
        self.x <= point.x && self.right() >= point.x && self.y <= point.y && self.bottom() >= point.y
    }

    /// Grow the rect by `margin / 2` on every side, keeping its center.
    /// Used to pad hit areas by the handle size.
    pub fn inflated(&self, margin: f32) -> Rect {
        Rect {
            x: self.x - margin / 2.0,
            y: self.y - margin / 2.0,
            w: self.w + margin,
            h: self.h + margin,
        }
    }
}

/// Minimal axis-aligned rectangle covering every rect in the input, tracking
/// the running minimum origin and maximum right/bottom edge. Empty input has
/// no bounding rect.
pub fn bounding_rect<I>(rects: I) -> Option<Rect>
where
    I: IntoIterator<Item = Rect>,
{
    let mut bounds: Option<Rect> = None;

    for r in rects {
        let b = bounds.get_or_insert(r);
        if r.x < b.x {
            b.w = b.right() - r.x;
            b.x = r.x;
        }
        if r.y < b.y {
            b.h = b.bottom() - r.y;
            b.y = r.y;
        }
        if r.right() > b.right() {
            b.w = r.right() - b.x;
        }
        if r.bottom() > b.bottom() {
            b.h = r.bottom() - b.y;
        }
    }

    bounds
}
