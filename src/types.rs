//! Core data model: positioned objects and the flat snapshot format they are
//! exchanged in.
//!
//! A [`PadObject`]'s `id` and `selected` fields are runtime-only: they are
//! stripped on export and regenerated on import, so the wire format stays a
//! plain record of type, size, location, and presentation preferences.

use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// The kind of content an object renders as. Rendering itself is delegated to
/// registered paint handlers; the engine only carries the tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    #[default]
    Rect,
    Image,
    Paragraph,
    Heading,
}

/// Alignment hint carried alongside a location. Unused by the core geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Right,
    Middle,
}

/// An object's position plus its alignment hint. The wire format abbreviates
/// the hint as `a`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f32,
    pub y: f32,
    #[serde(rename = "a", default)]
    pub align: Align,
}

impl Location {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            align: Align::default(),
        }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// An open-ended presentation preference value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<PrefValue>),
}

/// A positioned, sized rectangular object on the pad.
///
/// Invariants: `size` components are non-negative after ingestion (negative
/// inputs are sign-corrected), and `id` is assigned once at document load and
/// never reassigned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PadObject {
    /// Runtime identity; never serialized, regenerated on import.
    #[serde(skip)]
    pub id: Uuid,
    /// Selection flag; never serialized.
    #[serde(skip)]
    pub selected: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    pub size: Size,
    pub location: Location,
    #[serde(rename = "pref", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub prefs: BTreeMap<String, PrefValue>,
}

impl PadObject {
    pub fn new(kind: ObjectKind, location: Location, size: Size) -> Self {
        Self {
            id: Uuid::nil(),
            selected: false,
            label: None,
            kind,
            size,
            location,
            prefs: BTreeMap::new(),
        }
    }

    /// The rectangle this object occupies.
    pub fn rect(&self) -> Rect {
        Rect::new(self.location.x, self.location.y, self.size.w, self.size.h)
    }

    /// Sign-correct the size components. Called once at ingestion.
    pub fn normalize(&mut self) {
        self.size.w = self.size.w.abs();
        self.size.h = self.size.h.abs();
    }
}

/// The flat exchange format: a name, a version tag, and the ordered object
/// records. Serialization of [`PadObject`] already strips runtime fields.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub name: String,
    pub version: String,
    pub body: Vec<PadObject>,
}
