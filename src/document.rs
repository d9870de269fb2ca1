//! The selection/document store.
//!
//! Holds the canonical ordered list of objects (order is paint order and is
//! manipulable) plus their selection flags. Selection is not a separate
//! collection: it is derived by filtering, and the selection bounding rect is
//! recomputed on demand.

use crate::constants::SNAPSHOT_VERSION;
use crate::error::{PadError, PadResult};
use crate::geometry::{bounding_rect, Point, Rect};
use crate::ids::IdGenerator;
use crate::types::{PadObject, Snapshot};
use anyhow::Context as _;
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

/// An ordered document of positioned objects. Identifiers are unique within
/// a document and assigned once at ingestion.
#[derive(Clone, Debug, Default)]
pub struct Document {
    pub name: String,
    objects: Vec<PadObject>,
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
        }
    }

    /// Parse starting content. Objects are normalized (sizes sign-corrected)
    /// and given fresh ids; any selection state in the input is discarded.
    /// Only major version 2 snapshots are accepted.
    pub fn parse(content: &str, ids: &mut dyn IdGenerator) -> PadResult<Self> {
        let snapshot: Snapshot = serde_json::from_str(content.trim())?;
        if !snapshot.version.starts_with("2.") {
            return Err(PadError::UnsupportedVersion(snapshot.version));
        }
        Ok(Self::from_snapshot(snapshot, ids))
    }

    /// Ingest an already-parsed snapshot.
    pub fn from_snapshot(snapshot: Snapshot, ids: &mut dyn IdGenerator) -> Self {
        let mut doc = Self {
            name: snapshot.name,
            objects: snapshot.body,
        };
        for obj in &mut doc.objects {
            obj.id = ids.next_id();
            obj.selected = false;
            obj.normalize();
        }
        debug!(name = %doc.name, objects = doc.objects.len(), "document ingested");
        doc
    }

    /// Export the flat snapshot: name, version tag, and object records with
    /// ids and selection flags stripped (their fields are serde-skipped).
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            name: self.name.clone(),
            version: SNAPSHOT_VERSION.to_string(),
            body: self.objects.clone(),
        }
    }

    pub fn to_json(&self) -> PadResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    /// Write the exported snapshot to a file.
    pub fn save_snapshot(&self, path: &Path) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("writing snapshot to {}", path.display()))?;
        Ok(())
    }

    /// Load a snapshot file.
    pub fn load_snapshot_file(path: &Path, ids: &mut dyn IdGenerator) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading snapshot from {}", path.display()))?;
        let doc = Self::parse(&content, ids)
            .with_context(|| format!("parsing snapshot {}", path.display()))?;
        Ok(doc)
    }

    // ========================================================================
    // Objects
    // ========================================================================

    /// All objects in paint order (first = bottom-most).
    pub fn objects(&self) -> &[PadObject] {
        &self.objects
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn object(&self, id: Uuid) -> Option<&PadObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn object_mut(&mut self, id: Uuid) -> Option<&mut PadObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    /// External insertion: normalize, assign an id, append on top. Returns
    /// the assigned id.
    pub fn add_object(&mut self, mut obj: PadObject, ids: &mut dyn IdGenerator) -> Uuid {
        obj.id = ids.next_id();
        obj.normalize();
        let id = obj.id;
        self.objects.push(obj);
        id
    }

    pub fn delete_object(&mut self, id: Uuid) -> bool {
        let before = self.objects.len();
        self.objects.retain(|o| o.id != id);
        self.objects.len() != before
    }

    /// Delete every selected object; returns how many were removed.
    pub fn delete_selected(&mut self) -> usize {
        let before = self.objects.len();
        self.objects.retain(|o| !o.selected);
        before - self.objects.len()
    }

    /// Paint-order index of an object.
    pub fn object_order(&self, id: Uuid) -> Option<usize> {
        self.objects.iter().position(|o| o.id == id)
    }

    /// Move the object at paint-order index `from` to index `to` (clamped).
    pub fn change_order(&mut self, from: usize, to: usize) {
        if from >= self.objects.len() {
            return;
        }
        let obj = self.objects.remove(from);
        let to = to.min(self.objects.len());
        self.objects.insert(to, obj);
    }

    /// Ids of objects whose rect contains `point`, in paint order
    /// (bottom-most first).
    pub fn objects_at_point(&self, point: Point) -> Vec<Uuid> {
        self.objects
            .iter()
            .filter(|o| o.rect().contains(point))
            .map(|o| o.id)
            .collect()
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn selected(&self) -> impl Iterator<Item = &PadObject> {
        self.objects.iter().filter(|o| o.selected)
    }

    pub fn selected_mut(&mut self) -> impl Iterator<Item = &mut PadObject> {
        self.objects.iter_mut().filter(|o| o.selected)
    }

    pub fn selected_ids(&self) -> Vec<Uuid> {
        self.selected().map(|o| o.id).collect()
    }

    pub fn selection_is_empty(&self) -> bool {
        self.selected().next().is_none()
    }

    /// Bounding rect of the selection; `None` when nothing is selected.
    pub fn selection_bounds(&self) -> Option<Rect> {
        bounding_rect(self.selected().map(|o| o.rect()))
    }

    /// Select exactly `id`, dropping everything else.
    pub fn select_only(&mut self, id: Uuid) {
        for o in &mut self.objects {
            o.selected = o.id == id;
        }
    }

    /// Flip the selection flag of `id`, leaving the rest alone.
    pub fn toggle_selected(&mut self, id: Uuid) {
        if let Some(o) = self.object_mut(id) {
            o.selected = !o.selected;
        }
    }

    /// Select exactly the given ids.
    pub fn select_ids(&mut self, ids: &[Uuid]) {
        for o in &mut self.objects {
            o.selected = ids.contains(&o.id);
        }
    }

    pub fn clear_selection(&mut self) {
        for o in &mut self.objects {
            o.selected = false;
        }
    }

    /// Hand the selection bounding rect to `mover`, then translate every
    /// selected object by however far the mover displaced the rect's origin.
    /// No-op on an empty selection.
    pub fn move_selection(&mut self, mover: impl FnOnce(&mut Rect)) {
        let Some(original) = self.selection_bounds() else {
            return;
        };
        let mut moved = original;
        mover(&mut moved);

        let dx = moved.x - original.x;
        let dy = moved.y - original.y;
        for o in self.selected_mut() {
            o.location.x += dx;
            o.location.y += dy;
        }
    }
}
