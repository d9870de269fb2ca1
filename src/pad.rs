//! The owned engine context.
//!
//! `Pad` ties the pieces together: the document, the interaction state, the
//! pointer/modifier snapshot, configuration, paint handlers, and the outbox
//! of semantic events. Everything is mutated synchronously within a single
//! entry-point call; there is no parallelism inside the engine.
//!
//! Raw-event entry points live in the [`crate::input`] module's `impl Pad`
//! blocks; this file holds construction, document lifecycle, painting, and
//! chord-action application.

use crate::chord::{ChordAction, KeyModifiers};
use crate::config::PadConfig;
use crate::document::Document;
use crate::events::PadEvent;
use crate::geometry::{Point, Size};
use crate::ids::IdGenerator;
use crate::input::{InputState, Throttle};
use crate::paint::{dispatch_paint, PaintHandler};
use crate::select::HandleShape;
use std::time::Duration;
use tracing::{debug, warn};

/// The manipulation engine for one pad surface.
pub struct Pad {
    pub(crate) document: Document,
    pub(crate) config: PadConfig,
    pub(crate) state: InputState,
    /// Set at release/leave, consumed at the start of the next dispatched
    /// event, so a trailing click can still observe "was dragging".
    pub(crate) pending_reset: bool,
    pub(crate) pointer: Option<Point>,
    pub(crate) modifiers: KeyModifiers,
    /// Runtime handle shape; starts from config and follows the meta+shift
    /// toggle during pointer moves.
    pub(crate) handle_shape: HandleShape,
    pub(crate) surface_size: Option<Size>,
    pub(crate) throttle: Throttle,
    handlers: Vec<Box<dyn PaintHandler>>,
    pub(crate) events: Vec<PadEvent>,
    paint_count: u64,
}

impl Pad {
    pub fn new(config: PadConfig) -> Self {
        let throttle = Throttle::new(Duration::from_millis(config.move_throttle_ms));
        Self {
            document: Document::new("unnamed pad"),
            handle_shape: config.handle_shape,
            config,
            state: InputState::default(),
            pending_reset: false,
            pointer: None,
            modifiers: KeyModifiers::NONE,
            surface_size: None,
            throttle,
            handlers: Vec::new(),
            events: Vec::new(),
            paint_count: 0,
        }
    }

    // ========================================================================
    // Document lifecycle
    // ========================================================================

    /// Ingest starting content. Malformed content is reported via
    /// [`PadEvent::DocLoadFailed`] and the engine continues with an empty
    /// document; it never propagates past this boundary.
    pub fn load_document(&mut self, content: &str, ids: &mut dyn IdGenerator) {
        match Document::parse(content, ids) {
            Ok(doc) => {
                self.document = doc;
                self.emit(PadEvent::DocLoaded);
            }
            Err(err) => {
                warn!(%err, "skipping document load");
                self.document = Document::new("unnamed pad");
                self.emit(PadEvent::DocLoadFailed);
            }
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut PadConfig {
        &mut self.config
    }

    /// Last known pointer location, if any move has been observed.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn modifiers(&self) -> KeyModifiers {
        self.modifiers
    }

    pub fn state(&self) -> InputState {
        self.state
    }

    pub fn handle_shape(&self) -> HandleShape {
        self.handle_shape
    }

    /// Record a host surface resize.
    pub fn set_surface_size(&mut self, size: Size) {
        self.surface_size = Some(size);
        self.emit(PadEvent::Resize { size });
        self.emit(PadEvent::PaintRequest);
    }

    pub fn surface_size(&self) -> Option<Size> {
        self.surface_size
    }

    // ========================================================================
    // Events
    // ========================================================================

    pub(crate) fn emit(&mut self, event: PadEvent) {
        self.events.push(event);
    }

    /// Take every event emitted since the last drain, in order.
    pub fn drain_events(&mut self) -> Vec<PadEvent> {
        std::mem::take(&mut self.events)
    }

    /// Consume a pending deferred reset. Called at the start of every
    /// dispatched event except `clicked`, which checks for drag suppression
    /// first.
    pub(crate) fn tick_reset(&mut self) {
        if self.pending_reset {
            self.state.reset();
            self.pending_reset = false;
        }
    }

    // ========================================================================
    // Painting & telemetry
    // ========================================================================

    /// Register a paint handler. Handlers are offered objects in
    /// registration order; the first to claim an object wins.
    pub fn register_paint_handler(&mut self, handler: Box<dyn PaintHandler>) {
        self.handlers.push(handler);
    }

    /// Run one paint pass over the document in paint order.
    pub fn paint(&mut self) {
        for obj in self.document.objects() {
            dispatch_paint(&mut self.handlers, obj);
        }
        self.paint_count += 1;
        self.emit(PadEvent::Paint);
    }

    /// Report and reset interval accounting. The host calls this from its
    /// periodic reporting loop.
    pub fn telemetry_flush(&mut self) {
        let paint_count = self.paint_count;
        self.paint_count = 0;
        let object_count = self.document.object_count();
        self.emit(PadEvent::Telemetry {
            paint_count,
            object_count,
        });
    }

    // ========================================================================
    // Chord actions
    // ========================================================================

    /// Apply a document operation requested by a chord binding. Operations
    /// on an empty selection are no-ops.
    pub fn apply_action(&mut self, action: ChordAction) {
        debug!(?action, "applying chord action");
        match action {
            ChordAction::Nudge { dx, dy } => {
                self.document.move_selection(|r| {
                    r.x += dx;
                    r.y += dy;
                });
            }
            ChordAction::BringForward { to_front } => {
                let total = self.document.object_count();
                let mut selected = self.document.selected_ids();
                selected.reverse();
                for id in selected {
                    let Some(order) = self.document.object_order(id) else { continue };
                    if to_front {
                        self.document.change_order(order, total.saturating_sub(1));
                    } else if order + 1 < total {
                        self.document.change_order(order, order + 1);
                    }
                }
            }
            ChordAction::SendBackward { to_back } => {
                let mut selected = self.document.selected_ids();
                selected.reverse();
                for id in selected {
                    let Some(order) = self.document.object_order(id) else { continue };
                    if to_back {
                        self.document.change_order(order, 0);
                    } else if order > 0 {
                        self.document.change_order(order, order - 1);
                    }
                }
            }
            ChordAction::CenterX => {
                let center = self.axis_center(|p| p.x, |s| s.w);
                self.document.move_selection(|r| r.x = center - r.w / 2.0);
            }
            ChordAction::CenterY => {
                let center = self.axis_center(|p| p.y, |s| s.h);
                self.document.move_selection(|r| r.y = center - r.h / 2.0);
            }
            ChordAction::DeleteSelection => {
                if self.document.delete_selected() > 0 {
                    self.emit(PadEvent::SelectionChanged(Vec::new()));
                }
            }
        }
        self.emit(PadEvent::PaintRequest);
    }

    /// Centering target on one axis: the center of the object under the
    /// pointer when there is one, otherwise the surface center.
    fn axis_center(
        &self,
        coord: impl Fn(Point) -> f32,
        extent: impl Fn(Size) -> f32,
    ) -> f32 {
        let surface_center = self
            .surface_size
            .map(|s| extent(s) / 2.0)
            .unwrap_or_default();

        let Some(pointer) = self.pointer else {
            return surface_center;
        };
        match self.document.objects_at_point(pointer).first() {
            Some(&id) => {
                let Some(obj) = self.document.object(id) else {
                    return surface_center;
                };
                coord(obj.location.point()) + extent(obj.size) / 2.0
            }
            None => surface_center,
        }
    }
}

impl Default for Pad {
    fn default() -> Self {
        Self::new(PadConfig::default())
    }
}
