//! Raw pointer event entry points.
//!
//! The host forwards pointer events here verbatim; the engine decides what
//! they mean. Moves are throttled, presses capture a grab, releases schedule
//! a deferred reset, and the trailing click either selects or is suppressed
//! because a drag happened.

use crate::chord::KeyModifiers;
use crate::events::PadEvent;
use crate::geometry::Point;
use crate::input::{Grab, PressSnapshot};
use crate::pad::Pad;
use crate::select::{apply_move, apply_resize, DragTarget, HandleLayout, HandleShape};
use std::time::Instant;
use tracing::trace;

const MOVE_TOKEN: &str = "pointer_move";

impl Pad {
    /// Handle a raw pointer move.
    ///
    /// The pointer and modifier snapshots always update; everything else is
    /// throttled, and moves inside the cooldown are dropped outright.
    pub fn pointer_moved(&mut self, position: Point, mods: KeyModifiers) {
        self.pointer_moved_at(position, mods, Instant::now());
    }

    /// Clock-injected variant for tests.
    pub fn pointer_moved_at(&mut self, position: Point, mods: KeyModifiers, now: Instant) {
        self.tick_reset();
        self.pointer = Some(position);
        self.modifiers = mods;

        if !self.throttle.allow_at(MOVE_TOKEN, now) {
            trace!("pointer move dropped by throttle");
            return;
        }

        // A press that has survived until a handled move is a drag.
        self.state.promote_to_drag();

        self.handle_shape = if mods.meta && mods.shift {
            HandleShape::Cross
        } else {
            HandleShape::Plus
        };

        self.emit(PadEvent::MouseMove { position });

        if self.state.is_dragging() {
            if let Some(grab) = self.state.grab() {
                self.drag_frame(grab, position);
            }
        }

        self.emit(PadEvent::PaintRequest);
    }

    /// Apply one drag frame against the selection as it currently stands.
    fn drag_frame(&mut self, grab: Grab, position: Point) {
        let Some(current_rect) = self.document.selection_bounds() else {
            return;
        };

        match grab.target {
            DragTarget::Handle(handle) => {
                apply_resize(self.document.selected_mut(), current_rect, handle, position);
            }
            DragTarget::Move => {
                apply_move(
                    self.document.selected_mut(),
                    current_rect,
                    grab.snapshot.rect,
                    grab.snapshot.pointer,
                    position,
                );
                // Losing the selection mid-drag (pointer escapes the padded
                // bounds) deselects rather than teleporting it on re-entry.
                if let Some(moved) = self.document.selection_bounds() {
                    if !moved.inflated(self.config.handle_size).contains(position) {
                        self.document.clear_selection();
                        self.emit(PadEvent::SelectionChanged(Vec::new()));
                    }
                }
            }
        }
    }

    /// Handle a raw pointer press.
    ///
    /// A press on empty space outside the padded bounds of every selected
    /// object clears the selection immediately. With a live selection, the
    /// press grabs either a handle of the selection rect or the body (a
    /// whole-selection move), snapshotting the rect and pointer for the drag
    /// math.
    pub fn pointer_pressed(&mut self, position: Point, mods: KeyModifiers) {
        self.tick_reset();
        self.pointer = Some(position);
        self.modifiers = mods;

        if self.document.objects_at_point(position).is_empty() {
            let near_selection = self
                .document
                .selected()
                .any(|o| o.rect().inflated(self.config.handle_size).contains(position));
            if !near_selection {
                self.document.clear_selection();
            }
        }

        let Some(rect) = self.document.selection_bounds() else {
            self.state.begin_press(None);
            return;
        };

        let layout = HandleLayout::new(rect, self.handle_shape, self.config.handle_size);
        self.state.begin_press(Some(Grab {
            target: layout.target_at(position),
            snapshot: PressSnapshot {
                pointer: position,
                rect,
            },
        }));
    }

    /// Handle a raw pointer release. The state reset is deferred so the
    /// trailing click can still observe whether a drag happened.
    pub fn pointer_released(&mut self) {
        self.tick_reset();
        self.pending_reset = true;
    }

    /// Handle the pointer leaving the surface; same deferral as a release.
    pub fn pointer_left(&mut self) {
        self.tick_reset();
        self.pending_reset = true;
    }

    /// Handle a raw click.
    ///
    /// A click that trails a drag is suppressed. Otherwise the topmost object
    /// under the pointer is selected (alt picks the bottom-most instead), and
    /// meta toggles it into the existing selection rather than replacing it.
    /// A click on empty space changes nothing; deselection happens at press.
    pub fn clicked(&mut self, position: Point, mods: KeyModifiers) {
        let was_dragging = self.state.is_dragging();
        self.tick_reset();
        if was_dragging {
            trace!("click suppressed after drag");
            return;
        }

        self.pointer = Some(position);
        self.modifiers = mods;
        self.emit(PadEvent::Click { position });

        let hits = self.document.objects_at_point(position);
        let picked = if mods.alt { hits.first() } else { hits.last() };
        if let Some(&id) = picked {
            if mods.meta {
                self.document.toggle_selected(id);
            } else {
                self.document.select_only(id);
            }
            self.emit(PadEvent::SelectionChanged(self.document.selected_ids()));
        }

        self.emit(PadEvent::PaintRequest);
    }
}
