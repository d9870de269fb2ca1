//! The proportional transforms applied to a selection while dragging.
//!
//! Resizing rescales each selected object's size and position by its
//! fractional share of the selection rect, per axis, rather than by a fixed
//! delta. The "old rect" baseline is the selection rect as it stands when the
//! frame is applied; callers recompute it from the objects every frame so the
//! math never compounds a stale rect. An object whose start fraction is
//! exactly zero keeps its coordinate, pinned to the anchored edge instead of
//! drifting on fraction noise.

use crate::geometry::{Point, Rect};
use crate::select::Handle;
use crate::types::PadObject;

/// One axis of a resize: the rect's new length on that axis, plus the raw
/// delta the rect origin moved by (non-zero only for left/top edges).
#[derive(Clone, Copy, Debug)]
struct AxisOp {
    new_len: f32,
    shift: f32,
}

fn x_op(handle: Handle, old: Rect, pointer: Point) -> Option<AxisOp> {
    match handle {
        Handle::Right | Handle::TopRight | Handle::BottomRight => Some(AxisOp {
            new_len: old.w + (pointer.x - old.right()),
            shift: 0.0,
        }),
        Handle::Left | Handle::TopLeft | Handle::BottomLeft => {
            let delta = pointer.x - old.x;
            Some(AxisOp {
                new_len: old.w - delta,
                shift: delta,
            })
        }
        Handle::Top | Handle::Bottom => None,
    }
}

fn y_op(handle: Handle, old: Rect, pointer: Point) -> Option<AxisOp> {
    match handle {
        Handle::Bottom | Handle::BottomLeft | Handle::BottomRight => Some(AxisOp {
            new_len: old.h + (pointer.y - old.bottom()),
            shift: 0.0,
        }),
        Handle::Top | Handle::TopLeft | Handle::TopRight => {
            let delta = pointer.y - old.y;
            Some(AxisOp {
                new_len: old.h - delta,
                shift: delta,
            })
        }
        Handle::Left | Handle::Right => None,
    }
}

fn scale_x(obj: &mut PadObject, old: Rect, op: AxisOp) {
    // Zero-width baseline would divide to non-finite fractions; pass the
    // size through and only translate.
    if old.w != 0.0 {
        let frac_w = obj.size.w / old.w;
        let frac_start = (obj.location.x - old.x) / old.w;
        obj.size.w = op.new_len * frac_w;
        if frac_start != 0.0 {
            obj.location.x = op.new_len * frac_start + old.x;
        }
    }
    obj.location.x += op.shift;
}

fn scale_y(obj: &mut PadObject, old: Rect, op: AxisOp) {
    if old.h != 0.0 {
        let frac_h = obj.size.h / old.h;
        let frac_start = (obj.location.y - old.y) / old.h;
        obj.size.h = op.new_len * frac_h;
        if frac_start != 0.0 {
            obj.location.y = op.new_len * frac_start + old.y;
        }
    }
    obj.location.y += op.shift;
}

/// Resize every object in `objects` proportionally, given the pre-frame
/// selection rect `old_rect`, the dragged `handle`, and the current pointer.
///
/// The edge opposite the handle stays anchored: the delta on each affected
/// axis is measured between the pointer and the dragged edge, and corner
/// handles adjust their two edges independently.
pub fn apply_resize<'a, I>(objects: I, old_rect: Rect, handle: Handle, pointer: Point)
where
    I: IntoIterator<Item = &'a mut PadObject>,
{
    let x = x_op(handle, old_rect, pointer);
    let y = y_op(handle, old_rect, pointer);

    for obj in objects {
        if let Some(op) = x {
            scale_x(obj, old_rect, op);
        }
        if let Some(op) = y {
            scale_y(obj, old_rect, op);
        }
    }
}

/// Move every object by the pointer's travel since the press.
///
/// Each object keeps its offset from the current selection rect's origin; the
/// rect itself lands at the press-time rect translated by the pointer delta.
pub fn apply_move<'a, I>(
    objects: I,
    current_rect: Rect,
    press_rect: Rect,
    press_pointer: Point,
    pointer: Point,
) where
    I: IntoIterator<Item = &'a mut PadObject>,
{
    let new_x = press_rect.x + (pointer.x - press_pointer.x);
    let new_y = press_rect.y + (pointer.y - press_pointer.y);

    for obj in objects {
        let off_x = obj.location.x - current_rect.x;
        let off_y = obj.location.y - current_rect.y;
        obj.location.x = new_x + off_x;
        obj.location.y = new_y + off_y;
    }
}
