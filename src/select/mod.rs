//! Selection geometry engine: handle layouts, handle hit testing, and the
//! proportional transform applied while a handle (or the selection body) is
//! dragged.

mod handles;
mod resize;

pub use handles::{DragTarget, Handle, HandleLayout, HandleShape};
pub use resize::{apply_move, apply_resize};
