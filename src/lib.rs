//! wirepad - the manipulation engine behind an interactive 2D canvas editor.
//!
//! Given a set of positioned, sized rectangular objects, this crate lets a
//! pointer select one or more of them, drag them, resize them proportionally
//! from eight handle positions, and trigger actions via chorded keyboard
//! shortcuts with modifier-key semantics.
//!
//! ## Architecture
//!
//! - [`document`] - the canonical object list with selection flags
//! - [`select`] - handle layout, hit testing, and the proportional resize math
//! - [`chord`] - sliding-window matching of multi-key chords
//! - [`input`] - the pointer interaction state machine
//! - [`pad`] - the owned engine context tying the pieces together
//!
//! The hosting UI lifecycle, per-object rendering, and the periodic telemetry
//! loop live outside this crate. The host feeds raw pointer/keyboard events
//! into a [`pad::Pad`] and drains semantic [`events::PadEvent`]s back out.

pub mod chord;
pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod events;
pub mod geometry;
pub mod ids;
pub mod input;
pub mod pad;
pub mod paint;
pub mod select;
pub mod types;

pub use config::PadConfig;
pub use document::Document;
pub use error::{PadError, PadResult};
pub use events::PadEvent;
pub use pad::Pad;
