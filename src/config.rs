//! Configuration surface consumed by the engine.

use crate::constants::{
    DEFAULT_BACKGROUND, DEFAULT_CHORD_WINDOW_MS, DEFAULT_HANDLE_SIZE, DEFAULT_MOVE_THROTTLE_MS,
};
use crate::select::HandleShape;
use serde::{Deserialize, Serialize};

/// Host-tunable knobs. Everything has a sensible default; hosts typically
/// override `handle_shape` and `handle_size` from attributes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PadConfig {
    /// Side of the square hit box around each resize handle, in pixels.
    pub handle_size: f32,
    /// Handle layout shape: edge midpoints (`plus`) or corners (`cross`).
    pub handle_shape: HandleShape,
    /// Trailing time window for chord matching, in milliseconds.
    pub chord_window_ms: u64,
    /// Minimum interval between handled pointer moves, in milliseconds.
    pub move_throttle_ms: u64,
    /// Background preference handed through to the renderer.
    pub background: String,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            handle_size: DEFAULT_HANDLE_SIZE,
            handle_shape: HandleShape::Plus,
            chord_window_ms: DEFAULT_CHORD_WINDOW_MS,
            move_throttle_ms: DEFAULT_MOVE_THROTTLE_MS,
            background: DEFAULT_BACKGROUND.to_string(),
        }
    }
}
