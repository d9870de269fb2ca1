//! Engine-wide constants.
//!
//! Centralizes magic numbers and default values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Handles
// ============================================================================

/// Side of the square hit box around each resize handle, in pixels
pub const DEFAULT_HANDLE_SIZE: f32 = 12.0;

// ============================================================================
// Chord Matching
// ============================================================================

/// Trailing time window for a key chord, in milliseconds
pub const DEFAULT_CHORD_WINDOW_MS: u64 = 240;

/// Ring size at which old key-press records are trimmed
pub const CHORD_RING_MAX: usize = 15;

/// Number of most-recent key-press records kept after a trim
pub const CHORD_RING_RETAIN: usize = 8;

// ============================================================================
// Input Handling
// ============================================================================

/// Minimum interval between handled pointer moves, in milliseconds
pub const DEFAULT_MOVE_THROTTLE_MS: u64 = 50;

/// Distance a selection moves per arrow-key nudge, in pixels
pub const NUDGE_STEP: f32 = 1.0;

/// Nudge distance with the shift accelerator held
pub const NUDGE_STEP_FAST: f32 = 2.0;

// ============================================================================
// Snapshot Format
// ============================================================================

/// Version tag written into exported snapshots
pub const SNAPSHOT_VERSION: &str = "2.0.1";

/// Default background preference for a fresh pad
pub const DEFAULT_BACKGROUND: &str = "#adadad";
