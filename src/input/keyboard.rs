//! Raw keyboard event entry points.
//!
//! The engine only tracks the modifier snapshot from key traffic; chord
//! matching runs independently in the host-owned [`crate::chord::ChordMatcher`],
//! which is fed the same raw stream.

use crate::chord::KeyModifiers;
use crate::pad::Pad;
use tracing::trace;

impl Pad {
    /// Record a key press. Updates the modifier snapshot used by the pointer
    /// machine; the key itself is left to the chord matcher.
    pub fn key_down(&mut self, key: &str, mods: KeyModifiers) {
        self.tick_reset();
        trace!(key, "key down");
        self.modifiers = mods;
    }

    /// Record a key release.
    pub fn key_up(&mut self, key: &str, mods: KeyModifiers) {
        self.tick_reset();
        trace!(key, "key up");
        self.modifiers = mods;
    }
}
