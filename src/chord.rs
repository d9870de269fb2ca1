//! Chorded keyboard shortcut matching.
//!
//! A chord is a set of distinct keys whose presses land within a shared
//! trailing time window. Rules are registered with a required key set and a
//! modifier pattern; on every press all rules are evaluated against the ring
//! of recent presses, so one press may fire several rules.
//!
//! The matcher runs independently off the raw keyboard stream; it does not
//! know about the pointer machine or the document. Bindings that need to
//! mutate the document forward a [`ChordAction`] to the host's sink, which
//! applies it through the engine context.

use crate::constants::{CHORD_RING_MAX, CHORD_RING_RETAIN, DEFAULT_CHORD_WINDOW_MS};
use std::collections::{BTreeSet, VecDeque};
use std::time::{Duration, Instant};
use tracing::debug;

/// The 4-flag modifier snapshot carried by every raw event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyModifiers {
    pub const NONE: KeyModifiers = KeyModifiers {
        alt: false,
        ctrl: false,
        meta: false,
        shift: false,
    };
}

/// Requirement on a single modifier flag: a literal value, or a wildcard that
/// inherits whatever the most recent press carried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagRule {
    Is(bool),
    Any,
}

impl Default for FlagRule {
    fn default() -> Self {
        FlagRule::Is(false)
    }
}

impl From<bool> for FlagRule {
    fn from(v: bool) -> Self {
        FlagRule::Is(v)
    }
}

impl FlagRule {
    fn resolve(self, pressed: bool) -> bool {
        match self {
            FlagRule::Is(v) => v,
            FlagRule::Any => pressed,
        }
    }
}

/// Per-flag modifier requirement for a rule. Unset flags default to
/// "must not be held".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModifierPattern {
    pub alt: FlagRule,
    pub ctrl: FlagRule,
    pub meta: FlagRule,
    pub shift: FlagRule,
}

impl ModifierPattern {
    pub fn alt(mut self, rule: impl Into<FlagRule>) -> Self {
        self.alt = rule.into();
        self
    }

    pub fn ctrl(mut self, rule: impl Into<FlagRule>) -> Self {
        self.ctrl = rule.into();
        self
    }

    pub fn meta(mut self, rule: impl Into<FlagRule>) -> Self {
        self.meta = rule.into();
        self
    }

    pub fn shift(mut self, rule: impl Into<FlagRule>) -> Self {
        self.shift = rule.into();
        self
    }

    /// Resolve wildcards against the pressed state, then require exact
    /// equality. Wildcard flags always pass; literal flags must match.
    fn matches(&self, pressed: KeyModifiers) -> bool {
        let resolved = KeyModifiers {
            alt: self.alt.resolve(pressed.alt),
            ctrl: self.ctrl.resolve(pressed.ctrl),
            meta: self.meta.resolve(pressed.meta),
            shift: self.shift.resolve(pressed.shift),
        };
        resolved == pressed
    }
}

struct KeyPress {
    key: String,
    mods: KeyModifiers,
    at: Instant,
}

struct ChordRule {
    /// Lowercased, deduplicated key names.
    keys: BTreeSet<String>,
    pattern: ModifierPattern,
    callback: Box<dyn FnMut(KeyModifiers)>,
}

/// Matches registered key chords against a capped ring of recent presses.
pub struct ChordMatcher {
    rules: Vec<ChordRule>,
    entries: VecDeque<KeyPress>,
    window: Duration,
}

impl ChordMatcher {
    pub fn new() -> Self {
        Self::with_window(Duration::from_millis(DEFAULT_CHORD_WINDOW_MS))
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            rules: Vec::new(),
            entries: VecDeque::new(),
            window,
        }
    }

    /// Register a rule. `keys` are matched case-insensitively and
    /// order-independently; `callback` receives the modifier snapshot of the
    /// press that completed the chord.
    pub fn bind<F>(&mut self, keys: &[&str], pattern: ModifierPattern, callback: F) -> &mut Self
    where
        F: FnMut(KeyModifiers) + 'static,
    {
        self.rules.push(ChordRule {
            keys: keys.iter().map(|k| k.to_lowercase()).collect(),
            pattern,
            callback: Box::new(callback),
        });
        self
    }

    /// Record a key press stamped now and run matching.
    pub fn press(&mut self, key: &str, mods: KeyModifiers) {
        self.press_at(key, mods, Instant::now());
    }

    /// Record a key press with an explicit timestamp and run matching.
    ///
    /// The ring is trimmed purely to bound memory; at sane input rates a trim
    /// never discards an entry that is still inside the matching window.
    pub fn press_at(&mut self, key: &str, mods: KeyModifiers, at: Instant) {
        self.entries.push_back(KeyPress {
            key: key.to_string(),
            mods,
            at,
        });

        if self.entries.len() > CHORD_RING_MAX {
            let drop = self.entries.len() - CHORD_RING_RETAIN;
            self.entries.drain(..drop);
        }

        self.run_match(at);
    }

    fn run_match(&mut self, now: Instant) {
        let Some(last) = self.entries.back() else { return };
        let pressed = last.mods;
        let cutoff = now.checked_sub(self.window);

        for rule in &mut self.rules {
            if !rule.pattern.matches(pressed) {
                continue;
            }

            let in_window: Vec<&KeyPress> = self
                .entries
                .iter()
                .filter(|e| cutoff.is_none_or(|c| e.at >= c))
                .collect();

            if in_window.len() < rule.keys.len() {
                continue;
            }
            let recent = &in_window[in_window.len() - rule.keys.len()..];

            let chord: BTreeSet<String> = recent.iter().map(|e| e.key.to_lowercase()).collect();
            if chord != rule.keys {
                continue;
            }

            debug!(keys = ?rule.keys, "chord matched");
            (rule.callback)(pressed);
        }
    }
}

impl Default for ChordMatcher {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Standard bindings
// ============================================================================

/// A document operation requested by one of the standard chord bindings.
/// Applied through `Pad::apply_action`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChordAction {
    /// Translate the selection by a pixel delta.
    Nudge { dx: f32, dy: f32 },
    /// Raise selected objects in paint order; `to_front` jumps all the way.
    BringForward { to_front: bool },
    /// Lower selected objects in paint order; `to_back` jumps all the way.
    SendBackward { to_back: bool },
    /// Center the selection horizontally on the object under the pointer,
    /// falling back to the surface center.
    CenterX,
    /// As `CenterX`, vertically.
    CenterY,
    /// Delete every selected object.
    DeleteSelection,
}

/// Install the stock editing chords on `matcher`, forwarding the resulting
/// actions into `sink`.
///
/// Arrow keys nudge (shift doubles the step), meta+arrows reorder (shift goes
/// all the way), alt+x / alt+y center on an axis, and backspace or delete
/// removes the selection.
pub fn standard_bindings<S>(matcher: &mut ChordMatcher, sink: S)
where
    S: FnMut(ChordAction) + Clone + 'static,
{
    use crate::constants::{NUDGE_STEP, NUDGE_STEP_FAST};

    let nudge = |dx: f32, dy: f32, mut sink: S| {
        move |mods: KeyModifiers| {
            let step = if mods.shift { NUDGE_STEP_FAST } else { NUDGE_STEP };
            sink(ChordAction::Nudge {
                dx: dx * step,
                dy: dy * step,
            });
        }
    };

    let any_shift = ModifierPattern::default().shift(FlagRule::Any);
    matcher.bind(&["arrowLeft"], any_shift, nudge(-1.0, 0.0, sink.clone()));
    matcher.bind(&["arrowRight"], any_shift, nudge(1.0, 0.0, sink.clone()));
    matcher.bind(&["arrowUp"], any_shift, nudge(0.0, -1.0, sink.clone()));
    matcher.bind(&["arrowDown"], any_shift, nudge(0.0, 1.0, sink.clone()));

    let meta_any_shift = ModifierPattern::default().meta(true).shift(FlagRule::Any);
    let mut up_sink = sink.clone();
    matcher.bind(&["arrowUp"], meta_any_shift, move |mods| {
        up_sink(ChordAction::BringForward { to_front: mods.shift });
    });
    let mut down_sink = sink.clone();
    matcher.bind(&["arrowDown"], meta_any_shift, move |mods| {
        down_sink(ChordAction::SendBackward { to_back: mods.shift });
    });

    let alt = ModifierPattern::default().alt(true);
    let mut x_sink = sink.clone();
    matcher.bind(&["x"], alt, move |_| x_sink(ChordAction::CenterX));
    let mut y_sink = sink.clone();
    matcher.bind(&["y"], alt, move |_| y_sink(ChordAction::CenterY));

    let mut bs_sink = sink.clone();
    matcher.bind(&["backspace"], ModifierPattern::default(), move |_| {
        bs_sink(ChordAction::DeleteSelection)
    });
    let mut del_sink = sink;
    matcher.bind(&["delete"], ModifierPattern::default(), move |_| {
        del_sink(ChordAction::DeleteSelection)
    });
}
