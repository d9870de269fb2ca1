//! Object identifier generation behind a substitutable interface.
//!
//! Ids are assigned once at document load (or external insertion) and never
//! reassigned. Production uses random v4 UUIDs; tests substitute a sequential
//! generator for stable ids.

use uuid::Uuid;

/// Source of unique object identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> Uuid;
}

/// Random v4 UUIDs. The default generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic sequential ids, for tests and reproducible fixtures.
#[derive(Clone, Copy, Debug)]
pub struct SequentialIdGenerator {
    next: u128,
}

impl SequentialIdGenerator {
    /// Starts at 1 so that no generated id collides with `Uuid::nil()`.
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> Uuid {
        let id = Uuid::from_u128(self.next);
        self.next += 1;
        id
    }
}
