//! Event identifier assignment.
//!
//! The catalog asks an [`IdGenerator`] for a fresh id on every create.
//! Generators only propose ids; the catalog checks each proposal against
//! the ids it already holds and asks again on a clash.

use eventmap_types::EventId;
use uuid::Uuid;

use crate::config::IdStrategy;

/// Proposes identifiers for newly created events.
pub trait IdGenerator: Send + Sync {
    /// Propose an id for the next event. `catalog_len` is the number of
    /// events currently held. Successive calls must not repeat a proposal.
    fn next_event_id(&mut self, catalog_len: usize) -> EventId;
}

/// Proposes `event-<n>` where `n` is one past the catalog size, or one
/// past the last proposal when that is larger.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialIdGenerator {
    last: usize,
}

impl SequentialIdGenerator {
    /// Create a generator that starts from the catalog size.
    pub const fn new() -> Self {
        Self { last: 0 }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_event_id(&mut self, catalog_len: usize) -> EventId {
        let next = catalog_len.max(self.last).saturating_add(1);
        self.last = next;
        EventId::new(format!("event-{next}"))
    }
}

/// Proposes `event-<uuid v7>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_event_id(&mut self, _catalog_len: usize) -> EventId {
        EventId::new(format!("event-{}", Uuid::now_v7()))
    }
}

/// Build the generator selected in configuration.
pub fn from_strategy(strategy: IdStrategy) -> Box<dyn IdGenerator> {
    match strategy {
        IdStrategy::Sequential => Box::new(SequentialIdGenerator::new()),
        IdStrategy::Uuid => Box::new(UuidIdGenerator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_follows_catalog_size() {
        let mut ids = SequentialIdGenerator::new();
        assert_eq!(ids.next_event_id(5).as_str(), "event-6");
        assert_eq!(ids.next_event_id(6).as_str(), "event-7");
    }

    #[test]
    fn sequential_never_repeats_for_same_size() {
        let mut ids = SequentialIdGenerator::new();
        let first = ids.next_event_id(5);
        let second = ids.next_event_id(5);
        assert_ne!(first, second);
        assert_eq!(second.as_str(), "event-7");
    }

    #[test]
    fn uuid_ids_are_prefixed_and_distinct() {
        let mut ids = UuidIdGenerator;
        let a = ids.next_event_id(0);
        let b = ids.next_event_id(0);
        assert!(a.as_str().starts_with("event-"));
        assert_ne!(a, b);
    }

    #[test]
    fn strategy_selects_generator() {
        let mut ids = from_strategy(IdStrategy::Sequential);
        assert_eq!(ids.next_event_id(0).as_str(), "event-1");
    }
}
