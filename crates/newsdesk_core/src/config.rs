//! Construction-time options for the search aggregator.
//!
//! # Responsibility
//! - Fix the behaviour of a search subscription before the first preference
//!   snapshot arrives.
//!
//! # Invariants
//! - Options are chosen once at construction; nothing is read from the
//!   environment or from files here.

/// What a search subscription uses as preference state before the store
/// has emitted anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PreferenceSeed {
    /// Produce no result until the store emits its first snapshot.
    #[default]
    AwaitFirstSnapshot,
    /// Treat the user as having saved, viewed and followed nothing until the
    /// first snapshot arrives.
    EmptySnapshot,
}

/// Search aggregator options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub preference_seed: PreferenceSeed,
}

impl SearchConfig {
    /// Config that seeds subscriptions with the empty snapshot.
    pub fn with_empty_seed() -> Self {
        Self {
            preference_seed: PreferenceSeed::EmptySnapshot,
        }
    }
}
