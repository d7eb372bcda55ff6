//! Aggregate trait for domain models mutated through commands.

/// Aggregate execution semantics (pure, deterministic).
///
/// - **Decision logic**: `handle(&self, cmd)` returns the event a command
///   produces or rejects the command.
/// - **State mutation**: `apply(&mut self, event)` evolves state.
///
/// `handle` must not mutate state, so a rejected command always leaves the
/// aggregate exactly as it was. Every accepted command produces exactly one
/// event.
pub trait Aggregate {
    type Command: Clone + core::fmt::Debug;
    type Event: Clone + core::fmt::Debug;
    type Error: core::fmt::Debug;

    /// Evolve in-memory state from a single event.
    fn apply(&mut self, event: &Self::Event);

    /// Decide which event to emit given the current state and a command.
    fn handle(&self, command: &Self::Command) -> Result<Self::Event, Self::Error>;
}
