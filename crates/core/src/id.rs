//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a ledger movement.
///
/// Seeded movements carry short legacy ids (`mov-01`), so the identifier is kept
/// as an opaque string. Fresh ids are `mov-` followed by a UUIDv7, which stays
/// unique across rapid sequential calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovementId(String);

impl MovementId {
    pub const PREFIX: &'static str = "mov-";

    /// Generate a new time-ordered identifier.
    pub fn new() -> Self {
        Self(format!("{}{}", Self::PREFIX, Uuid::now_v7().simple()))
    }

    /// Wrap an existing identifier verbatim (seed data, tests).
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for MovementId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
