//! Customer summary record and its parts.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use selfcare_core::MovementId;

/// Maximum number of movements kept on the summary, newest first.
pub const MAX_RECENT_MOVEMENTS: usize = 12;

/// Administrative status of a customer line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStatus {
    Active,
    Inactive,
    Suspended,
}

/// A mobile line owned by the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerLine {
    pub id: String,
    pub msisdn: String,
    pub status: LineStatus,
    pub plan_name: String,
}

/// One balance-affecting transaction. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentMovement {
    pub id: MovementId,
    pub title: String,
    /// Always positive; direction is implied by the title.
    pub amount: i64,
    pub created_at: DateTime<FixedOffset>,
}

/// Everything the portal shows about the customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub customer_name: String,
    pub plan_name: String,
    /// Informational; never deducted automatically.
    pub plan_price: i64,
    pub balance: i64,
    pub data_used_gb: f64,
    pub data_limit_gb: f64,
    pub lines: Vec<CustomerLine>,
    /// Newest first, at most [`MAX_RECENT_MOVEMENTS`] entries.
    pub recent_movements: Vec<RecentMovement>,
}

impl CustomerSummary {
    /// Prepend a movement and drop whatever falls past the cap.
    pub(crate) fn record_movement(&mut self, movement: RecentMovement) {
        self.recent_movements.insert(0, movement);
        self.recent_movements.truncate(MAX_RECENT_MOVEMENTS);
    }

    pub fn latest_movement(&self) -> Option<&RecentMovement> {
        self.recent_movements.first()
    }
}
