//! Seed record loaded at process start.

use chrono::{DateTime, FixedOffset};

use selfcare_core::MovementId;

use crate::summary::{CustomerLine, CustomerSummary, LineStatus, RecentMovement};

fn seed_timestamp(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).expect("seed timestamps are valid RFC 3339")
}

fn line(id: &str, msisdn: &str, status: LineStatus, plan_name: &str) -> CustomerLine {
    CustomerLine {
        id: id.to_string(),
        msisdn: msisdn.to_string(),
        status,
        plan_name: plan_name.to_string(),
    }
}

fn movement(id: &str, title: &str, amount: i64, created_at: &str) -> RecentMovement {
    RecentMovement {
        id: MovementId::from_raw(id),
        title: title.to_string(),
        amount,
        created_at: seed_timestamp(created_at),
    }
}

/// The demo customer every fresh process starts with.
pub fn seed_summary() -> CustomerSummary {
    CustomerSummary {
        customer_name: "Luis Herrera".to_string(),
        plan_name: "Prepago Plus".to_string(),
        plan_price: 42_000,
        balance: 50_000,
        data_used_gb: 9.4,
        data_limit_gb: 18.0,
        lines: vec![
            line("line-01", "3001234567", LineStatus::Active, "Prepago Plus"),
            line("line-02", "3019876543", LineStatus::Suspended, "Control 25 GB"),
        ],
        recent_movements: vec![
            movement("mov-01", "Recarga PSE", 30_000, "2026-02-10T10:30:00-05:00"),
            movement("mov-02", "Compra paquete 5GB", 12_000, "2026-02-08T18:15:00-05:00"),
            movement("mov-03", "Renovacion plan Prepago Plus", 42_000, "2026-02-01T08:00:00-05:00"),
        ],
    }
}
