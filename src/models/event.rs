use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event as returned by `GET /events/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub location: String,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub organizer: Option<Organizer>,
    #[serde(default)]
    pub ticket_tiers: Vec<TicketTier>,
}

impl EventDetail {
    pub fn tier(&self, tier_id: Uuid) -> Option<&TicketTier> {
        self.ticket_tiers.iter().find(|t| t.id == tier_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organizer {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub contact_email: Option<String>,
}

/// A named ticket category for an event, carrying a unit price and
/// per-ticket service fee.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketTier {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub service_fee: Decimal,
    #[serde(default)]
    pub available_quantity: i32,
}

/// Denormalized event fields captured when the buyer picks a tier.
///
/// Not re-fetched afterwards, so it can go stale if the event changes before
/// payment; authoritative pricing and availability are re-checked server-side
/// at order creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSnapshot {
    pub event_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub location: String,
}

impl EventSnapshot {
    pub fn from_detail(event: &EventDetail) -> Self {
        Self {
            event_id: event.id,
            title: event.title.clone(),
            image_url: event.image_url.clone(),
            starts_at: event.start_time,
            location: event.location.clone(),
        }
    }
}
