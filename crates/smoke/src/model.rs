//! Request payloads and response entities for the EvHub REST API
//!
//! Request types carry exactly the writable fields; response types add the
//! server-assigned id and read-only bookkeeping fields (`created_at`,
//! `updated_at`, soft-delete flags). Timestamps are RFC 3339 on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contact form submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Acknowledgement returned for a successful contact submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub message: String,
}

/// Writable fields of an event. Price is a decimal string on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub eventdatetime: DateTime<Utc>,
    pub address: String,
    pub price: String,
}

/// An event as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub eventdatetime: DateTime<Utc>,
    pub address: String,
    pub price: String,
    #[serde(default)]
    pub cancelled: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Count of non-cancelled registrations, computed server-side.
    #[serde(default)]
    pub registrations_count: u64,
}

/// Writable fields of a registration. `event` references an event id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewRegistration {
    pub date_registered: DateTime<Utc>,
    pub email: String,
    pub event: i64,
}

/// A registration as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub id: i64,
    pub date_registered: DateTime<Utc>,
    #[serde(default)]
    pub cancelled: bool,
    pub email: String,
    pub event: Option<i64>,
    #[serde(default)]
    pub event_title: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Writable fields of a subscriber. Email is unique among subscribers that
/// have not opted out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewSubscriber {
    pub name: String,
    pub email: String,
}

/// A subscriber as returned by the API. Deletion is a soft opt-out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub opted_out: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
