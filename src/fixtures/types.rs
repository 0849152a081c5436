//! Fixture record types
//!
//! Barbershop bookings and restaurant reservations as they appear in the
//! demo data, plus the shared booking status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Booking status as stored in the fixtures.
///
/// Stored as a plain string (`confirmed`, `pending`, `cancelled`, `noshow`).
/// Anything else is kept verbatim in [`Status::Other`] so it can still be
/// shown with its own label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Confirmed,
    Pending,
    Cancelled,
    NoShow,
    Other(String),
}

impl Status {
    /// Wire value of this status
    pub fn as_str(&self) -> &str {
        match self {
            Status::Confirmed => "confirmed",
            Status::Pending => "pending",
            Status::Cancelled => "cancelled",
            Status::NoShow => "noshow",
            Status::Other(s) => s,
        }
    }

    /// Human readable label. Unknown statuses keep their literal text.
    pub fn label(&self) -> &str {
        match self {
            Status::Confirmed => "Confirmed",
            Status::Pending => "Pending",
            Status::Cancelled => "Cancelled",
            Status::NoShow => "No-show",
            Status::Other(s) => s,
        }
    }

    /// Badge classes. Unknown statuses are styled as pending.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Status::Confirmed => "status-badge status-confirmed",
            Status::Pending | Status::Other(_) => "status-badge status-pending",
            Status::Cancelled => "status-badge status-cancelled",
            Status::NoShow => "status-badge status-noshow",
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Status::Cancelled)
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s {
            "confirmed" => Status::Confirmed,
            "pending" => Status::Pending,
            "cancelled" => Status::Cancelled,
            "noshow" => Status::NoShow,
            other => Status::Other(other.to_string()),
        }
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        Status::from(s.as_str())
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A barbershop booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: u32,
    /// Time of day label, e.g. `09:30`
    pub time: String,
    pub client: String,
    pub service: String,
    pub staff: String,
    /// Price in the smallest currency unit
    pub price: u64,
    pub status: Status,
    /// Channel the booking came in through
    pub source: String,
}

impl Booking {
    pub fn new(
        id: u32,
        time: impl Into<String>,
        client: impl Into<String>,
        service: impl Into<String>,
        staff: impl Into<String>,
        price: u64,
    ) -> Self {
        Self {
            id,
            time: time.into(),
            client: client.into(),
            service: service.into(),
            staff: staff.into(),
            price,
            status: Status::Pending,
            source: String::new(),
        }
    }

    /// Builder: set the status
    pub fn status(mut self, status: impl Into<Status>) -> Self {
        self.status = status.into();
        self
    }

    /// Builder: set the source channel
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

/// A restaurant table reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: u32,
    pub time: String,
    pub client: String,
    pub guests: u32,
    /// Dining area, e.g. `Main hall`
    pub area: String,
    pub status: Status,
}

impl Reservation {
    pub fn new(
        id: u32,
        time: impl Into<String>,
        client: impl Into<String>,
        guests: u32,
        area: impl Into<String>,
    ) -> Self {
        Self {
            id,
            time: time.into(),
            client: client.into(),
            guests,
            area: area.into(),
            status: Status::Pending,
        }
    }

    /// Builder: set the status
    pub fn status(mut self, status: impl Into<Status>) -> Self {
        self.status = status.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_wire() {
        assert_eq!(Status::from("confirmed"), Status::Confirmed);
        assert_eq!(Status::from("noshow"), Status::NoShow);
        assert_eq!(
            Status::from("rescheduled"),
            Status::Other("rescheduled".to_string())
        );
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::NoShow.label(), "No-show");
        assert_eq!(Status::Cancelled.label(), "Cancelled");
        assert_eq!(Status::from("rescheduled").label(), "rescheduled");
    }

    #[test]
    fn test_unknown_status_styled_as_pending() {
        let status = Status::from("rescheduled");
        assert_eq!(status.badge_class(), Status::Pending.badge_class());
        assert_eq!(status.badge_class(), "status-badge status-pending");
        assert_eq!(Status::NoShow.badge_class(), "status-badge status-noshow");
    }

    #[test]
    fn test_status_serializes_as_string() {
        let booking = Booking::new(7, "12:00", "Bek", "Shave", "Aziz", 50000)
            .status("noshow")
            .source("Web");
        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["status"], "noshow");

        let restored: Booking = serde_json::from_value(json).unwrap();
        assert_eq!(restored.status, Status::NoShow);
        assert_eq!(restored.source, "Web");
    }
}
