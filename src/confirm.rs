//! Booking Confirmation
//!
//! Renders the confirmation page for the identifier in the page's query
//! string. Bookings are searched first, then reservations; an unknown
//! identifier gets a generic confirmation without details.

use serde::Serialize;

use crate::config::DisplayConfig;
use crate::fixtures::{Booking, DemoStore, Lookup, Reservation};
use crate::format;

/// Identifier used when the query string has none
pub const DEFAULT_ID: i64 = 1;

const BOOKING_TITLE: &str = "Booking confirmed";
const BOOKING_SUBTITLE: &str = "Your visit is booked. The team is waiting for you.";
const TABLE_TITLE: &str = "Table reserved";
const TABLE_SUBTITLE: &str = "Your table is booked. The restaurant is waiting for you.";
const NOT_FOUND_NOTE: &str = "We could not find booking details, but your booking is confirmed.";

/// Read the `id` parameter from a query string such as `?id=2&ref=list`.
///
/// Parses like `parseInt`: leading whitespace and sign, then digits, with
/// anything after the digits ignored. Falls back to [`DEFAULT_ID`] when the
/// parameter is missing, empty or has no leading number. A number too large
/// for `i64` saturates, so it still misses every record.
pub fn parse_id(query: &str) -> i64 {
    let query = query.strip_prefix('?').unwrap_or(query);

    let raw = url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value);

    match raw {
        Some(value) if !value.is_empty() => leading_integer(&value).unwrap_or(DEFAULT_ID),
        _ => DEFAULT_ID,
    }
}

fn leading_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };

    let digits = &rest[..rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len())];
    if digits.is_empty() {
        return None;
    }

    // only overflow can fail here
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}

/// Which detail view is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationKind {
    Booking,
    Reservation,
    NotFound,
}

/// A `label: value` line of the details block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

fn row(label: &'static str, value: impl Into<String>) -> DetailRow {
    DetailRow {
        label,
        value: value.into(),
    }
}

/// The rendered confirmation page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfirmationView {
    pub id: i64,
    pub kind: ConfirmationKind,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub details: Vec<DetailRow>,
    /// Shown instead of details when nothing was found
    pub note: Option<&'static str>,
}

impl ConfirmationView {
    fn booking(id: i64, booking: &Booking, display: &DisplayConfig) -> Self {
        Self {
            id,
            kind: ConfirmationKind::Booking,
            title: BOOKING_TITLE,
            subtitle: BOOKING_SUBTITLE,
            details: vec![
                row("Business", display.barbershop_name.as_str()),
                row("Client", booking.client.as_str()),
                row("Service", booking.service.as_str()),
                row("Master", booking.staff.as_str()),
                row("Time", format!("Today · {}", booking.time)),
                row("Price", format::money(booking.price, &display.currency)),
            ],
            note: None,
        }
    }

    fn reservation(id: i64, reservation: &Reservation, display: &DisplayConfig) -> Self {
        Self {
            id,
            kind: ConfirmationKind::Reservation,
            title: TABLE_TITLE,
            subtitle: TABLE_SUBTITLE,
            details: vec![
                row("Restaurant", display.restaurant_name.as_str()),
                row("Guest name", reservation.client.as_str()),
                row("Guests", reservation.guests.to_string()),
                row("Date & time", format!("Today · {}", reservation.time)),
                row("Area", reservation.area.as_str()),
            ],
            note: None,
        }
    }

    fn not_found(id: i64) -> Self {
        Self {
            id,
            kind: ConfirmationKind::NotFound,
            title: BOOKING_TITLE,
            subtitle: BOOKING_SUBTITLE,
            details: Vec::new(),
            note: Some(NOT_FOUND_NOTE),
        }
    }
}

/// Build the confirmation view for an identifier
pub fn render(store: &DemoStore, display: &DisplayConfig, id: i64) -> ConfirmationView {
    let lookup = u32::try_from(id)
        .map(|id| store.lookup(id))
        .unwrap_or(Lookup::NotFound);

    match lookup {
        Lookup::Booking(booking) => ConfirmationView::booking(id, booking, display),
        Lookup::Reservation(reservation) => ConfirmationView::reservation(id, reservation, display),
        Lookup::NotFound => {
            tracing::debug!(id, "no booking or reservation for id, showing generic confirmation");
            ConfirmationView::not_found(id)
        }
    }
}

/// Parse the query string and build the view
pub fn render_query(store: &DemoStore, display: &DisplayConfig, query: &str) -> ConfirmationView {
    render(store, display, parse_id(query))
}
