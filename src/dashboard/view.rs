//! Dashboard view-models
//!
//! Plain data produced by the controller and consumed by whatever renders
//! it (the Leptos front-end or the preview CLI). Class names are part of
//! the stylesheet contract.

use serde::Serialize;

use crate::config::DisplayConfig;
use crate::fixtures::{Booking, Reservation, Status};
use crate::format;

use super::business::BusinessType;

/// Route of the confirmation page
pub const CONFIRM_PATH: &str = "/confirm";

/// Classes applied to every booking card
pub const CARD_CLASS: &str = "booking-card border p-3 mb-2 bg-white shadow-sm";

/// Classes applied to the empty-list placeholder
pub const EMPTY_CLASS: &str = "text-muted small";

/// Text of the empty-list placeholder
pub const EMPTY_MESSAGE: &str = "No bookings found for selected filters.";

/// Label of the catch-all secondary filter option
pub const ALL_OPTION_LABEL: &str = "All staff / zones";

/// Link to the confirmation page for an identifier
pub fn confirm_href(id: u32) -> String {
    format!("{}?id={}", CONFIRM_PATH, id)
}

/// One row of the active dataset, projected into display lines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub id: u32,
    pub primary: String,
    pub secondary: String,
    pub price: String,
    pub status: Status,
    pub meta: String,
}

impl ListItem {
    pub fn from_booking(booking: &Booking, display: &DisplayConfig) -> Self {
        Self {
            id: booking.id,
            primary: format!("{} · {}", booking.time, booking.service),
            secondary: format!("{} · {}", booking.client, booking.staff),
            price: format::money(booking.price, &display.currency),
            status: booking.status.clone(),
            meta: booking.source.clone(),
        }
    }

    pub fn from_reservation(reservation: &Reservation) -> Self {
        Self {
            id: reservation.id,
            primary: format!("{} · Table for {}", reservation.time, reservation.guests),
            secondary: format!("{} · {}", reservation.client, reservation.area),
            price: format::guests(reservation.guests as u64),
            status: reservation.status.clone(),
            meta: "Source: Phone".to_string(),
        }
    }

    /// Text the free-text query is matched against
    pub fn search_text(&self) -> String {
        format!("{} {}", self.primary, self.secondary)
    }
}

/// Status badge: display text and style classes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusBadge {
    pub label: String,
    pub class: &'static str,
}

impl From<&Status> for StatusBadge {
    fn from(status: &Status) -> Self {
        Self {
            label: status.label().to_string(),
            class: status.badge_class(),
        }
    }
}

/// A rendered booking card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingCard {
    pub id: u32,
    pub primary: String,
    pub secondary: String,
    pub price: String,
    pub badge: StatusBadge,
    pub meta: String,
    pub href: String,
}

impl From<&ListItem> for BookingCard {
    fn from(item: &ListItem) -> Self {
        Self {
            id: item.id,
            primary: item.primary.clone(),
            secondary: item.secondary.clone(),
            price: item.price.clone(),
            badge: StatusBadge::from(&item.status),
            meta: item.meta.clone(),
            href: confirm_href(item.id),
        }
    }
}

/// The booking list: cards, or a single placeholder when nothing matches
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListView {
    Cards { cards: Vec<BookingCard> },
    Empty { message: &'static str },
}

impl ListView {
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a ListItem>) -> Self {
        let cards: Vec<BookingCard> = items.into_iter().map(BookingCard::from).collect();
        if cards.is_empty() {
            ListView::Empty {
                message: EMPTY_MESSAGE,
            }
        } else {
            ListView::Cards { cards }
        }
    }

    /// Cards shown, empty for the placeholder
    pub fn cards(&self) -> &[BookingCard] {
        match self {
            ListView::Cards { cards } => cards,
            ListView::Empty { .. } => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ListView::Empty { .. })
    }
}

/// Summary counters above the list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    /// Caption of the metric
    pub label: &'static str,
    /// Revenue for barbershops, guest total for restaurants
    pub metric: String,
}

/// A business type tab
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabView {
    pub business: BusinessType,
    pub label: &'static str,
    pub active: bool,
}

/// An option of the staff/zone select
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    /// The catch-all option with an empty value
    pub fn all() -> Self {
        Self {
            value: String::new(),
            label: ALL_OPTION_LABEL.to_string(),
        }
    }

    pub fn named(name: &str) -> Self {
        Self {
            value: name.to_string(),
            label: name.to_string(),
        }
    }
}

/// Everything the dashboard page shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub business: BusinessType,
    pub title: &'static str,
    pub tabs: Vec<TabView>,
    pub options: Vec<SelectOption>,
    pub summary: Summary,
    pub list: ListView,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::DemoStore;

    #[test]
    fn test_booking_projection() {
        let store = DemoStore::builtin();
        let item = ListItem::from_booking(&store.bookings()[1], &DisplayConfig::default());

        assert_eq!(item.primary, "10:00 · Haircut + beard");
        assert_eq!(item.secondary, "Timur · Madina");
        assert_eq!(item.price, "100\u{a0}000 UZS");
        assert_eq!(item.meta, "Web");
    }

    #[test]
    fn test_reservation_projection() {
        let store = DemoStore::builtin();
        let item = ListItem::from_reservation(&store.reservations()[0]);

        assert_eq!(item.primary, "18:30 · Table for 3");
        assert_eq!(item.secondary, "Sardor · Main hall");
        assert_eq!(item.price, "3 guests");
        assert_eq!(item.meta, "Source: Phone");
    }

    #[test]
    fn test_card_carries_link_and_badge() {
        let store = DemoStore::builtin();
        let item = ListItem::from_booking(&store.bookings()[2], &DisplayConfig::default());
        let card = BookingCard::from(&item);

        assert_eq!(card.href, "/confirm?id=3");
        assert_eq!(card.badge.label, "No-show");
        assert_eq!(card.badge.class, "status-badge status-noshow");
    }

    #[test]
    fn test_unknown_status_badge() {
        let mut item = ListItem::from_reservation(&DemoStore::builtin().reservations()[0]);
        item.status = Status::from("waitlisted");

        let badge = BookingCard::from(&item).badge;
        assert_eq!(badge.label, "waitlisted");
        assert_eq!(badge.class, "status-badge status-pending");
    }

    #[test]
    fn test_empty_list_placeholder() {
        let list = ListView::from_items(Vec::<&ListItem>::new());
        assert!(list.is_empty());
        assert!(list.cards().is_empty());
        assert_eq!(
            list,
            ListView::Empty {
                message: "No bookings found for selected filters."
            }
        );
    }
}
