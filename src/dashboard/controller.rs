//! Dashboard controller
//!
//! Owns the only mutable piece of dashboard state, the active business
//! type. Filter values are handed in on every render and never cached.

use crate::config::DisplayConfig;
use crate::fixtures::DemoStore;
use crate::format;

use super::business::BusinessType;
use super::filter::Filters;
use super::view::{DashboardView, ListItem, ListView, SelectOption, Summary, TabView};

/// Page controller for the bookings dashboard
#[derive(Debug, Clone)]
pub struct DashboardController {
    store: DemoStore,
    display: DisplayConfig,
    active: BusinessType,
}

impl DashboardController {
    /// Create a controller with barbershop selected
    pub fn new(store: DemoStore, display: DisplayConfig) -> Self {
        Self {
            store,
            display,
            active: BusinessType::default(),
        }
    }

    pub fn active(&self) -> BusinessType {
        self.active
    }

    pub fn store(&self) -> &DemoStore {
        &self.store
    }

    /// Switch the active dataset
    pub fn select(&mut self, business: BusinessType) {
        if self.active != business {
            tracing::debug!(from = %self.active, to = %business, "switching business type");
        }
        self.active = business;
    }

    /// Tabs with the active one flagged
    pub fn tabs(&self) -> Vec<TabView> {
        BusinessType::ALL
            .iter()
            .map(|&business| TabView {
                business,
                label: business.title(),
                active: business == self.active,
            })
            .collect()
    }

    /// Options of the staff/zone select, catch-all first
    pub fn secondary_options(&self) -> Vec<SelectOption> {
        let names: Vec<&str> = match self.active {
            BusinessType::Barbershop => self.store.staff().iter().map(String::as_str).collect(),
            BusinessType::Restaurant => self.store.areas(),
        };

        std::iter::once(SelectOption::all())
            .chain(names.into_iter().map(SelectOption::named))
            .collect()
    }

    /// Summary counters for the active dataset
    pub fn summary(&self) -> Summary {
        match self.active {
            BusinessType::Barbershop => {
                let bookings = self.store.bookings();
                let revenue: u64 = bookings
                    .iter()
                    .filter(|b| !b.status.is_cancelled())
                    .map(|b| b.price)
                    .sum();
                Summary {
                    count: bookings.len(),
                    label: "Revenue today",
                    metric: format::money(revenue, &self.display.currency),
                }
            }
            BusinessType::Restaurant => {
                let reservations = self.store.reservations();
                let guests: u64 = reservations.iter().map(|r| r.guests as u64).sum();
                Summary {
                    count: reservations.len(),
                    label: "Guests today",
                    metric: format::guests(guests),
                }
            }
        }
    }

    /// Active dataset projected into list items
    pub fn items(&self) -> Vec<ListItem> {
        match self.active {
            BusinessType::Barbershop => self
                .store
                .bookings()
                .iter()
                .map(|b| ListItem::from_booking(b, &self.display))
                .collect(),
            BusinessType::Restaurant => self
                .store
                .reservations()
                .iter()
                .map(ListItem::from_reservation)
                .collect(),
        }
    }

    /// Filtered booking list
    pub fn list(&self, filters: &Filters) -> ListView {
        let items = self.items();
        let visible = filters.apply(&items);
        tracing::debug!(
            business = %self.active,
            total = items.len(),
            shown = visible.len(),
            "rendering booking list"
        );
        ListView::from_items(visible)
    }

    /// Full page view for the current state and filters
    pub fn render(&self, filters: &Filters) -> DashboardView {
        DashboardView {
            business: self.active,
            title: self.active.title(),
            tabs: self.tabs(),
            options: self.secondary_options(),
            summary: self.summary(),
            list: self.list(filters),
        }
    }
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new(DemoStore::builtin(), DisplayConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{Booking, Reservation};

    fn card_ids(view: &ListView) -> Vec<u32> {
        view.cards().iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_starts_on_barbershop() {
        let controller = DashboardController::default();
        let view = controller.render(&Filters::new());

        assert_eq!(view.business, BusinessType::Barbershop);
        assert_eq!(view.title, "Barbershop");
        assert!(view.tabs[0].active);
        assert!(!view.tabs[1].active);
        assert_eq!(card_ids(&view.list), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_barbershop_summary_counts_no_show() {
        let controller = DashboardController::default();
        let summary = controller.summary();

        assert_eq!(summary.count, 4);
        // 80000 + 100000 + 60000 + 80000, nothing cancelled in the fixture
        assert_eq!(summary.metric, "320\u{a0}000 UZS");
    }

    #[test]
    fn test_revenue_excludes_only_cancelled() {
        let store = DemoStore::new(
            vec!["Aziz".into()],
            vec![
                Booking::new(1, "09:00", "A", "Cut", "Aziz", 80000).status("confirmed"),
                Booking::new(2, "10:00", "B", "Cut", "Aziz", 100000).status("cancelled"),
                Booking::new(3, "11:00", "C", "Cut", "Aziz", 60000).status("noshow"),
                Booking::new(4, "12:00", "D", "Cut", "Aziz", 5000).status("mystery"),
            ],
            vec![],
        );
        let controller = DashboardController::new(store, DisplayConfig::default());
        let summary = controller.summary();

        assert_eq!(summary.count, 4);
        assert_eq!(summary.metric, "145\u{a0}000 UZS");
    }

    #[test]
    fn test_restaurant_summary_sums_all_guests() {
        let mut controller = DashboardController::default();
        controller.select(BusinessType::Restaurant);
        let summary = controller.summary();

        assert_eq!(summary.count, 3);
        assert_eq!(summary.label, "Guests today");
        assert_eq!(summary.metric, "11 guests");
    }

    #[test]
    fn test_restaurant_guests_ignore_status() {
        let store = DemoStore::new(
            vec![],
            vec![],
            vec![
                Reservation::new(10, "18:00", "A", 4, "Hall").status("cancelled"),
                Reservation::new(11, "19:00", "B", 2, "Hall").status("pending"),
            ],
        );
        let mut controller = DashboardController::new(store, DisplayConfig::default());
        controller.select(BusinessType::Restaurant);
        assert_eq!(controller.summary().metric, "6 guests");
    }

    #[test]
    fn test_secondary_options_follow_business() {
        let mut controller = DashboardController::default();
        let labels = |c: &DashboardController| -> Vec<String> {
            c.secondary_options().into_iter().map(|o| o.label).collect()
        };

        assert_eq!(
            labels(&controller),
            vec!["All staff / zones", "Aziz", "Madina", "Otabek"]
        );
        assert_eq!(controller.secondary_options()[0].value, "");

        controller.select(BusinessType::Restaurant);
        assert_eq!(
            labels(&controller),
            vec!["All staff / zones", "Main hall", "VIP room"]
        );
    }

    #[test]
    fn test_switching_applies_same_filters_to_new_dataset() {
        let mut controller = DashboardController::default();
        let filters = Filters::new().query("o");

        assert_eq!(card_ids(&controller.list(&filters)), vec![3]);

        controller.select(BusinessType::Restaurant);
        let view = controller.render(&filters);
        assert_eq!(view.title, "Restaurant");
        assert!(view.tabs[1].active);
        assert_eq!(card_ids(&view.list), vec![10, 11, 12]);
    }

    #[test]
    fn test_zone_filter() {
        let mut controller = DashboardController::default();
        controller.select(BusinessType::Restaurant);

        let view = controller.list(&Filters::new().secondary("Main hall"));
        assert_eq!(card_ids(&view), vec![10, 12]);
    }

    #[test]
    fn test_no_match_renders_placeholder() {
        let controller = DashboardController::default();
        let view = controller.list(&Filters::new().query("pizza"));
        assert!(view.is_empty());
    }
}
