//! Booking list filters

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::view::ListItem;

/// Filter values as entered on the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    /// Free-text query, matched case-insensitively
    #[serde(default)]
    pub query: String,
    /// Staff name or zone; empty means all
    #[serde(default)]
    pub secondary: String,
    /// Selected day. Informational only, never narrows the list.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the free-text query
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Builder: set the staff/zone filter
    pub fn secondary(mut self, secondary: impl Into<String>) -> Self {
        self.secondary = secondary.into();
        self
    }

    /// Builder: set the date
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Check whether an item passes every active filter
    pub fn matches(&self, item: &ListItem) -> bool {
        if !self.query.is_empty() {
            let needle = self.query.to_lowercase();
            if !item.search_text().to_lowercase().contains(&needle) {
                return false;
            }
        }

        if !self.secondary.is_empty() && !item.secondary.contains(&self.secondary) {
            return false;
        }

        true
    }

    /// Items passing the filters, in their original order
    pub fn apply<'a>(&self, items: &'a [ListItem]) -> Vec<&'a ListItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crate::fixtures::DemoStore;

    fn barber_items() -> Vec<ListItem> {
        let display = DisplayConfig::default();
        DemoStore::builtin()
            .bookings()
            .iter()
            .map(|b| ListItem::from_booking(b, &display))
            .collect()
    }

    fn ids(items: &[&ListItem]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_empty_filters_return_everything() {
        let items = barber_items();
        assert_eq!(ids(&Filters::new().apply(&items)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let items = barber_items();
        assert_eq!(ids(&Filters::new().query("MALE HAIR").apply(&items)), vec![1, 4]);
        assert_eq!(ids(&Filters::new().query("timur").apply(&items)), vec![2]);
    }

    #[test]
    fn test_query_spans_primary_and_secondary() {
        let items = barber_items();
        // "Beard trim" ends the primary line, "Ali" starts the secondary one
        assert_eq!(ids(&Filters::new().query("trim ali").apply(&items)), vec![3]);
    }

    #[test]
    fn test_query_is_exact_subsequence() {
        let items = barber_items();
        for query in ["", "a", "aziz", "09:", "·", "beard", "zzz"] {
            let filters = Filters::new().query(query);
            let expected: Vec<u32> = items
                .iter()
                .filter(|i| {
                    format!("{} {}", i.primary, i.secondary)
                        .to_lowercase()
                        .contains(&query.to_lowercase())
                })
                .map(|i| i.id)
                .collect();
            assert_eq!(ids(&filters.apply(&items)), expected, "query {:?}", query);
        }
    }

    #[test]
    fn test_secondary_filter() {
        let items = barber_items();
        assert_eq!(ids(&Filters::new().secondary("Aziz").apply(&items)), vec![1, 4]);
        // Case-sensitive substring
        assert!(Filters::new().secondary("aziz").apply(&items).is_empty());
    }

    #[test]
    fn test_filters_combine() {
        let items = barber_items();
        let filters = Filters::new().query("walk").secondary("Aziz");
        assert_eq!(ids(&filters.apply(&items)), vec![4]);
    }

    #[test]
    fn test_date_does_not_filter() {
        let items = barber_items();
        let date = NaiveDate::from_ymd_opt(1999, 1, 1).unwrap();
        assert_eq!(ids(&Filters::new().date(date).apply(&items)), vec![1, 2, 3, 4]);
    }
}
