//! Bookings Dashboard
//!
//! View-model side of the dashboard page:
//!
//! - **business**: Barbershop / restaurant selection
//! - **filter**: Query, staff/zone and date filters
//! - **view**: Cards, badges, summary and option view-models
//! - **controller**: Page controller holding the active business type
//!
//! # Example
//!
//! ```rust
//! use ebook::dashboard::{BusinessType, DashboardController, Filters};
//!
//! let mut dashboard = DashboardController::default();
//! dashboard.select(BusinessType::Restaurant);
//!
//! let view = dashboard.render(&Filters::new().secondary("VIP room"));
//! assert_eq!(view.summary.metric, "11 guests");
//! assert_eq!(view.list.cards().len(), 1);
//! ```

pub mod business;
pub mod controller;
pub mod filter;
pub mod view;

pub use business::{BusinessType, ParseBusinessError};
pub use controller::DashboardController;
pub use filter::Filters;
pub use view::{
    confirm_href, BookingCard, DashboardView, ListItem, ListView, SelectOption, StatusBadge,
    Summary, TabView,
};
