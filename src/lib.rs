//! # E-Book
//!
//! Booking demo for small businesses (barbershops and restaurants). The
//! crate holds everything the pages show as plain data so it can be tested
//! without a browser; the Leptos front-end in `ebook-ui` renders it.
//!
//! ## Modules
//!
//! - [`fixtures`]: Hardcoded sample bookings and reservations
//! - [`dashboard`]: Business switching, filtering and booking cards
//! - [`profile`]: Profile form persisted in key-value storage
//! - [`confirm`]: Confirmation page for a booking identifier
//! - [`demo`]: Chips, slot picker and fake-submit widgets
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use ebook::{DashboardController, Filters};
//!
//! let dashboard = DashboardController::default();
//! let view = dashboard.render(&Filters::new().query("beard"));
//!
//! assert_eq!(view.title, "Barbershop");
//! assert_eq!(view.list.cards().len(), 2);
//! ```

pub mod config;
pub mod confirm;
pub mod dashboard;
pub mod demo;
pub mod fixtures;
pub mod format;
pub mod profile;

pub use config::{generate_default_config, Config, ConfigError, DisplayConfig, LoggingConfig};

pub use fixtures::{Booking, DemoStore, Lookup, Reservation, Status};

pub use dashboard::{
    BookingCard, BusinessType, DashboardController, DashboardView, Filters, ListView,
};

pub use profile::{
    FileStorage, KeyValueStorage, MemoryStorage, ProfileError, ProfileForm, ProfileRecord,
    ProfileResult, ProfileStore, SaveFeedback,
};

pub use confirm::{ConfirmationKind, ConfirmationView};
