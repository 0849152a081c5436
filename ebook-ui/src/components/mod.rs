//! UI Components
//!
//! Reusable Leptos components for the demo pages.

pub mod booking_card;
pub mod nav;
pub mod summary_card;
pub mod toast;

pub use booking_card::{Badge, BookingCardView};
pub use nav::Nav;
pub use summary_card::SummaryCard;
pub use toast::Toast;
