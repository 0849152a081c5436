//! Demo Fixtures
//!
//! The hardcoded sample data that stands in for a real booking backend:
//!
//! - **types**: Booking, Reservation and Status
//! - **store**: The read-only store with lookup by identifier
//!
//! Nothing here is ever written at runtime. A lookup miss is an ordinary
//! outcome, not an error.

pub mod store;
pub mod types;

pub use store::{DemoStore, Lookup};
pub use types::{Booking, Reservation, Status};
