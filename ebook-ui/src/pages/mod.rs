//! Pages
//!
//! Top-level page components for each route.

pub mod confirm;
pub mod dashboard;
pub mod demo;
pub mod profile;

pub use confirm::Confirm;
pub use dashboard::Dashboard;
pub use demo::Demo;
pub use profile::Profile;
