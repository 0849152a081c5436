//! E-Book Demo
//!
//! Booking demo for barbershops and restaurants built with Leptos (WASM).
//!
//! # Features
//!
//! - Bookings dashboard with business switching, search and staff/zone filter
//! - Confirmation page for a booking or reservation
//! - Profile form saved in the browser's local storage
//! - Small interactivity demo (chips, slots, fake submit)
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Every view is computed by the `ebook` crate as plain data;
//! the components here only render it and wire up events.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;
mod storage;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
