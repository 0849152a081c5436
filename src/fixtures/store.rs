//! Demo data store
//!
//! Fixed in-memory collections with linear lookups. The collections hold a
//! handful of entries each, so no index is kept.

use serde::Serialize;

use super::types::{Booking, Reservation};

/// Result of looking an identifier up across both collections
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "snake_case")]
pub enum Lookup<'a> {
    Booking(&'a Booking),
    Reservation(&'a Reservation),
    NotFound,
}

/// Read-only store of demo bookings and reservations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoStore {
    staff: Vec<String>,
    bookings: Vec<Booking>,
    reservations: Vec<Reservation>,
}

impl DemoStore {
    /// Build a store from arbitrary collections
    pub fn new(staff: Vec<String>, bookings: Vec<Booking>, reservations: Vec<Reservation>) -> Self {
        Self {
            staff,
            bookings,
            reservations,
        }
    }

    /// The built-in demo dataset
    pub fn builtin() -> Self {
        let staff = ["Aziz", "Madina", "Otabek"]
            .into_iter()
            .map(String::from)
            .collect();

        let bookings = vec![
            Booking::new(1, "09:30", "Jamshid", "Male haircut", "Aziz", 80000)
                .status("confirmed")
                .source("Mobile app"),
            Booking::new(2, "10:00", "Timur", "Haircut + beard", "Madina", 100000)
                .status("pending")
                .source("Web"),
            Booking::new(3, "11:15", "Ali", "Beard trim", "Otabek", 60000)
                .status("noshow")
                .source("Mobile app"),
            Booking::new(4, "13:00", "Walk-in client", "Male haircut", "Aziz", 80000)
                .status("pending")
                .source("Walk-in"),
        ];

        let reservations = vec![
            Reservation::new(10, "18:30", "Sardor", 3, "Main hall").status("confirmed"),
            Reservation::new(11, "19:00", "Gulbahor", 2, "VIP room").status("pending"),
            Reservation::new(12, "20:00", "Olim", 6, "Main hall").status("confirmed"),
        ];

        Self::new(staff, bookings, reservations)
    }

    pub fn staff(&self) -> &[String] {
        &self.staff
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Distinct reservation areas in order of first appearance
    pub fn areas(&self) -> Vec<&str> {
        let mut areas: Vec<&str> = Vec::new();
        for reservation in &self.reservations {
            if !areas.contains(&reservation.area.as_str()) {
                areas.push(&reservation.area);
            }
        }
        areas
    }

    pub fn find_booking(&self, id: u32) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn find_reservation(&self, id: u32) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    /// Look up an identifier in bookings first, then reservations
    pub fn lookup(&self, id: u32) -> Lookup<'_> {
        if let Some(booking) = self.find_booking(id) {
            return Lookup::Booking(booking);
        }
        match self.find_reservation(id) {
            Some(reservation) => Lookup::Reservation(reservation),
            None => Lookup::NotFound,
        }
    }
}

impl Default for DemoStore {
    fn default() -> Self {
        Self::builtin()
    }
}
