use std::path::Path;

use serde::Deserialize;

use crate::{csv::LoadError, Class};

/// A scheduled flight between a UK and an overseas airport with its bookings
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    #[serde(rename = "UK airport", default)]
    pub uk_airport: String,
    #[serde(rename = "Overseas airport", default)]
    pub overseas_airport: String,
    #[serde(rename = "Type of aircraft", default)]
    pub aircraft_type: String,
    #[serde(
        rename = "Number of economy seats booked",
        default,
        deserialize_with = "crate::serde::lenient_int"
    )]
    pub economy_booked: i64,
    #[serde(
        rename = "Number of business seats booked",
        default,
        deserialize_with = "crate::serde::lenient_int"
    )]
    pub business_booked: i64,
    #[serde(
        rename = "Number of first class seats booked",
        default,
        deserialize_with = "crate::serde::lenient_int"
    )]
    pub first_booked: i64,
    #[serde(
        rename = "Price of a economy class seat",
        default,
        deserialize_with = "crate::serde::lenient_int"
    )]
    pub economy_price: i64,
    #[serde(
        rename = "Price of a business class seat",
        default,
        deserialize_with = "crate::serde::lenient_int"
    )]
    pub business_price: i64,
    #[serde(
        rename = "Price of a first class seat",
        default,
        deserialize_with = "crate::serde::lenient_int"
    )]
    pub first_price: i64,
}

impl Flight {
    /// Number of seats booked in `class`
    pub fn booked(&self, class: Class) -> i64 {
        match class {
            Class::Economy => self.economy_booked,
            Class::Business => self.business_booked,
            Class::First => self.first_booked,
        }
    }

    /// Ticket price of a seat in `class`, in £
    pub fn price(&self, class: Class) -> i64 {
        match class {
            Class::Economy => self.economy_price,
            Class::Business => self.business_price,
            Class::First => self.first_price,
        }
    }
}

/// Loads flights from `path`, in the order they appear.
/// # Error
/// Errors if the file cannot be read
pub fn load_flights(path: &Path, delimiter: u8) -> Result<Vec<Flight>, LoadError> {
    super::csv::read(path, delimiter)
}
