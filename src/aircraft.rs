use std::{collections::HashMap, path::Path};

use serde::Deserialize;

use crate::{csv::LoadError, Class};

/// A map of the aircraft type (e.g. `A380`) to an [`Aircraft`].
pub type Fleet = HashMap<String, Aircraft>;

/// In-memory representation of an aircraft type and its economics
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Aircraft {
    /// the type (e.g. `A380`)
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(
        rename = "economyseats",
        default,
        deserialize_with = "crate::serde::lenient_int"
    )]
    pub economy_seats: i64,
    #[serde(
        rename = "businessseats",
        default,
        deserialize_with = "crate::serde::lenient_int"
    )]
    pub business_seats: i64,
    #[serde(
        rename = "firstclassseats",
        default,
        deserialize_with = "crate::serde::lenient_int"
    )]
    pub first_class_seats: i64,
    /// the running cost of one seat over 100 km, in £
    #[serde(
        rename = "runningcostperseatper100km",
        default,
        deserialize_with = "crate::serde::currency"
    )]
    pub running_cost_per_seat_per_100km: f64,
}

impl Aircraft {
    /// Number of seats of `class`
    pub fn seats(&self, class: Class) -> i64 {
        match class {
            Class::Economy => self.economy_seats,
            Class::Business => self.business_seats,
            Class::First => self.first_class_seats,
        }
    }

    /// Number of seats across all classes
    pub fn total_seats(&self) -> i64 {
        Class::ALL
            .iter()
            .map(|class| self.seats(*class))
            .fold(0, i64::saturating_add)
    }
}

/// Loads aircraft from `path` into memory as a map `type: Aircraft`.
/// # Error
/// Errors if the file cannot be read
pub fn load_fleet(path: &Path, delimiter: u8) -> Result<Fleet, LoadError> {
    let aircraft = super::csv::read::<Aircraft>(path, delimiter)?;
    Ok(super::csv::index(aircraft, |a: &Aircraft| a.type_.clone()))
}

/// Returns the [`Aircraft`] of type `type_`, if known.
pub fn resolve_aircraft<'a>(fleet: &'a Fleet, type_: &str) -> Option<&'a Aircraft> {
    fleet.get(type_)
}
