use std::{collections::HashMap, path::Path};

use crate::csv::LoadError;

/// Prefix of the columns holding the distance from a UK airport, e.g. `distanceLHR`
pub const DISTANCE_PREFIX: &str = "distance";

/// A map of the overseas airport code (e.g. `JFK`) to an [`Airport`].
pub type Airports = HashMap<String, Airport>;

/// In-memory representation of an overseas airport
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    /// the code (e.g. `JFK`)
    pub code: String,
    /// distance in km from each UK airport code; `None` when the value is not a number
    distances: HashMap<String, Option<i64>>,
}

impl Airport {
    /// Builds an [`Airport`] from a field-named row, collecting every
    /// `distance<UK code>` column. Returns `None` if the row has no `code`.
    pub fn from_record(mut record: HashMap<String, String>) -> Option<Self> {
        let code = record.remove("code")?;
        let distances = record
            .into_iter()
            .filter_map(|(field, value)| {
                let uk = field.strip_prefix(DISTANCE_PREFIX)?;
                let km = crate::serde::parse_int(&value);
                if km.is_none() {
                    log::warn!("{code} - distance from {uk} is not a number: {value:?}");
                }
                Some((uk.to_string(), km))
            })
            .collect();
        Some(Self { code, distances })
    }

    /// Returns the distance in km from the UK airport `uk`, if known.
    pub fn distance_from(&self, uk: &str) -> Option<i64> {
        self.distances.get(uk).copied().flatten()
    }

    /// The UK airports this airport has a distance column for
    pub fn uk_airports(&self) -> impl Iterator<Item = &str> {
        self.distances.keys().map(String::as_str)
    }
}

/// Loads airports from `path` into memory as a map `code: Airport`.
/// # Error
/// Errors if the file cannot be read
pub fn load_airports(path: &Path, delimiter: u8) -> Result<Airports, LoadError> {
    let records = super::csv::read::<HashMap<String, String>>(path, delimiter)?;
    let airports = records.into_iter().filter_map(|record| {
        let airport = Airport::from_record(record);
        if airport.is_none() {
            log::warn!("{} - skipping airport without code", path.display());
        }
        airport
    });
    Ok(super::csv::index(airports, |a: &Airport| a.code.clone()))
}

/// Returns the distance in km between the UK airport `uk` and the overseas airport `overseas`.
/// `None` when `overseas` is unknown or has no numeric distance from `uk`.
pub fn resolve_distance(airports: &Airports, uk: &str, overseas: &str) -> Option<i64> {
    airports.get(overseas)?.distance_from(uk)
}
