#![forbid(unsafe_code)]
use std::{error::Error, path::PathBuf};

mod aircraft;
mod airports;
pub mod csv;
mod flights;
mod profit;
pub mod report;
pub mod serde;

pub use aircraft::*;
pub use airports::*;
pub use crate::csv::{LoadError, DEFAULT_DELIMITER};
pub use flights::*;
pub use profit::*;
pub use report::{remove_report, write_report, Renderer};

/// Where the airports, aircraft and flights are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
    pub airports: PathBuf,
    pub aircraft: PathBuf,
    pub flights: PathBuf,
    /// the field delimiter of all three files
    pub delimiter: u8,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            airports: "airports.csv".into(),
            aircraft: "aeroplanes.csv".into(),
            flights: "valid_flight_data.csv".into(),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// The three tables, loaded once and read-only afterwards
#[derive(Debug, Clone)]
pub struct Dataset {
    pub airports: Airports,
    pub fleet: Fleet,
    pub flights: Vec<Flight>,
}

impl Dataset {
    /// Loads all three tables from `sources`.
    /// # Error
    /// Errors if any of the files cannot be read
    pub fn load(sources: &Sources) -> Result<Self, LoadError> {
        Ok(Self {
            airports: load_airports(&sources.airports, sources.delimiter)?,
            fleet: load_fleet(&sources.aircraft, sources.delimiter)?,
            flights: load_flights(&sources.flights, sources.delimiter)?,
        })
    }

    pub fn resolve_distance(&self, uk: &str, overseas: &str) -> Option<i64> {
        resolve_distance(&self.airports, uk, overseas)
    }

    pub fn resolve_aircraft(&self, type_: &str) -> Option<&Aircraft> {
        resolve_aircraft(&self.fleet, type_)
    }

    /// The [`Profit`] of every flight, in input order; `None` for flights that were skipped.
    pub fn profits(&self) -> impl Iterator<Item = Option<Profit<'_>>> {
        self.flights
            .iter()
            .map(|flight| compute_profit(flight, &self.airports, &self.fleet))
    }
}

/// Outcome of a [`run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// number of flights read
    pub flights: usize,
    /// number of flights in the report
    pub reported: usize,
}

impl Summary {
    pub fn skipped(&self) -> usize {
        self.flights - self.reported
    }
}

/// Loads `sources`, computes the profit of every flight and writes the report to `output`.
/// Any previous report is removed before loading, so a failed load leaves no report behind.
pub fn run(sources: &Sources, output: &std::path::Path) -> Result<Summary, Box<dyn Error>> {
    remove_report(output)?;
    let dataset = Dataset::load(sources)?;

    let results = dataset.profits().collect::<Vec<_>>();
    let summary = Summary {
        flights: results.len(),
        reported: results.iter().flatten().count(),
    };

    let report = Renderer::new()?.document(results)?;
    write_report(output, &report)?;

    log::info!(
        "{} flights, {} reported, {} skipped",
        summary.flights,
        summary.reported,
        summary.skipped()
    );
    Ok(summary)
}
