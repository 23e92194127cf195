use std::{error::Error, path::PathBuf};

use clap::Parser;
use simple_logger::SimpleLogger;

use flight_profit::{run, Sources};

const ABOUT: &'static str = r#"Writes a text report (`flight_details.txt` by default) with, for every flight:
* the UK and overseas airports and the aircraft type
* the distance flown
* the total revenue and the total running cost
* the resulting profit or loss
Flights whose airport or aircraft is unknown are skipped.
"#;

#[derive(Parser, Debug)]
#[command(author, version, about = ABOUT)]
struct Cli {
    /// The airports, with one `distance<UK airport>` column per UK airport
    #[arg(long, default_value = "airports.csv")]
    airports: PathBuf,
    /// The aircraft types, with seats and running costs
    #[arg(long, default_value = "aeroplanes.csv")]
    aircraft: PathBuf,
    /// The scheduled flights and their bookings
    #[arg(long, default_value = "valid_flight_data.csv")]
    flights: PathBuf,
    /// Where the report is written to. Any existing file is replaced.
    #[arg(short, long, default_value = "flight_details.txt")]
    output: PathBuf,
    /// The field delimiter of the input files
    #[arg(short, long, default_value_t = ',', value_parser = parse_delimiter)]
    delimiter: char,
    /// Log the computation of every flight
    #[arg(short, long)]
    verbose: bool,
}

fn parse_delimiter(arg: &str) -> Result<char, String> {
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c),
        _ => Err(format!("expected a single ASCII character, got {arg:?}")),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    SimpleLogger::new()
        .with_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init()?;

    let sources = Sources {
        airports: cli.airports,
        aircraft: cli.aircraft,
        flights: cli.flights,
        delimiter: cli.delimiter as u8,
    };

    match run(&sources, &cli.output) {
        Ok(_) => {
            log::info!("Flight profit report generated: {}", cli.output.display());
            Ok(())
        }
        Err(e) => {
            log::error!("Error generating report: {e}");
            Err(e)
        }
    }
}
