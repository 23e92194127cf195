use std::{error::Error, path::Path};

use flight_profit::{run, Dataset, LoadError, Sources};

static AIRPORTS: &str = "code,name,distanceMAN,distanceLHR
JFK,John F Kennedy International,5381,5556
ORD,Chicago O'Hare International,6345,6353
MAD,Madrid-Barajas,1449,unknown
";

static AEROPLANES: &str = "type,runningcostperseatper100km,economyseats,businessseats,firstclassseats
A380,£10,400,50,14
Boeing 737,£5,189,,
Jet,\"£1,200\",0,4,0
";

static FLIGHTS: &str = "UK airport,Overseas airport,Type of aircraft,Number of economy seats booked,Number of business seats booked,Number of first class seats booked,Price of a economy class seat,Price of a business class seat,Price of a first class seat
LHR,JFK,A380,300,40,10,500,2000,5000
LHR,XXX,A380,300,40,10,500,2000,5000
MAN,ORD,Concorde,100,0,0,800,0,0
LHR,MAD,Boeing 737,150,0,0,90,0,0
MAN,MAD,Boeing 737,150,0,0,-90,0,0
";

fn sources(dir: &Path) -> std::io::Result<Sources> {
    std::fs::write(dir.join("airports.csv"), AIRPORTS)?;
    std::fs::write(dir.join("aeroplanes.csv"), AEROPLANES)?;
    std::fs::write(dir.join("valid_flight_data.csv"), FLIGHTS)?;
    Ok(Sources {
        airports: dir.join("airports.csv"),
        aircraft: dir.join("aeroplanes.csv"),
        flights: dir.join("valid_flight_data.csv"),
        ..Default::default()
    })
}

/// Verifies that the report contains exactly the flights whose airport and aircraft are known,
/// in input order.
#[test]
fn report() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let sources = sources(dir.path())?;
    let output = dir.path().join("flight_details.txt");

    let summary = run(&sources, &output)?;
    assert_eq!(summary.flights, 5);
    assert_eq!(summary.reported, 2);
    assert_eq!(summary.skipped(), 3);

    let report = std::fs::read_to_string(&output)?;
    let expected = format!(
        "Flight Details:
UK Airport: LHR
Overseas Airport: JFK
Aircraft Type: A380
Distance: 5556 km
Total Revenue: £280000
Total Cost: £{cost}
Profit or Loss: £{profit}

========================================

Flight Details:
UK Airport: MAN
Overseas Airport: MAD
Aircraft Type: Boeing 737
Distance: 1449 km
Total Revenue: £0
Total Cost: £{cost_737}
Profit or Loss: £{loss_737}

========================================

",
        cost = (5556.0 / 100.0) * 10.0 * 464.0,
        profit = 280000.0 - (5556.0 / 100.0) * 10.0 * 464.0,
        cost_737 = (1449.0 / 100.0) * 5.0 * 189.0,
        loss_737 = 0.0 - (1449.0 / 100.0) * 5.0 * 189.0,
    );
    assert_eq!(report, expected);
    Ok(())
}

#[test]
fn idempotent() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let sources = sources(dir.path())?;
    let output = dir.path().join("flight_details.txt");

    run(&sources, &output)?;
    let first = std::fs::read(&output)?;
    run(&sources, &output)?;
    let second = std::fs::read(&output)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn replaces_previous_report() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let sources = sources(dir.path())?;
    let output = dir.path().join("flight_details.txt");
    std::fs::write(&output, "x".repeat(10_000))?;

    run(&sources, &output)?;

    assert!(!std::fs::read_to_string(&output)?.contains('x'));
    Ok(())
}

#[test]
fn missing_source() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let mut sources = sources(dir.path())?;
    sources.aircraft = dir.path().join("missing.csv");
    let output = dir.path().join("flight_details.txt");
    std::fs::write(&output, "previous report")?;

    assert!(matches!(
        Dataset::load(&sources),
        Err(LoadError::Io { .. })
    ));
    assert!(run(&sources, &output).is_err());
    assert!(!output.exists());
    Ok(())
}

#[test]
fn semicolon_delimited() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let write = |name: &str, data: &str| std::fs::write(dir.path().join(name), data.replace(',', ";"));
    write("airports.csv", "code,distanceLHR\nJFK,5556\n")?;
    write(
        "aeroplanes.csv",
        "type,economyseats,businessseats,firstclassseats,runningcostperseatper100km\nA380,400,50,14,£10\n",
    )?;
    write("valid_flight_data.csv", FLIGHTS)?;
    let sources = Sources {
        airports: dir.path().join("airports.csv"),
        aircraft: dir.path().join("aeroplanes.csv"),
        flights: dir.path().join("valid_flight_data.csv"),
        delimiter: b';',
    };

    let dataset = Dataset::load(&sources)?;
    assert_eq!(dataset.resolve_distance("LHR", "JFK"), Some(5556));
    assert_eq!(dataset.resolve_aircraft("A380").map(|a| a.total_seats()), Some(464));

    let profits = dataset.profits().collect::<Vec<_>>();
    assert_eq!(profits.len(), 5);
    assert!(profits[0].is_some());
    assert!(profits[1..].iter().all(Option::is_none));
    Ok(())
}

/// A flight row without an aircraft type is still counted, and skipped like an unknown aircraft.
#[test]
fn short_row() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let sources = sources(dir.path())?;
    let flights = FLIGHTS.lines().take(2).collect::<Vec<_>>().join("\n");
    std::fs::write(&sources.flights, format!("{flights}\nLHR,JFK\n"))?;
    let output = dir.path().join("flight_details.txt");

    let summary = run(&sources, &output)?;
    assert_eq!(summary.flights, 2);
    assert_eq!(summary.reported, 1);
    assert_eq!(summary.skipped(), 1);
    Ok(())
}
