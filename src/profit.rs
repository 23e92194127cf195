use crate::{aircraft::Fleet, airports::Airports, resolve_aircraft, resolve_distance, Flight};

/// A cabin class of a flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Economy,
    Business,
    First,
}

impl Class {
    pub const ALL: [Class; 3] = [Class::Economy, Class::Business, Class::First];
}

/// The economics of a single flight
#[derive(Debug, Clone, PartialEq)]
pub struct Profit<'a> {
    pub flight: &'a Flight,
    /// distance between the UK and the overseas airport, in km
    pub distance: i64,
    /// in £
    pub total_revenue: f64,
    /// in £
    pub total_cost: f64,
    /// in £; negative for a loss
    pub profit_or_loss: f64,
}

/// Revenue of `flight` in `class`. Negative prices count as zero.
fn class_revenue(flight: &Flight, class: Class) -> i64 {
    flight.booked(class).saturating_mul(flight.price(class).max(0))
}

/// Computes the revenue, cost and profit of `flight`.
/// Returns `None` (and logs a warning) when the route distance or the aircraft is unknown.
pub fn compute_profit<'a>(
    flight: &'a Flight,
    airports: &Airports,
    fleet: &Fleet,
) -> Option<Profit<'a>> {
    let distance = resolve_distance(airports, &flight.uk_airport, &flight.overseas_airport);
    let aircraft = resolve_aircraft(fleet, &flight.aircraft_type);
    let (Some(distance), Some(aircraft)) = (distance, aircraft) else {
        log::warn!(
            "Missing data for flight: {} to {}",
            flight.uk_airport,
            flight.overseas_airport
        );
        return None;
    };

    let total_seats = aircraft.total_seats();
    let total_revenue = Class::ALL
        .iter()
        .map(|class| class_revenue(flight, *class))
        .fold(0i64, i64::saturating_add) as f64;
    let total_cost =
        (distance as f64 / 100.0) * aircraft.running_cost_per_seat_per_100km * total_seats as f64;

    log::debug!(
        "{} to {}: {distance} km, {total_seats} seats, revenue {total_revenue}, cost {total_cost}",
        flight.uk_airport,
        flight.overseas_airport
    );

    Some(Profit {
        flight,
        distance,
        total_revenue,
        total_cost,
        profit_or_loss: total_revenue - total_cost,
    })
}
