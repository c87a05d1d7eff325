use paxflow_shared::serde_ext::non_empty;
use paxflow_shared::FlightRecord;

use crate::search::{FlightStatus, SearchRequest};
use crate::window::{SearchMode, SearchWindow};

/// Advanced searches with a destination keep only flights arriving there.
pub fn filter_by_destination(
    request: &SearchRequest,
    mode: SearchMode,
    mut flights: Vec<FlightRecord>,
) -> Vec<FlightRecord> {
    if mode != SearchMode::Advanced {
        return flights;
    }
    if let Some(destination) = non_empty(&request.destination) {
        flights.retain(|flight| flight.arrival_loc == destination);
    }
    flights
}

/// Advanced searches keep only flights in the requested status.
///
/// Codes outside the known set leave the list untouched.
pub fn filter_by_status(
    request: &SearchRequest,
    mode: SearchMode,
    mut flights: Vec<FlightRecord>,
) -> Vec<FlightRecord> {
    if mode != SearchMode::Advanced {
        return flights;
    }
    if let Some(status) = request.status_code.and_then(FlightStatus::from_code) {
        flights.retain(|flight| status.matches(flight));
    }
    flights
}

/// A flight qualifies when it departs from `station` and its effective
/// departure time falls inside the window.
pub fn departs_within(window: &SearchWindow, station: &str, flight: &FlightRecord) -> bool {
    flight.departure_loc == station && window.contains(flight.effective_departure())
}
