//! Joining flights to the passengers registered against them.

use chrono::{DateTime, Utc};
use paxflow_shared::serde_ext::non_empty;
use paxflow_shared::{FlightRecord, PassengerRegistration};
use std::collections::HashMap;

use crate::search::SearchRequest;
use crate::window::SearchMode;

/// Exact-match join key: carrier, flight number, STD and station.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationKey {
    pub carrier_code: String,
    pub flight_number: String,
    pub std: DateTime<Utc>,
    pub station: String,
}

impl CorrelationKey {
    pub fn for_flight(flight: &FlightRecord, station: &str) -> Self {
        Self {
            carrier_code: flight.carrier_code.clone(),
            flight_number: flight.flight_no.clone(),
            std: flight.std,
            station: station.to_string(),
        }
    }

    pub fn for_registration(registration: &PassengerRegistration) -> Self {
        Self {
            carrier_code: registration.passenger_details.carrier_code.clone(),
            flight_number: registration.flight_details.flight_number.clone(),
            std: registration.eligibility.std,
            station: registration.location.airport_code.clone(),
        }
    }
}

pub fn is_match(station: &str, flight: &FlightRecord, registration: &PassengerRegistration) -> bool {
    flight.carrier_code == registration.passenger_details.carrier_code
        && flight.flight_no == registration.flight_details.flight_number
        && flight.std == registration.eligibility.std
        && station == registration.location.airport_code
}

/// Linear scan over all registrations.
pub fn match_registrations<'a>(
    station: &str,
    flight: &FlightRecord,
    registrations: &'a [PassengerRegistration],
) -> Vec<&'a PassengerRegistration> {
    registrations
        .iter()
        .filter(|registration| is_match(station, flight, registration))
        .collect()
}

/// Registrations grouped by correlation key, preserving input order within a group.
pub struct RegistrationIndex<'a> {
    by_key: HashMap<CorrelationKey, Vec<&'a PassengerRegistration>>,
}

impl<'a> RegistrationIndex<'a> {
    pub fn build(registrations: &'a [PassengerRegistration]) -> Self {
        let mut by_key: HashMap<CorrelationKey, Vec<&'a PassengerRegistration>> = HashMap::new();
        for registration in registrations {
            by_key
                .entry(CorrelationKey::for_registration(registration))
                .or_default()
                .push(registration);
        }
        Self { by_key }
    }

    /// Same result as [`match_registrations`], without the scan.
    pub fn matches(&self, station: &str, flight: &FlightRecord) -> Vec<&'a PassengerRegistration> {
        self.by_key
            .get(&CorrelationKey::for_flight(flight, station))
            .cloned()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.by_key.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

/// Basic searches always require the passenger's entry to equal the requested
/// one (a request without an entry therefore matches nobody). Advanced searches
/// only filter when an entry was given.
pub fn filter_by_entry<'a>(
    request: &SearchRequest,
    mode: SearchMode,
    mut matches: Vec<&'a PassengerRegistration>,
) -> Vec<&'a PassengerRegistration> {
    let wanted = match mode {
        SearchMode::Basic => request.entry.as_deref(),
        SearchMode::Advanced => match non_empty(&request.entry) {
            Some(entry) => Some(entry),
            None => return matches,
        },
    };
    matches.retain(|registration| {
        wanted.is_some() && registration.location.entry.as_deref() == wanted
    });
    matches
}

pub fn filter_by_terminal<'a>(
    request: &SearchRequest,
    mut matches: Vec<&'a PassengerRegistration>,
) -> Vec<&'a PassengerRegistration> {
    if let Some(terminal) = non_empty(&request.terminal) {
        matches.retain(|registration| registration.location.terminal.as_deref() == Some(terminal));
    }
    matches
}
