use paxflow_shared::{FlightRecord, PassengerProfile, PassengerRegistration};
use std::collections::HashSet;

use crate::search::{AlertBlock, FlightSummary, PassengerCriteria, PassengerDetail};
use crate::time::DateUtility;

/// Plain field mapping from a stored flight. Headcount and VIP flag start
/// empty, the passenger list starts empty and ETD is taken as stored.
pub fn map_flight(flight: &FlightRecord) -> FlightSummary {
    FlightSummary {
        id: flight.id.clone(),
        timestamp: flight.timestamp.clone(),
        std: flight.std,
        departure_date: flight.std,
        etd: flight.etd,
        carrier_code: flight.carrier_code.clone(),
        flight_no: flight.flight_no.clone(),
        gate: flight.gate.clone(),
        boarding_time: flight.boarding_time.clone(),
        departure_loc: flight.departure_loc.clone(),
        arrival_loc: flight.arrival_loc.clone(),
        number_of_pax: 0,
        is_vip: false,
        alert: AlertBlock::from(flight),
        delay_in_minute: flight.delay_in_minute,
        is_delayed: flight.is_delayed,
        is_cancelled: flight.is_cancelled,
        is_boarding: flight.is_boarding,
        is_re_routed: flight.is_re_routed,
        is_rescheduled: flight.is_rescheduled,
        is_gate_changed: flight.is_gate_changed,
        passengers: Vec::new(),
    }
}

/// Search result entry for a flight and the registrations correlated with it.
///
/// ETD is recomputed from STD and the delay rather than trusted from the feed.
pub fn build_summary(
    flight: &FlightRecord,
    registrations: &[&PassengerRegistration],
    dates: &dyn DateUtility,
) -> FlightSummary {
    let unique: HashSet<&str> = registrations.iter().map(|r| r.id.as_str()).collect();

    FlightSummary {
        etd: Some(dates.derive_etd(flight.std, flight.delay_in_minute)),
        number_of_pax: unique.len(),
        is_vip: registrations.iter().any(|r| r.is_vip()),
        ..map_flight(flight)
    }
}

/// Attach the profiles passing `criteria` to a detail summary.
pub fn attach_passengers(
    summary: &mut FlightSummary,
    profiles: &[PassengerProfile],
    criteria: &PassengerCriteria,
) {
    summary.passengers = profiles
        .iter()
        .filter(|profile| criteria.matches(profile))
        .map(PassengerDetail::from)
        .collect();
    summary.number_of_pax = summary.passengers.len();
    summary.is_vip = summary.passengers.iter().any(|p| p.is_vip);
}
