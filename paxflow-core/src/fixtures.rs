//! Record builders shared by the unit tests.

use chrono::{DateTime, TimeZone, Utc};
use paxflow_shared::{
    Eligibility, FlightRecord, Masked, PassengerProfile, PassengerRegistration, RegisteredFlight,
    RegisteredPassenger, RegistrationLocation,
};

pub fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, hour, minute, 0).unwrap()
}

/// On-time departure from T1 to HKG at 2024-03-01T08:00Z.
pub fn flight(id: &str) -> FlightRecord {
    FlightRecord {
        id: id.to_string(),
        timestamp: None,
        std: at(1, 8, 0),
        etd: None,
        carrier_code: "AB".to_string(),
        flight_no: "101".to_string(),
        gate: None,
        boarding_time: None,
        departure_loc: "T1".to_string(),
        arrival_loc: "HKG".to_string(),
        delay_in_minute: 0,
        is_delayed: false,
        is_cancelled: false,
        is_boarding: false,
        is_re_routed: false,
        is_rescheduled: false,
        is_gate_changed: false,
        main_pax_ids: vec![],
        guest_ids: vec![],
    }
}

/// Registration matching `flight(..)` at station T1 through entry E1.
pub fn registration(id: &str) -> PassengerRegistration {
    PassengerRegistration {
        id: id.to_string(),
        passenger_details: RegisteredPassenger {
            carrier_code: "AB".to_string(),
            flight_number: Some("101".to_string()),
            is_vip: false,
        },
        flight_details: RegisteredFlight {
            flight_number: "101".to_string(),
        },
        eligibility: Eligibility { std: at(1, 8, 0) },
        location: RegistrationLocation {
            airport_code: "T1".to_string(),
            entry: Some("E1".to_string()),
            terminal: Some("T3".to_string()),
        },
    }
}

pub fn registration_for(id: &str, flight: &FlightRecord) -> PassengerRegistration {
    let mut reg = registration(id);
    reg.passenger_details.carrier_code = flight.carrier_code.clone();
    reg.passenger_details.flight_number = Some(flight.flight_no.clone());
    reg.flight_details.flight_number = flight.flight_no.clone();
    reg.eligibility.std = flight.std;
    reg
}

pub fn profile(id: &str, entry: &str) -> PassengerProfile {
    PassengerProfile {
        id: id.to_string(),
        first_name: Masked::from("Mei"),
        surname: Masked::from("Tan"),
        highest_lounge: Some("First".to_string()),
        is_vip: false,
        salutation: None,
        entry: Some(entry.to_string()),
        terminal: Some("T3".to_string()),
        station: Some("T1".to_string()),
    }
}
