use chrono::{DateTime, Utc};
use paxflow_shared::serde_ext::lenient_option;
use paxflow_shared::{FlightRecord, Masked, PassengerProfile};
use serde::{Deserialize, Serialize};

use crate::time::{serialize_display, serialize_display_opt};

/// Flight list query as sent by the station dashboard.
///
/// Supplying a non-zero `status_code` together with both departure dates turns
/// the query into an advanced search; anything less falls back to the basic
/// rolling window. Criteria that cannot be parsed are treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub entry: Option<String>,
    #[serde(default)]
    pub terminal: Option<String>,
    #[serde(default)]
    pub station: String,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default, alias = "flightStatus", deserialize_with = "lenient_option")]
    pub status_code: Option<i32>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub departure_from_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub departure_to_date: Option<DateTime<Utc>>,
}

impl SearchRequest {
    pub fn for_station(station: impl Into<String>) -> Self {
        Self {
            station: station.into(),
            ..Default::default()
        }
    }
}

/// Operational status a search can be narrowed to, keyed by the wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightStatus {
    OnTime,
    Delayed,
    Boarding,
    Cancelled,
    ReRouted,
    Rescheduled,
}

impl FlightStatus {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::OnTime),
            1 => Some(Self::Delayed),
            2 => Some(Self::Boarding),
            3 => Some(Self::Cancelled),
            4 => Some(Self::ReRouted),
            5 => Some(Self::Rescheduled),
            _ => None,
        }
    }

    pub fn matches(self, flight: &FlightRecord) -> bool {
        match self {
            Self::OnTime => flight.delay_in_minute == 0 && !flight.is_cancelled,
            Self::Delayed => flight.delay_in_minute > 0,
            Self::Boarding => flight.is_boarding,
            Self::Cancelled => flight.is_cancelled,
            Self::ReRouted => flight.is_re_routed,
            Self::Rescheduled => flight.is_rescheduled,
        }
    }
}

/// Status flags of a flight as shown on its card, copied from the record.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlertBlock {
    pub is_gate_changed: bool,
    pub delay_in_minute: u32,
    pub is_re_routed: bool,
    pub is_boarding: bool,
    pub is_rescheduled: bool,
    pub is_cancelled: bool,
}

impl From<&FlightRecord> for AlertBlock {
    fn from(flight: &FlightRecord) -> Self {
        Self {
            is_gate_changed: flight.is_gate_changed,
            delay_in_minute: flight.delay_in_minute,
            is_re_routed: flight.is_re_routed,
            is_boarding: flight.is_boarding,
            is_rescheduled: flight.is_rescheduled,
            is_cancelled: flight.is_cancelled,
        }
    }
}

/// Passenger as displayed on a flight's detail view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerDetail {
    pub id: String,
    pub first_name: Masked<String>,
    pub surname: Masked<String>,
    pub highest_lounge: Option<String>,
    pub is_vip: bool,
    pub salutation: Option<Masked<String>>,
}

impl From<&PassengerProfile> for PassengerDetail {
    fn from(profile: &PassengerProfile) -> Self {
        Self {
            id: profile.id.clone(),
            first_name: profile.first_name.clone(),
            surname: profile.surname.clone(),
            highest_lounge: profile.highest_lounge.clone(),
            is_vip: profile.is_vip,
            salutation: profile.salutation.clone(),
        }
    }
}

/// One flight in a search result or a detail response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSummary {
    pub id: String,
    pub timestamp: Option<String>,
    #[serde(rename = "STD", serialize_with = "serialize_display")]
    pub std: DateTime<Utc>,
    #[serde(serialize_with = "serialize_display")]
    pub departure_date: DateTime<Utc>,
    #[serde(rename = "ETD", serialize_with = "serialize_display_opt")]
    pub etd: Option<DateTime<Utc>>,
    pub carrier_code: String,
    pub flight_no: String,
    pub gate: Option<String>,
    pub boarding_time: Option<String>,
    pub departure_loc: String,
    pub arrival_loc: String,
    pub number_of_pax: usize,
    pub is_vip: bool,
    pub alert: AlertBlock,
    pub delay_in_minute: u32,
    pub is_delayed: bool,
    pub is_cancelled: bool,
    pub is_boarding: bool,
    pub is_re_routed: bool,
    pub is_rescheduled: bool,
    pub is_gate_changed: bool,
    pub passengers: Vec<PassengerDetail>,
}

impl FlightSummary {
    pub fn effective_departure(&self) -> DateTime<Utc> {
        self.etd.unwrap_or(self.std)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub minimum_date: DateTime<Utc>,
    pub maximum_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct FlightSearchResult {
    pub flights: Vec<FlightSummary>,
    /// `None` when no flight matched.
    pub range: Option<DateRange>,
}

/// Optional narrowing of the passengers attached to a flight detail.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PassengerCriteria {
    #[serde(default)]
    pub entry: Option<String>,
    #[serde(default)]
    pub terminal: Option<String>,
    #[serde(default)]
    pub station: Option<String>,
}

impl PassengerCriteria {
    /// Blank criteria are ignored; the rest must match the profile exactly after trimming.
    pub fn matches(&self, profile: &PassengerProfile) -> bool {
        fn check(wanted: &Option<String>, actual: &Option<String>) -> bool {
            match wanted.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                None => true,
                Some(wanted) => actual.as_deref() == Some(wanted),
            }
        }

        check(&self.entry, &profile.entry)
            && check(&self.terminal, &profile.terminal)
            && check(&self.station, &profile.station)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_search_request_from_query_like_json() {
        let json = r#"
            {
                "station": "SIN",
                "entry": "E1",
                "flightStatus": "3",
                "departureFromDate": "2024-03-01T00:00:00Z",
                "departureToDate": ""
            }
        "#;
        let req: SearchRequest = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(req.station, "SIN");
        assert_eq!(req.status_code, Some(3));
        assert_eq!(
            req.departure_from_date,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(req.departure_to_date, None);
        assert_eq!(req.terminal, None);
    }

    #[test]
    fn test_malformed_criteria_are_dropped() {
        let json = r#"
            {
                "station": "SIN",
                "statusCode": "abc",
                "departureFromDate": "not-a-date",
                "departureToDate": "2024-03-06T00:00:00Z"
            }
        "#;
        let req: SearchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.status_code, None);
        assert_eq!(req.departure_from_date, None);
        assert!(req.departure_to_date.is_some());
    }

    #[test]
    fn test_missing_station_defaults_to_blank() {
        let req: SearchRequest = serde_json::from_str(r#"{ "entry": "E1" }"#).unwrap();
        assert!(req.station.is_empty());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(FlightStatus::from_code(0), Some(FlightStatus::OnTime));
        assert_eq!(FlightStatus::from_code(3), Some(FlightStatus::Cancelled));
        assert_eq!(FlightStatus::from_code(5), Some(FlightStatus::Rescheduled));
        assert_eq!(FlightStatus::from_code(6), None);
        assert_eq!(FlightStatus::from_code(-1), None);
    }

    fn profile(entry: Option<&str>, terminal: Option<&str>, station: Option<&str>) -> PassengerProfile {
        PassengerProfile {
            id: "p1".to_string(),
            first_name: Masked::from("Ada"),
            surname: Masked::from("Ng"),
            highest_lounge: None,
            is_vip: false,
            salutation: Some(Masked::from("Dr")),
            entry: entry.map(str::to_string),
            terminal: terminal.map(str::to_string),
            station: station.map(str::to_string),
        }
    }

    #[test]
    fn test_criteria_ignores_blank_values() {
        let criteria = PassengerCriteria {
            entry: Some("  ".to_string()),
            terminal: Some(String::new()),
            station: None,
        };
        assert!(criteria.matches(&profile(Some("E9"), None, Some("SIN"))));
    }

    #[test]
    fn test_criteria_trims_and_matches_exactly() {
        let criteria = PassengerCriteria {
            entry: Some(" E1 ".to_string()),
            terminal: None,
            station: Some("SIN".to_string()),
        };
        assert!(criteria.matches(&profile(Some("E1"), Some("T3"), Some("SIN"))));
        assert!(!criteria.matches(&profile(Some("E2"), Some("T3"), Some("SIN"))));
        assert!(!criteria.matches(&profile(Some("E1"), None, None)));
    }

    #[test]
    fn test_passenger_detail_keeps_names_masked_in_debug() {
        let detail = PassengerDetail::from(&profile(None, None, None));
        let debug = format!("{:?}", detail);
        assert!(!debug.contains("Ada"));

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["salutation"], "Dr");
        assert_eq!(json["isVip"], false);
    }

    #[test]
    fn test_instants_share_the_display_format() {
        let flight: FlightRecord = serde_json::from_value(serde_json::json!({
            "id": "f1",
            "STD": "2024-03-01T08:00:00Z",
            "ETD": "2024-03-01T08:30:00Z",
            "carrierCode": "AB",
            "flightNo": "101",
            "departureLoc": "T1",
            "arrivalLoc": "HKG",
            "delayInMinute": 30,
            "isBoarding": true
        }))
        .unwrap();
        let json = serde_json::to_value(crate::summary::map_flight(&flight)).unwrap();
        assert_eq!(json["STD"], "2024-03-01T08:00:00.000Z");
        assert_eq!(json["departureDate"], "2024-03-01T08:00:00.000Z");
        assert_eq!(json["ETD"], "2024-03-01T08:30:00.000Z");
        assert_eq!(json["delayInMinute"], 30);
        assert_eq!(json["isBoarding"], true);
        assert_eq!(json["isReRouted"], false);
    }
}
