use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::serde_ext::blank_as_none;

/// A departure as stored by the flight operations feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    pub id: String,
    /// Bucket key the upstream store indexes this record under.
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(rename = "STD")]
    pub std: DateTime<Utc>,
    #[serde(rename = "ETD", default, deserialize_with = "blank_as_none")]
    pub etd: Option<DateTime<Utc>>,
    pub carrier_code: String,
    pub flight_no: String,
    #[serde(default)]
    pub gate: Option<String>,
    #[serde(default)]
    pub boarding_time: Option<String>,
    pub departure_loc: String,
    pub arrival_loc: String,
    #[serde(default)]
    pub delay_in_minute: u32,
    #[serde(default)]
    pub is_delayed: bool,
    #[serde(default)]
    pub is_cancelled: bool,
    #[serde(default)]
    pub is_boarding: bool,
    #[serde(default)]
    pub is_re_routed: bool,
    #[serde(default)]
    pub is_rescheduled: bool,
    #[serde(default)]
    pub is_gate_changed: bool,
    #[serde(default)]
    pub main_pax_ids: Vec<String>,
    #[serde(default)]
    pub guest_ids: Vec<String>,
}

impl FlightRecord {
    /// ETD when the feed has one, STD otherwise.
    pub fn effective_departure(&self) -> DateTime<Utc> {
        self.etd.unwrap_or(self.std)
    }

    /// Main passengers followed by guests, first occurrence wins.
    pub fn passenger_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::with_capacity(self.main_pax_ids.len() + self.guest_ids.len());
        for id in self.main_pax_ids.iter().chain(self.guest_ids.iter()) {
            if !ids.contains(id) {
                ids.push(id.clone());
            }
        }
        ids
    }
}
