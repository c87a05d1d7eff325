use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A passenger's registration for assistance on a specific departure.
///
/// Only meaningful together with the flight it names: the join key is
/// carrier code, flight number, STD and the airport of the location block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PassengerRegistration {
    pub id: String,
    pub passenger_details: RegisteredPassenger,
    pub flight_details: RegisteredFlight,
    pub eligibility: Eligibility,
    pub location: RegistrationLocation,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredPassenger {
    pub carrier_code: String,
    #[serde(default)]
    pub flight_number: Option<String>,
    #[serde(default)]
    pub is_vip: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredFlight {
    pub flight_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Eligibility {
    #[serde(rename = "STD")]
    pub std: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationLocation {
    pub airport_code: String,
    #[serde(default)]
    pub entry: Option<String>,
    #[serde(default)]
    pub terminal: Option<String>,
}

impl PassengerRegistration {
    pub fn is_vip(&self) -> bool {
        self.passenger_details.is_vip
    }
}
