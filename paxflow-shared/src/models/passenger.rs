use serde::{Deserialize, Serialize};

use crate::pii::Masked;

/// Passenger profile as returned by the registration service's lookup-by-id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerProfile {
    pub id: String,
    #[serde(default)]
    pub first_name: Masked<String>,
    #[serde(default)]
    pub surname: Masked<String>,
    #[serde(default)]
    pub highest_lounge: Option<String>,
    #[serde(default)]
    pub is_vip: bool,
    #[serde(default)]
    pub salutation: Option<Masked<String>>,
    #[serde(default)]
    pub entry: Option<String>,
    #[serde(default)]
    pub terminal: Option<String>,
    #[serde(default)]
    pub station: Option<String>,
}
