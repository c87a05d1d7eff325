//! In-memory collaborators, seeded from JSON fixture files or built in tests.

use async_trait::async_trait;
use paxflow_core::{BoxError, FlightSource, PassengerDetailLookup, RegistrationSource};
use paxflow_shared::{FlightRecord, PassengerProfile, PassengerRegistration};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;
use tokio::sync::RwLock;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

async fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let display = path.display().to_string();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| StoreError::Io { path: display.clone(), source })?;
    serde_json::from_str(&raw).map_err(|source| StoreError::Parse { path: display, source })
}

/// Bucket a flight is filed under: its `timestamp` when present, else the STD day.
fn flight_bucket(flight: &FlightRecord) -> String {
    match flight.timestamp.as_deref().map(str::trim) {
        Some(ts) if !ts.is_empty() => ts.chars().take(10).collect(),
        _ => flight.std.format("%Y-%m-%d").to_string(),
    }
}

fn registration_bucket(registration: &PassengerRegistration) -> String {
    registration.eligibility.std.format("%Y-%m-%d").to_string()
}

#[derive(Default)]
pub struct InMemoryFlightStore {
    flights: RwLock<Vec<FlightRecord>>,
}

impl InMemoryFlightStore {
    pub fn new(flights: Vec<FlightRecord>) -> Self {
        Self { flights: RwLock::new(flights) }
    }

    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let flights: Vec<FlightRecord> = read_json_array(path.as_ref()).await?;
        info!("Loaded {} flights from {}", flights.len(), path.as_ref().display());
        Ok(Self::new(flights))
    }
}

#[async_trait]
impl FlightSource for InMemoryFlightStore {
    /// Every movement touching `station` in the buckets, inbound included.
    async fn flights_by_date_buckets(
        &self,
        buckets: &[String],
        station: &str,
    ) -> Result<Vec<FlightRecord>, BoxError> {
        let buckets: HashSet<&str> = buckets.iter().map(String::as_str).collect();
        let flights = self.flights.read().await;
        Ok(flights
            .iter()
            .filter(|f| f.departure_loc == station || f.arrival_loc == station)
            .filter(|f| buckets.contains(flight_bucket(f).as_str()))
            .cloned()
            .collect())
    }

    async fn flight_by_id(&self, id: &str) -> Result<Option<FlightRecord>, BoxError> {
        let flights = self.flights.read().await;
        Ok(flights.iter().find(|f| f.id == id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryRegistrationStore {
    registrations: RwLock<Vec<PassengerRegistration>>,
}

impl InMemoryRegistrationStore {
    pub fn new(registrations: Vec<PassengerRegistration>) -> Self {
        Self { registrations: RwLock::new(registrations) }
    }

    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let registrations: Vec<PassengerRegistration> = read_json_array(path.as_ref()).await?;
        info!("Loaded {} registrations from {}", registrations.len(), path.as_ref().display());
        Ok(Self::new(registrations))
    }
}

#[async_trait]
impl RegistrationSource for InMemoryRegistrationStore {
    async fn registrations_by_date_buckets(
        &self,
        buckets: &[String],
    ) -> Result<Vec<PassengerRegistration>, BoxError> {
        let buckets: HashSet<&str> = buckets.iter().map(String::as_str).collect();
        let registrations = self.registrations.read().await;
        Ok(registrations
            .iter()
            .filter(|r| buckets.contains(registration_bucket(r).as_str()))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryPassengerDirectory {
    profiles: RwLock<Vec<PassengerProfile>>,
}

impl InMemoryPassengerDirectory {
    pub fn new(profiles: Vec<PassengerProfile>) -> Self {
        Self { profiles: RwLock::new(profiles) }
    }

    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let profiles: Vec<PassengerProfile> = read_json_array(path.as_ref()).await?;
        info!("Loaded {} passenger profiles from {}", profiles.len(), path.as_ref().display());
        Ok(Self::new(profiles))
    }
}

#[async_trait]
impl PassengerDetailLookup for InMemoryPassengerDirectory {
    /// Profiles in the order the ids were asked for.
    async fn passengers_by_ids(&self, ids: &[String]) -> Result<Vec<PassengerProfile>, BoxError> {
        let profiles = self.profiles.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| profiles.iter().find(|p| &p.id == id).cloned())
            .collect())
    }
}
