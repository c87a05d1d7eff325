use paxflow_core::FlightService;
use paxflow_store::{
    Config, InMemoryFlightStore, InMemoryPassengerDirectory, InMemoryRegistrationStore,
    StoreError,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub flight_service: FlightService,
}

impl AppState {
    pub fn new(flight_service: FlightService) -> Self {
        Self { flight_service }
    }

    /// Build the service over in-memory stores seeded from the configured fixture files.
    pub async fn from_config(config: &Config) -> Result<Self, StoreError> {
        let flights = match &config.data.flights_path {
            Some(path) => InMemoryFlightStore::from_json_file(path).await?,
            None => InMemoryFlightStore::default(),
        };
        let registrations = match &config.data.registrations_path {
            Some(path) => InMemoryRegistrationStore::from_json_file(path).await?,
            None => InMemoryRegistrationStore::default(),
        };
        let passengers = match &config.data.passengers_path {
            Some(path) => InMemoryPassengerDirectory::from_json_file(path).await?,
            None => InMemoryPassengerDirectory::default(),
        };

        let flight_service = FlightService::new(
            Arc::new(flights),
            Arc::new(registrations),
            Arc::new(passengers),
        )
        .with_rules(config.search.rules());

        Ok(Self::new(flight_service))
    }
}
