use async_trait::async_trait;
use paxflow_shared::{FlightRecord, PassengerProfile, PassengerRegistration};

use crate::BoxError;

/// Read access to the flight operations store.
#[async_trait]
pub trait FlightSource: Send + Sync {
    /// All departures from `station` indexed under any of the given `YYYY-MM-DD` buckets.
    async fn flights_by_date_buckets(
        &self,
        buckets: &[String],
        station: &str,
    ) -> Result<Vec<FlightRecord>, BoxError>;

    async fn flight_by_id(&self, id: &str) -> Result<Option<FlightRecord>, BoxError>;
}

/// Read access to passenger registrations.
#[async_trait]
pub trait RegistrationSource: Send + Sync {
    async fn registrations_by_date_buckets(
        &self,
        buckets: &[String],
    ) -> Result<Vec<PassengerRegistration>, BoxError>;
}

/// Profile lookup used by the flight detail view.
#[async_trait]
pub trait PassengerDetailLookup: Send + Sync {
    /// Profiles for the given ids. Unknown ids are silently absent from the result.
    async fn passengers_by_ids(&self, ids: &[String]) -> Result<Vec<PassengerProfile>, BoxError>;
}
