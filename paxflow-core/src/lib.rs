pub mod assembler;
pub mod correlation;
pub mod filter;
#[cfg(test)]
mod fixtures;
pub mod observer;
pub mod repository;
pub mod search;
pub mod service;
pub mod summary;
pub mod time;
pub mod window;

pub use observer::{SearchObserver, TracingObserver};
pub use repository::{FlightSource, PassengerDetailLookup, RegistrationSource};
pub use search::{
    AlertBlock, DateRange, FlightSearchResult, FlightStatus, FlightSummary, PassengerCriteria,
    PassengerDetail, SearchRequest,
};
pub use service::FlightService;
pub use time::{Clock, DateUtility, FixedClock, SystemClock, UtcDateService};
pub use window::{SearchMode, SearchRules, SearchWindow};

/// Error type returned by collaborator implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Flight source failed: {0}")]
    FlightSource(#[source] BoxError),
    #[error("Registration source failed: {0}")]
    RegistrationSource(#[source] BoxError),
    #[error("Passenger lookup failed: {0}")]
    PassengerLookup(#[source] BoxError),
}

impl CoreError {
    /// True when the failure came from a collaborator rather than the caller's input.
    pub fn is_upstream(&self) -> bool {
        !matches!(self, CoreError::InvalidRequest(_))
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
