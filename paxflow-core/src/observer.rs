use tracing::{debug, info};

use crate::search::{FlightSearchResult, FlightSummary, SearchRequest};
use crate::window::SearchWindow;

/// Checkpoints the flight service reports while handling a request.
///
/// All methods default to doing nothing.
pub trait SearchObserver: Send + Sync {
    fn window_resolved(&self, _request: &SearchRequest, _window: &SearchWindow, _buckets: &[String]) {}

    fn candidates_fetched(&self, _flights: usize, _registrations: usize) {}

    fn filters_applied(&self, _flights: usize) {}

    fn result_ready(&self, _result: &FlightSearchResult) {}

    fn detail_ready(&self, _flight: &FlightSummary) {}
}

/// Emits each checkpoint as a structured `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn window_resolved(&self, request: &SearchRequest, window: &SearchWindow, buckets: &[String]) {
        info!(
            station = %request.station,
            mode = ?window.mode,
            start = %window.start,
            end = %window.end,
            buckets = ?buckets,
            "Flight search window resolved"
        );
    }

    fn candidates_fetched(&self, flights: usize, registrations: usize) {
        debug!(flights, registrations, "Fetched search candidates");
    }

    fn filters_applied(&self, flights: usize) {
        debug!(flights, "Flight filters applied");
    }

    fn result_ready(&self, result: &FlightSearchResult) {
        info!(
            flights = result.flights.len(),
            minimum_date = ?result.range.map(|r| r.minimum_date),
            maximum_date = ?result.range.map(|r| r.maximum_date),
            "Flight search completed"
        );
    }

    fn detail_ready(&self, flight: &FlightSummary) {
        info!(
            flight_id = %flight.id,
            flight_no = %flight.flight_no,
            passengers = flight.passengers.len(),
            "Flight detail resolved"
        );
    }
}
