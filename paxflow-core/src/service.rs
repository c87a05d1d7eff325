use paxflow_shared::{FlightRecord, PassengerRegistration};
use std::sync::Arc;

use crate::assembler::assemble;
use crate::correlation::{filter_by_entry, filter_by_terminal, RegistrationIndex};
use crate::filter::{departs_within, filter_by_destination, filter_by_status};
use crate::observer::{SearchObserver, TracingObserver};
use crate::repository::{FlightSource, PassengerDetailLookup, RegistrationSource};
use crate::search::{FlightSearchResult, FlightSummary, PassengerCriteria, SearchRequest};
use crate::summary::{attach_passengers, build_summary, map_flight};
use crate::time::{Clock, DateUtility, SystemClock, UtcDateService};
use crate::window::{expand_date_buckets, resolve, SearchRules, SearchWindow};
use crate::{CoreError, CoreResult};

/// Flight list and flight detail for a station dashboard.
///
/// Holds no per-request state; one instance serves all requests.
#[derive(Clone)]
pub struct FlightService {
    flights: Arc<dyn FlightSource>,
    registrations: Arc<dyn RegistrationSource>,
    passengers: Arc<dyn PassengerDetailLookup>,
    dates: Arc<dyn DateUtility>,
    clock: Arc<dyn Clock>,
    observer: Arc<dyn SearchObserver>,
    rules: SearchRules,
}

impl FlightService {
    pub fn new(
        flights: Arc<dyn FlightSource>,
        registrations: Arc<dyn RegistrationSource>,
        passengers: Arc<dyn PassengerDetailLookup>,
    ) -> Self {
        Self {
            flights,
            registrations,
            passengers,
            dates: Arc::new(UtcDateService),
            clock: Arc::new(SystemClock),
            observer: Arc::new(TracingObserver),
            rules: SearchRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: SearchRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_date_utility(mut self, dates: Arc<dyn DateUtility>) -> Self {
        self.dates = dates;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn SearchObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn date_utility(&self) -> &dyn DateUtility {
        self.dates.as_ref()
    }

    pub async fn search_flights(&self, request: &SearchRequest) -> CoreResult<FlightSearchResult> {
        let window = resolve(request, self.clock.now(), &self.rules);
        let buckets = expand_date_buckets(&window, &self.rules);
        self.observer.window_resolved(request, &window, &buckets);

        // Independent reads; either failure fails the whole search.
        let (flights, registrations) = futures_util::try_join!(
            async {
                self.flights
                    .flights_by_date_buckets(&buckets, &request.station)
                    .await
                    .map_err(CoreError::FlightSource)
            },
            async {
                self.registrations
                    .registrations_by_date_buckets(&buckets)
                    .await
                    .map_err(CoreError::RegistrationSource)
            },
        )?;
        self.observer.candidates_fetched(flights.len(), registrations.len());

        let flights = filter_by_destination(request, window.mode, flights);
        let flights = filter_by_status(request, window.mode, flights);
        self.observer.filters_applied(flights.len());

        let entries = self.correlate(request, &window, &flights, &registrations);
        let result = assemble(entries);
        self.observer.result_ready(&result);

        Ok(result)
    }

    fn correlate(
        &self,
        request: &SearchRequest,
        window: &SearchWindow,
        flights: &[FlightRecord],
        registrations: &[PassengerRegistration],
    ) -> Vec<FlightSummary> {
        let index = RegistrationIndex::build(registrations);
        if index.is_empty() {
            return Vec::new();
        }

        flights
            .iter()
            .filter(|flight| departs_within(window, &request.station, flight))
            .filter_map(|flight| {
                let matched = index.matches(&request.station, flight);
                let matched = filter_by_entry(request, window.mode, matched);
                let matched = filter_by_terminal(request, matched);
                if matched.is_empty() {
                    None
                } else {
                    Some(build_summary(flight, &matched, self.dates.as_ref()))
                }
            })
            .collect()
    }

    /// A single flight with its passengers, or `None` when the id is unknown.
    pub async fn get_flight_detail(
        &self,
        id: &str,
        criteria: &PassengerCriteria,
    ) -> CoreResult<Option<FlightSummary>> {
        if id.trim().is_empty() {
            return Err(CoreError::InvalidRequest("flight id is required".to_string()));
        }

        let Some(record) = self
            .flights
            .flight_by_id(id)
            .await
            .map_err(CoreError::FlightSource)?
        else {
            return Ok(None);
        };

        let mut summary = map_flight(&record);
        let ids = record.passenger_ids();
        if !ids.is_empty() {
            let profiles = self
                .passengers
                .passengers_by_ids(&ids)
                .await
                .map_err(CoreError::PassengerLookup)?;
            attach_passengers(&mut summary, &profiles, criteria);
        }

        self.observer.detail_ready(&summary);
        Ok(Some(summary))
    }
}
