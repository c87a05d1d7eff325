use crate::search::{DateRange, FlightSearchResult, FlightSummary};

/// Order entries by effective departure and work out the span they cover.
///
/// The sort is stable, so flights leaving at the same instant keep the order
/// they were correlated in.
pub fn assemble(mut flights: Vec<FlightSummary>) -> FlightSearchResult {
    flights.sort_by_key(FlightSummary::effective_departure);
    let range = date_range(&flights);
    FlightSearchResult { flights, range }
}

/// Earliest and latest effective departure, or `None` for an empty list.
pub fn date_range(flights: &[FlightSummary]) -> Option<DateRange> {
    let times = flights.iter().map(FlightSummary::effective_departure);
    let minimum_date = times.clone().min()?;
    let maximum_date = times.max()?;
    Some(DateRange {
        minimum_date,
        maximum_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{at, flight};
    use crate::summary::map_flight;
    use paxflow_shared::FlightRecord;

    fn summary(id: &str, std_hour: u32, etd_hour: Option<u32>) -> FlightSummary {
        map_flight(&FlightRecord {
            std: at(1, std_hour, 0),
            etd: etd_hour.map(|h| at(1, h, 0)),
            ..flight(id)
        })
    }

    #[test]
    fn test_sorts_by_effective_departure() {
        let flights = vec![
            summary("late-std", 11, None),
            summary("delayed", 7, Some(12)),
            summary("early", 9, None),
        ];
        let result = assemble(flights);
        let ids: Vec<_> = result.flights.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "late-std", "delayed"]);

        assert!(result
            .flights
            .windows(2)
            .all(|pair| pair[0].effective_departure() <= pair[1].effective_departure()));
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let flights = vec![
            summary("first", 10, None),
            summary("second", 9, Some(10)),
            summary("third", 10, None),
        ];
        let result = assemble(flights);
        let ids: Vec<_> = result.flights.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_range_uses_effective_departure() {
        let result = assemble(vec![
            summary("a", 9, None),
            summary("b", 6, Some(14)),
            summary("c", 8, None),
        ]);
        assert_eq!(
            result.range,
            Some(DateRange {
                minimum_date: at(1, 8, 0),
                maximum_date: at(1, 14, 0),
            })
        );
    }

    #[test]
    fn test_single_flight_range_is_a_point() {
        let result = assemble(vec![summary("only", 9, None)]);
        let range = result.range.unwrap();
        assert_eq!(range.minimum_date, range.maximum_date);
    }

    #[test]
    fn test_empty_list_has_no_range() {
        let result = assemble(Vec::new());
        assert!(result.flights.is_empty());
        assert!(result.range.is_none());
    }
}
