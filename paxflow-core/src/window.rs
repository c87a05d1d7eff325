//! Search mode resolution and the date buckets a search has to read.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::search::SearchRequest;

const BUCKET_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Basic,
    Advanced,
}

/// Tunables for window resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRules {
    /// Length of the rolling window used by basic searches.
    pub basic_window: Duration,
    /// How far before the window start delayed flights may have been scheduled.
    pub delay_tolerance: Duration,
    /// Longest span an advanced search may cover; later end dates are cut back.
    pub max_window: Duration,
}

impl Default for SearchRules {
    fn default() -> Self {
        Self {
            basic_window: Duration::hours(48),
            delay_tolerance: Duration::hours(24),
            max_window: Duration::days(31),
        }
    }
}

impl SearchRules {
    pub fn from_hours(basic_window_hours: u32, delay_tolerance_hours: u32) -> Self {
        Self {
            basic_window: Duration::hours(i64::from(basic_window_hours)),
            delay_tolerance: Duration::hours(i64::from(delay_tolerance_hours)),
            ..Self::default()
        }
    }

    pub fn with_max_window_days(mut self, days: u32) -> Self {
        self.max_window = Duration::days(i64::from(days));
        self
    }
}

/// The departure window a search covers, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    pub mode: SearchMode,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl SearchWindow {
    pub fn is_advanced(&self) -> bool {
        self.mode == SearchMode::Advanced
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

/// A request is advanced when it carries a status code and both departure dates.
///
/// Status code 0 ("on time") counts as absent here, so an on-time filter can
/// never switch a request into advanced mode.
pub fn is_advanced(request: &SearchRequest) -> bool {
    request.status_code.is_some_and(|code| code != 0)
        && request.departure_from_date.is_some()
        && request.departure_to_date.is_some()
}

pub fn resolve(request: &SearchRequest, now: DateTime<Utc>, rules: &SearchRules) -> SearchWindow {
    match (request.departure_from_date, request.departure_to_date) {
        (Some(start), Some(end)) if is_advanced(request) => SearchWindow {
            mode: SearchMode::Advanced,
            start,
            end: start
                .checked_add_signed(rules.max_window)
                .map_or(end, |limit| end.min(limit)),
        },
        _ => SearchWindow {
            mode: SearchMode::Basic,
            start: now,
            end: now
                .checked_add_signed(rules.basic_window)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        },
    }
}

/// Calendar days (UTC) from `start` through `end`, ascending and without repeats.
///
/// The day of `end` is always present, even when `start` is after `end`.
pub fn enumerate_days(start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<String> {
    let last = end.date_naive();
    let mut days = Vec::new();
    let mut current = start;

    while current.date_naive() < last {
        days.push(format_day(current.date_naive()));
        match current.checked_add_signed(Duration::hours(24)) {
            Some(next) => current = next,
            None => break,
        }
    }
    days.push(format_day(last));

    days
}

/// Buckets to query for a window: the window's days, starting `delay_tolerance`
/// earlier so a flight scheduled before the window but delayed into it is fetched.
/// At the start of the representable range the extra lead is dropped.
pub fn expand_date_buckets(window: &SearchWindow, rules: &SearchRules) -> Vec<String> {
    let from = window
        .start
        .checked_sub_signed(rules.delay_tolerance)
        .unwrap_or(window.start);
    enumerate_days(from, window.end)
}

fn format_day(day: NaiveDate) -> String {
    day.format(BUCKET_FORMAT).to_string()
}
