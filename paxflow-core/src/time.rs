use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::Serializer;

/// Source of "now" for the basic search window.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Date arithmetic and rendering shared by the search and detail paths.
pub trait DateUtility: Send + Sync {
    /// STD shifted by the current delay. A shift past the representable range keeps STD.
    fn derive_etd(&self, std: DateTime<Utc>, delay_minutes: u32) -> DateTime<Utc>;

    /// Render an instant the way API consumers expect (`YYYY-MM-DDTHH:mm:ss.SSSZ`).
    fn to_display_format(&self, instant: DateTime<Utc>) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UtcDateService;

impl DateUtility for UtcDateService {
    fn derive_etd(&self, std: DateTime<Utc>, delay_minutes: u32) -> DateTime<Utc> {
        std.checked_add_signed(Duration::minutes(i64::from(delay_minutes)))
            .unwrap_or(std)
    }

    fn to_display_format(&self, instant: DateTime<Utc>) -> String {
        display_format(instant)
    }
}

/// `YYYY-MM-DDTHH:mm:ss.SSSZ`, the format every instant in a response uses.
pub fn display_format(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn serialize_display<S: Serializer>(
    instant: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&display_format(*instant))
}

pub(crate) fn serialize_display_opt<S: Serializer>(
    instant: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match instant {
        Some(instant) => serializer.serialize_some(&display_format(*instant)),
        None => serializer.serialize_none(),
    }
}
