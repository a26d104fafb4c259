use chrono::{DateTime, FixedOffset, Local, NaiveDate};

/// Clock abstracts access to the current timestamp so operations remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current timestamp carrying the local UTC offset.
    fn now(&self) -> DateTime<FixedOffset>;

    /// Returns the current calendar date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Real-time clock backed by the local system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().into()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    /// Parses an RFC 3339 timestamp, e.g. `2025-03-14T09:30:00+00:00`.
    pub fn parse(rfc3339: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(rfc3339).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn fixed_clock_reports_its_instant() {
        let clock = FixedClock::parse("2025-06-30T23:15:00-04:00").unwrap();
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
        assert_eq!(clock.now().month(), 6);
    }

    #[test]
    fn system_clock_uses_local_offset() {
        let now = SystemClock.now();
        let local = Local::now();
        assert_eq!(now.offset().local_minus_utc(), local.offset().local_minus_utc());
    }
}
