use crate::domain::ports::Clock;
use chrono::{DateTime, NaiveDate, Utc};

/// Wall-clock time. Expiry dates are checked against the local calendar.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant, for deterministic expiry checks.
///
/// Its calendar is UTC, so tests see the same date in every timezone.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Midnight UTC on the given date. Returns `None` for an impossible date.
    pub fn on(year: i32, month: u32, day: u32) -> Option<Self> {
        let now = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)?;
        Some(Self::new(now.and_utc()))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}
