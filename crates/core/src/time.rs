use chrono::{DateTime, Utc};

/// Time source for session stamps.
///
/// Runners and tests share this so playthrough timestamps stay deterministic
/// under test.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    /// Wall-clock time.
    #[default]
    System,
    /// Frozen at a single instant.
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns a clock frozen at the given instant.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(at) => *at,
        }
    }
}

/// Deterministic instant shared by the test suites (2024-08-17T00:00:00Z).
///
/// # Panics
///
/// Panics if the timestamp cannot be represented, which cannot happen for
/// this constant.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(1_723_852_800, 0)
        .expect("fixed timestamp should be valid")
}
