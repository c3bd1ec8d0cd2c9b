// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
//
// Naming convention: Base* for trait names (e.g., BaseClock)

use chrono::{NaiveDate, Utc};

// =============================================================================
// Clock Trait (Infrastructure - reference date for derived views)
// =============================================================================

/// Source of "today" for everything date-relative: posting dates, recency
/// labels, the analytics trend window.
///
/// Read once per request and pass the date down, so that one response never
/// mixes two different days.
pub trait BaseClock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock, in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl BaseClock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}
