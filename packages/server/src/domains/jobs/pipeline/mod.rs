//! Job query pipeline.
//!
//! Pure, synchronous transformations over a snapshot of job records:
//!
//! - [`filter_and_sort`]: criteria in, matching jobs out, in the requested order
//! - [`JobAnalytics::compute`]: aggregate view for the analytics dashboard
//! - [`presentation`]: per-card and per-widget derivations (recency labels,
//!   salary tiers, location lists, search suggestions)
//!
//! Nothing here performs I/O or reads the system clock. Anything that depends
//! on "today" takes the reference date as an argument so that a single
//! request sees one consistent date.

pub mod analytics;
pub mod criteria;
pub mod filter;
pub mod presentation;

pub use analytics::{
    DailyPostings, JobAnalytics, LocationAverage, LocationCount, SalaryDistribution,
};
pub use criteria::{JobCriteria, SortKey};
pub use filter::{filter_and_sort, sort_jobs};
pub use presentation::{
    describe_age, distinct_locations, search_suggestions, JobListing, SalaryTier,
    SUGGESTION_LIMIT,
};
