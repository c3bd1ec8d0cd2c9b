//! Kernel module - server infrastructure and dependencies.

pub mod database;
pub mod test_dependencies;
pub mod traits;

pub use database::{connect_with_retry, retry_with_delay};
pub use test_dependencies::{FixedClock, InMemoryJobStore};
pub use traits::*;
