pub mod data;
pub mod models;
pub mod pipeline;
pub mod store;

pub use data::{JobData, JobInput, SalaryValue, ValidationError};
pub use models::{Job, NewJob};
pub use store::{JobStore, PostgresJobStore};
