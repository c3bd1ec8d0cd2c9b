pub mod job;
pub mod salary;

pub use job::*;
pub use salary::*;
