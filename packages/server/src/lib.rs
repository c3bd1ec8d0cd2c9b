// Job Board - API Core
//
// This crate provides the backend API for publishing, browsing and analysing
// job postings. Listings live in a single PostgreSQL table; everything the
// board shows beyond the raw rows is derived by the query pipeline in
// domains/jobs/pipeline.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
