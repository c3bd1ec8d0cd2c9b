//! Database bootstrap.
//!
//! The database may still be starting when the server boots (docker compose,
//! fresh containers), so the initial connection is retried a bounded number
//! of times with a fixed delay before giving up.

use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;

/// Run `op` up to `attempts` times, sleeping `delay` between failures.
///
/// Returns the first success, or the last error once attempts are exhausted.
/// Zero attempts is treated as one.
pub async fn retry_with_delay<T, F, Fut>(attempts: u32, delay: Duration, mut op: F) -> Result<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let attempts = attempts.max(1);
    let mut attempt = 1;
    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < attempts => {
                tracing::warn!(
                    attempt,
                    max_attempts = attempts,
                    error = %e,
                    "Attempt failed, retrying in {:?}",
                    delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Connect the PostgreSQL pool, retrying per configuration.
pub async fn connect_with_retry(config: &Config) -> Result<PgPool> {
    let pool = retry_with_delay(
        config.db_connect_attempts,
        config.db_connect_retry_delay,
        |attempt| async move {
            tracing::info!(attempt, "Connecting to database...");
            PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(&config.database_url)
                .await
                .context("Failed to connect to database")
        },
    )
    .await
    .with_context(|| {
        format!(
            "Database unavailable after {} attempts",
            config.db_connect_attempts.max(1)
        )
    })?;

    tracing::info!("Database connected");
    Ok(pool)
}
