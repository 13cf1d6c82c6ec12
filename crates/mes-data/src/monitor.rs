//! Statement logging and timeouts around any [`GenericClient`].
//!
//! Every statement run through [`InstrumentedClient`] emits one `tracing`
//! event on target `mes.sql`:
//! - `debug` with the SQL, parameter count, row count and elapsed time
//! - `warn` instead, when the elapsed time exceeds the slow-query threshold
//! - `error` with the SQL when the statement fails or times out

use crate::client::GenericClient;
use crate::error::{DataError, DataResult};
use std::future::Future;
use std::time::{Duration, Instant};
use tokio_postgres::Row;
use tokio_postgres::types::ToSql;

const TARGET: &str = "mes.sql";

/// Timeout and logging settings for [`InstrumentedClient`].
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Abort statements running longer than this. `None` means no timeout.
    pub query_timeout: Option<Duration>,
    /// Log at `warn` when a statement takes longer than this.
    pub slow_query_threshold: Option<Duration>,
    /// Truncate logged SQL to this many bytes. `None` logs it whole.
    pub max_sql_length: Option<usize>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            query_timeout: None,
            slow_query_threshold: None,
            max_sql_length: Some(200),
        }
    }
}

impl MonitorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query timeout duration.
    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = Some(timeout);
        self
    }

    /// Set the slow query threshold.
    pub fn with_slow_query_threshold(mut self, threshold: Duration) -> Self {
        self.slow_query_threshold = Some(threshold);
        self
    }

    /// Set maximum SQL length to log.
    pub fn max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    /// Log SQL without truncation.
    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }

    fn display_sql(&self, sql: &str) -> String {
        match self.max_sql_length {
            Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
            _ => sql.to_string(),
        }
    }

    fn is_slow(&self, elapsed: Duration) -> bool {
        self.slow_query_threshold.is_some_and(|t| elapsed > t)
    }
}

fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

/// A [`GenericClient`] that logs each statement and enforces a timeout.
///
/// ```ignore
/// let client = InstrumentedClient::new(pool.get().await?)
///     .with_config(MonitorConfig::new().with_slow_query_threshold(Duration::from_millis(250)));
/// let assets = repo::list::<AssetDefinition>(&client, &filter, Page::all()).await?;
/// ```
#[derive(Debug)]
pub struct InstrumentedClient<C> {
    client: C,
    config: MonitorConfig,
}

impl<C: GenericClient> InstrumentedClient<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            config: MonitorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: MonitorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// The wrapped client.
    pub fn inner(&self) -> &C {
        &self.client
    }

    pub fn into_inner(self) -> C {
        self.client
    }

    async fn with_timeout<T, F>(&self, future: F) -> DataResult<T>
    where
        F: Future<Output = DataResult<T>> + Send,
    {
        let Some(limit) = self.config.query_timeout else {
            return future.await;
        };
        match tokio::time::timeout(limit, future).await {
            Ok(result) => result,
            Err(_) => {
                if let Some(cancel_token) = self.client.cancel_token() {
                    tokio::spawn(async move {
                        let _ = cancel_token.cancel_query(tokio_postgres::NoTls).await;
                    });
                }
                Err(DataError::Timeout(limit))
            }
        }
    }

    fn record<T>(
        &self,
        sql: &str,
        param_count: usize,
        started: Instant,
        result: &DataResult<T>,
        rows: impl FnOnce(&T) -> u64,
    ) {
        let elapsed = started.elapsed();
        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
        match result {
            Ok(value) => {
                let rows = rows(value);
                if self.config.is_slow(elapsed) {
                    tracing::warn!(
                        target: TARGET,
                        sql = %self.config.display_sql(sql),
                        param_count,
                        rows,
                        elapsed_ms,
                        "slow query"
                    );
                } else {
                    tracing::debug!(
                        target: TARGET,
                        sql = %self.config.display_sql(sql),
                        param_count,
                        rows,
                        elapsed_ms,
                        "executed query"
                    );
                }
            }
            Err(error) => {
                tracing::error!(
                    target: TARGET,
                    sql = %self.config.display_sql(sql),
                    param_count,
                    elapsed_ms,
                    %error,
                    "query failed"
                );
            }
        }
    }
}

impl<C: GenericClient> GenericClient for InstrumentedClient<C> {
    async fn query(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> DataResult<Vec<Row>> {
        let started = Instant::now();
        let result = self.with_timeout(self.client.query(sql, params)).await;
        self.record(sql, params.len(), started, &result, |rows| rows.len() as u64);
        result
    }

    async fn query_opt(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> DataResult<Option<Row>> {
        let started = Instant::now();
        let result = self.with_timeout(self.client.query_opt(sql, params)).await;
        self.record(sql, params.len(), started, &result, |row| u64::from(row.is_some()));
        result
    }

    async fn execute(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> DataResult<u64> {
        let started = Instant::now();
        let result = self.with_timeout(self.client.execute(sql, params)).await;
        self.record(sql, params.len(), started, &result, |affected| *affected);
        result
    }

    fn cancel_token(&self) -> Option<tokio_postgres::CancelToken> {
        self.client.cancel_token()
    }
}
