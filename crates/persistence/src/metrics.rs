//! Database metrics collection.
//!
//! Provides functions for recording database-related metrics.

use metrics::{counter, gauge, histogram};
use sqlx::PgPool;
use std::time::Instant;

/// Record the duration of one repository operation.
pub fn record_query_duration(table: &'static str, operation: &'static str, duration_secs: f64) {
    histogram!(
        "database_query_duration_seconds",
        "table" => table,
        "operation" => operation
    )
    .record(duration_secs);
}

/// Count a failed repository operation by error class.
pub fn record_query_error(table: &'static str, operation: &'static str, class: &'static str) {
    counter!(
        "database_query_errors_total",
        "table" => table,
        "operation" => operation,
        "class" => class
    )
    .increment(1);
}

/// Record database connection pool metrics.
///
/// Called from the readiness probe to track pool health.
pub fn record_pool_metrics(pool: &PgPool) {
    let size = pool.size() as usize;
    let idle = pool.num_idle();
    let active = size.saturating_sub(idle);

    gauge!("database_connections_active").set(active as f64);
    gauge!("database_connections_idle").set(idle as f64);
    gauge!("database_connections_total").set(size as f64);
}

/// Times one repository operation.
///
/// ```ignore
/// let timer = QueryTimer::new("apartments", "get");
/// let result = builder.build_query_as::<ApartmentEntity>().fetch_optional(&pool).await;
/// timer.record();
/// ```
pub struct QueryTimer {
    table: &'static str,
    operation: &'static str,
    start: Instant,
}

impl QueryTimer {
    pub fn new(table: &'static str, operation: &'static str) -> Self {
        Self {
            table,
            operation,
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to metrics.
    pub fn record(self) {
        let duration = self.start.elapsed().as_secs_f64();
        record_query_duration(self.table, self.operation, duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_timer_labels() {
        let timer = QueryTimer::new("districts", "list");
        assert_eq!(timer.table, "districts");
        assert_eq!(timer.operation, "list");
    }

    #[test]
    fn test_record_without_recorder_is_noop() {
        QueryTimer::new("streets", "insert").record();
        record_query_error("streets", "insert", "constraint");
    }
}
