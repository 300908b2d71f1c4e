//! Database connection pool management.

use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};
use std::time::Duration;
use tracing::info;

/// Database configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Postgres schema holding the realty tables; applied as `search_path`.
    /// Must be a plain lowercase identifier.
    pub schema: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("invalid schema name '{0}'")]
    InvalidSchema(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Creates a PostgreSQL connection pool with the given configuration.
///
/// Every connection gets `search_path` set to the configured schema, so
/// repositories use unqualified table names.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, PoolError> {
    let set_search_path = search_path_statement(&config.schema)?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .after_connect(move |conn, _meta| {
            let statement = set_search_path.clone();
            Box::pin(async move {
                conn.execute(statement.as_str()).await?;
                Ok(())
            })
        })
        .connect(&config.url)
        .await?;

    info!(schema = %config.schema, "Database pool created");
    Ok(pool)
}

/// Creates the configured schema if it does not exist yet. Run before
/// migrations so they land in the right place.
pub async fn ensure_schema(pool: &PgPool, schema: &str) -> Result<(), PoolError> {
    if !shared::validation::is_sql_identifier(schema) {
        return Err(PoolError::InvalidSchema(schema.to_string()));
    }
    pool.execute(format!("CREATE SCHEMA IF NOT EXISTS {schema}").as_str())
        .await?;
    Ok(())
}

fn search_path_statement(schema: &str) -> Result<String, PoolError> {
    if !shared::validation::is_sql_identifier(schema) {
        return Err(PoolError::InvalidSchema(schema.to_string()));
    }
    Ok(format!("SET search_path TO {schema}, public"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_path_statement() {
        assert_eq!(
            search_path_statement("realty").unwrap(),
            "SET search_path TO realty, public"
        );
    }

    #[test]
    fn test_search_path_rejects_injection() {
        let err = search_path_statement("realty; DROP TABLE owners").unwrap_err();
        assert!(matches!(err, PoolError::InvalidSchema(_)));
    }
}
