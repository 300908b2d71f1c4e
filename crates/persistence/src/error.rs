//! Repository error taxonomy.
//!
//! Database failures are classified here so callers can tell a caller mistake
//! (constraint or contract violation) from an outage.

use thiserror::Error;

/// Which kind of integrity constraint rejected a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
    Check,
    NotNull,
}

impl ConstraintKind {
    /// Maps a Postgres SQLSTATE to a constraint kind.
    pub fn from_sqlstate(code: &str) -> Option<Self> {
        match code {
            "23505" => Some(ConstraintKind::Unique),
            "23503" => Some(ConstraintKind::ForeignKey),
            "23514" => Some(ConstraintKind::Check),
            "23502" => Some(ConstraintKind::NotNull),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintKind::Unique => "unique",
            ConstraintKind::ForeignKey => "foreign_key",
            ConstraintKind::Check => "check",
            ConstraintKind::NotNull => "not_null",
        }
    }
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request the repository refuses before any SQL is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("update for {table} contains no fields")]
    EmptyUpdate { table: &'static str },

    #[error("{table} has no column '{column}'")]
    UnknownColumn { table: &'static str, column: String },

    #[error("{table}.{column} cannot be written")]
    ImmutableColumn {
        table: &'static str,
        column: &'static str,
    },

    #[error("{table}.{column} is required")]
    MissingRequired {
        table: &'static str,
        column: &'static str,
    },

    #[error("{table}.{column} cannot be null")]
    NullInRequired {
        table: &'static str,
        column: &'static str,
    },

    #[error("{table}.{column} expects {expected}, got {found}")]
    TypeMismatch {
        table: &'static str,
        column: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{table}.{column} is not a foreign key")]
    NotForeignKey { table: &'static str, column: String },
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("{kind} constraint violated on {table}: {message}")]
    ConstraintViolation {
        table: &'static str,
        kind: ConstraintKind,
        constraint: Option<String>,
        message: String,
    },

    #[error("database unavailable: {0}")]
    Connectivity(#[source] sqlx::Error),

    #[error(transparent)]
    Contract(#[from] ContractViolation),

    #[error("malformed {table} row: {message}")]
    MalformedRow {
        table: &'static str,
        message: String,
    },

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl RepositoryError {
    /// Classifies a driver error raised while working on `table`.
    pub fn from_sqlx(table: &'static str, err: sqlx::Error) -> Self {
        let violation = match &err {
            sqlx::Error::Database(db_err) => db_err
                .code()
                .as_deref()
                .and_then(ConstraintKind::from_sqlstate)
                .map(|kind| RepositoryError::ConstraintViolation {
                    table,
                    kind,
                    constraint: db_err.constraint().map(str::to_string),
                    message: db_err.message().to_string(),
                }),
            _ => None,
        };
        if let Some(violation) = violation {
            return violation;
        }

        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed => RepositoryError::Connectivity(err),
            sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. } => RepositoryError::MalformedRow {
                table,
                message: err.to_string(),
            },
            other => RepositoryError::Database(other),
        }
    }

    /// Short label used for metrics.
    pub fn class(&self) -> &'static str {
        match self {
            RepositoryError::NotFound { .. } => "not_found",
            RepositoryError::ConstraintViolation { .. } => "constraint",
            RepositoryError::Connectivity(_) => "connectivity",
            RepositoryError::Contract(_) => "contract",
            RepositoryError::MalformedRow { .. } => "malformed_row",
            RepositoryError::Database(_) => "database",
        }
    }

    pub fn is_connectivity(&self) -> bool {
        matches!(self, RepositoryError::Connectivity(_))
    }

    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            RepositoryError::ConstraintViolation { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlstate_classification() {
        assert_eq!(
            ConstraintKind::from_sqlstate("23505"),
            Some(ConstraintKind::Unique)
        );
        assert_eq!(
            ConstraintKind::from_sqlstate("23503"),
            Some(ConstraintKind::ForeignKey)
        );
        assert_eq!(
            ConstraintKind::from_sqlstate("23514"),
            Some(ConstraintKind::Check)
        );
        assert_eq!(
            ConstraintKind::from_sqlstate("23502"),
            Some(ConstraintKind::NotNull)
        );
        assert_eq!(ConstraintKind::from_sqlstate("42P01"), None);
    }

    #[test]
    fn test_pool_errors_are_connectivity() {
        let err = RepositoryError::from_sqlx("districts", sqlx::Error::PoolTimedOut);
        assert!(err.is_connectivity());

        let err = RepositoryError::from_sqlx("districts", sqlx::Error::PoolClosed);
        assert!(err.is_connectivity());
    }

    #[test]
    fn test_decode_errors_are_malformed_rows() {
        let err = RepositoryError::from_sqlx(
            "houses",
            sqlx::Error::ColumnNotFound("floors".to_string()),
        );
        assert!(matches!(
            err,
            RepositoryError::MalformedRow { table: "houses", .. }
        ));
    }

    #[test]
    fn test_row_not_found_is_generic() {
        let err = RepositoryError::from_sqlx("houses", sqlx::Error::RowNotFound);
        assert!(matches!(err, RepositoryError::Database(_)));
        assert_eq!(err.constraint_kind(), None);
    }

    #[test]
    fn test_contract_messages() {
        let err: RepositoryError = ContractViolation::MissingRequired {
            table: "streets",
            column: "district_id",
        }
        .into();
        assert_eq!(err.to_string(), "streets.district_id is required");

        let err = ContractViolation::UnknownColumn {
            table: "owners",
            column: "id".to_string(),
        };
        assert_eq!(err.to_string(), "owners has no column 'id'");
    }

    #[test]
    fn test_not_found_message() {
        let err = RepositoryError::NotFound {
            entity: "apartment",
            id: 42,
        };
        assert_eq!(err.to_string(), "apartment 42 not found");
    }
}
