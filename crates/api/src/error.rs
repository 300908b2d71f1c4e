use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use persistence::{ConstraintKind, RepositoryError};
use serde::Serialize;
use shared::password::PasswordError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Validation error: {} invalid fields", .0.len())]
    InvalidFields(Vec<ValidationDetail>),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<ValidationDetail>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationDetail {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg, None),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg, None),
            ApiError::InvalidFields(details) => {
                let message = if details.len() == 1 {
                    details[0].message.clone()
                } else {
                    format!("{} validation errors", details.len())
                };
                (
                    StatusCode::BAD_REQUEST,
                    "validation_error",
                    message,
                    Some(details),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".into(),
                    None,
                )
            }
            ApiError::ServiceUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "service_unavailable",
                msg,
                None,
            ),
        };

        let body = ErrorBody {
            error: error_code.into(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            RepositoryError::ConstraintViolation {
                kind: ConstraintKind::NotNull,
                ref message,
                ..
            } => ApiError::Validation(message.clone()),
            RepositoryError::ConstraintViolation {
                table,
                kind,
                ref constraint,
                ..
            } => ApiError::Conflict(conflict_message(table, kind, constraint.as_deref())),
            RepositoryError::Contract(violation) => ApiError::Validation(violation.to_string()),
            RepositoryError::Connectivity(_) => {
                tracing::warn!(error = %err, "Database unreachable");
                ApiError::ServiceUnavailable("Database is unavailable".into())
            }
            RepositoryError::MalformedRow { .. } | RepositoryError::Database(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

fn conflict_message(table: &str, kind: ConstraintKind, constraint: Option<&str>) -> String {
    let reason = match kind {
        ConstraintKind::Unique => "a row with the same unique values already exists",
        ConstraintKind::ForeignKey => {
            "the row references a missing record or is still referenced by others"
        }
        _ => "the values break a table rule",
    };
    match constraint {
        Some(name) => format!("{table}: {reason} ({name})"),
        None => format!("{table}: {reason}"),
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut details = Vec::new();
        collect_details(None, &errors, &mut details);
        ApiError::InvalidFields(details)
    }
}

/// Flattens field errors, descending into nested structs such as account
/// columns. Struct-level errors are reported under `__all__`.
fn collect_details(
    prefix: Option<&str>,
    errors: &validator::ValidationErrors,
    out: &mut Vec<ValidationDetail>,
) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };
        match kind {
            ValidationErrorsKind::Field(errors) => {
                out.extend(errors.iter().map(|e| ValidationDetail {
                    field: path.clone(),
                    message: e
                        .message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                }));
            }
            ValidationErrorsKind::Struct(nested) => {
                // Flattened account columns keep their own names.
                let prefix = (*field != "account").then_some(path.as_str());
                collect_details(prefix, nested, out);
            }
            ValidationErrorsKind::List(items) => {
                for (idx, nested) in items {
                    collect_details(Some(&format!("{path}[{idx}]")), nested, out);
                }
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        ApiError::Internal(format!("Password hashing failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use persistence::ContractViolation;
    use validator::Validate;

    #[test]
    fn test_api_error_not_found() {
        let error = ApiError::NotFound("resource not found".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_api_error_conflict() {
        let error = ApiError::Conflict("already exists".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_api_error_validation() {
        let error = ApiError::Validation("invalid input".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_api_error_internal() {
        let error = ApiError::Internal("database connection failed".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_api_error_service_unavailable() {
        let error = ApiError::ServiceUnavailable("maintenance".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            format!("{}", ApiError::NotFound("test".to_string())),
            "Not found: test"
        );
        assert_eq!(
            format!("{}", ApiError::Conflict("test".to_string())),
            "Conflict: test"
        );
        assert_eq!(
            format!("{}", ApiError::Validation("test".to_string())),
            "Validation error: test"
        );
        assert_eq!(
            format!("{}", ApiError::Internal("test".to_string())),
            "Internal error: test"
        );
    }

    fn constraint(kind: ConstraintKind) -> RepositoryError {
        RepositoryError::ConstraintViolation {
            table: "realtors",
            kind,
            constraint: Some("realtors_username_key".into()),
            message: "duplicate key value".into(),
        }
    }

    #[test]
    fn test_repository_not_found_maps_to_404() {
        let error: ApiError = RepositoryError::NotFound {
            entity: "street",
            id: 9,
        }
        .into();
        assert!(matches!(&error, ApiError::NotFound(msg) if msg == "street 9 not found"));
    }

    #[test]
    fn test_constraint_violations_map_to_conflict() {
        for kind in [
            ConstraintKind::Unique,
            ConstraintKind::ForeignKey,
            ConstraintKind::Check,
        ] {
            let response = ApiError::from(constraint(kind)).into_response();
            assert_eq!(response.status(), StatusCode::CONFLICT, "{kind}");
        }
    }

    #[test]
    fn test_not_null_violation_is_bad_request() {
        let response = ApiError::from(constraint(ConstraintKind::NotNull)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_message_names_constraint() {
        let error = ApiError::from(constraint(ConstraintKind::Unique));
        match error {
            ApiError::Conflict(msg) => {
                assert!(msg.starts_with("realtors:"));
                assert!(msg.contains("realtors_username_key"));
            }
            other => panic!("Expected Conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_contract_violation_is_bad_request() {
        let error: ApiError = RepositoryError::Contract(ContractViolation::EmptyUpdate {
            table: "districts",
        })
        .into();
        assert!(
            matches!(&error, ApiError::Validation(msg) if msg == "update for districts contains no fields")
        );
    }

    #[test]
    fn test_connectivity_is_service_unavailable() {
        let error: ApiError = RepositoryError::Connectivity(sqlx::Error::PoolTimedOut).into();
        assert_eq!(
            error.into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_database_error_is_hidden() {
        let error: ApiError = RepositoryError::Database(sqlx::Error::RowNotFound).into();
        assert!(matches!(error, ApiError::Internal(_)));
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Name must not be empty"))]
        name: String,
        #[validate(range(min = 1, message = "id must be positive"))]
        parent_id: i64,
    }

    #[test]
    fn test_validation_errors_become_details() {
        let errors = Sample {
            name: String::new(),
            parent_id: 0,
        }
        .validate()
        .unwrap_err();

        match ApiError::from(errors) {
            ApiError::InvalidFields(details) => {
                assert_eq!(details.len(), 2);
                assert!(details
                    .iter()
                    .any(|d| d.field == "name" && d.message == "Name must not be empty"));
            }
            other => panic!("Expected InvalidFields, got {other:?}"),
        }
    }

    #[test]
    fn test_single_invalid_field_uses_its_message() {
        let errors = Sample {
            name: "ok".into(),
            parent_id: 0,
        }
        .validate()
        .unwrap_err();

        let response = ApiError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_detail() {
        let detail = ValidationDetail {
            field: "username".to_string(),
            message: "Username must be 3-50 characters".to_string(),
        };
        assert_eq!(detail.field, "username");
    }
}
