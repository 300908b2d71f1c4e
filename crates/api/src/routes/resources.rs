//! Generic CRUD routes shared by every stored entity.
//!
//! A [`Resource`] ties a URL segment to a row type and its request bodies;
//! [`resource_routes`] mounts list/get/create/update/delete for it.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use domain::fields::{FieldMap, FieldValue, IntoFieldMap};
use domain::models::PASSWORD_COLUMN;
use persistence::{Record, Repository};
use serde::{de::DeserializeOwned, Serialize};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::middleware::metrics::record_resource_write;

/// One entity exposed under `/api/v1/<PATH>`.
pub trait Resource: Send + Sync + 'static {
    type Entity: Record<Model = Self::Model>;
    type Model: Serialize + Send + 'static;
    type Create: DeserializeOwned + Validate + IntoFieldMap + Send + 'static;
    type Update: DeserializeOwned + Validate + IntoFieldMap + Send + 'static;

    /// Plural, kebab-case URL segment, e.g. `house-types`.
    const PATH: &'static str;

    /// Last chance to rewrite a validated payload before it reaches the
    /// repository. Runs for both create and update.
    fn prepare(_fields: &mut FieldMap) -> Result<(), ApiError> {
        Ok(())
    }
}

/// List envelope.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub count: usize,
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Replaces a clear-text `password` with its Argon2 hash.
pub fn hash_password_field(fields: &mut FieldMap) -> Result<(), ApiError> {
    let hash = match fields.get(PASSWORD_COLUMN) {
        Some(FieldValue::Text(plain)) => shared::password::hash_password(plain)?,
        _ => return Ok(()),
    };
    fields.set(PASSWORD_COLUMN, hash);
    Ok(())
}

fn repository<R: Resource>(state: &AppState) -> Repository<R::Entity> {
    Repository::new(state.pool.clone())
}

/// Reads answer 503 up front when the store is unreachable.
async fn ensure_reachable<E: Record>(repo: &Repository<E>) -> Result<(), ApiError> {
    if repo.check_connection().await {
        Ok(())
    } else {
        Err(ApiError::ServiceUnavailable(
            "Database is unavailable".to_string(),
        ))
    }
}

fn not_found<R: Resource>(id: i64) -> ApiError {
    ApiError::NotFound(format!(
        "{} {} not found",
        <R::Entity as Record>::SCHEMA.entity,
        id
    ))
}

pub(crate) fn into_models<E: Record>(rows: Vec<E>) -> Result<Vec<E::Model>, ApiError> {
    rows.into_iter()
        .map(|row| row.into_model().map_err(ApiError::from))
        .collect()
}

/// GET /api/v1/<plural>
pub async fn list<R: Resource>(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<R::Model>>, ApiError> {
    let repo = repository::<R>(&state);
    ensure_reachable(&repo).await?;

    let rows = repo.list().await?;
    Ok(Json(into_models(rows)?.into()))
}

/// GET /api/v1/<plural>/:id
pub async fn get_one<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<R::Model>, ApiError> {
    let repo = repository::<R>(&state);
    ensure_reachable(&repo).await?;

    let row = repo.get(id).await?.ok_or_else(|| not_found::<R>(id))?;
    Ok(Json(row.into_model()?))
}

/// POST /api/v1/<plural>
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<R::Create>,
) -> Result<(StatusCode, Json<R::Model>), ApiError> {
    let mut fields = request.into_field_map();
    R::prepare(&mut fields)?;

    let row = repository::<R>(&state).insert(fields).await?;
    let id = row.id();

    info!(resource = R::PATH, id = id, "Resource created");
    record_resource_write(R::PATH, "create");

    Ok((StatusCode::CREATED, Json(row.into_model()?)))
}

/// PATCH /api/v1/<plural>/:id
///
/// Only the supplied fields change. An empty body is rejected.
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<R::Update>,
) -> Result<Json<R::Model>, ApiError> {
    let mut fields = request.into_field_map();
    R::prepare(&mut fields)?;
    let changed: Vec<String> = fields.columns().map(str::to_string).collect();

    let row = repository::<R>(&state)
        .update(id, fields)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;

    info!(resource = R::PATH, id = id, fields = ?changed, "Resource updated");
    record_resource_write(R::PATH, "update");

    Ok(Json(row.into_model()?))
}

/// DELETE /api/v1/<plural>/:id
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if !repository::<R>(&state).delete(id).await? {
        return Err(not_found::<R>(id));
    }

    info!(resource = R::PATH, id = id, "Resource deleted");
    record_resource_write(R::PATH, "delete");

    Ok(StatusCode::NO_CONTENT)
}

/// Mounts the five CRUD routes of `R`.
pub fn resource_routes<R: Resource>() -> Router<AppState> {
    let collection = format!("/api/v1/{}", R::PATH);
    let item = format!("{collection}/:id");

    Router::new()
        .route(&collection, get(list::<R>).post(create::<R>))
        .route(
            &item,
            get(get_one::<R>).patch(update::<R>).delete(delete::<R>),
        )
}
