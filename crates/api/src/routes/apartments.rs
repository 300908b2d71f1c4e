//! Apartment-scoped lookups.

use axum::{
    extract::{Path, State},
    Json,
};
use domain::models::ApartmentPhoto;
use persistence::repositories::{ApartmentPhotoRepository, ApartmentRepository};

use super::resources::{into_models, ListResponse};
use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/v1/apartments/:id/photos
///
/// 404 when the apartment does not exist, otherwise its photos (possibly none).
pub async fn list_apartment_photos(
    State(state): State<AppState>,
    Path(apartment_id): Path<i64>,
) -> Result<Json<ListResponse<ApartmentPhoto>>, ApiError> {
    let apartments = ApartmentRepository::new(state.pool.clone());
    if !apartments.check_connection().await {
        return Err(ApiError::ServiceUnavailable(
            "Database is unavailable".to_string(),
        ));
    }
    apartments.get_required(apartment_id).await?;

    let photos = ApartmentPhotoRepository::new(state.pool.clone())
        .find_by_apartment(apartment_id)
        .await?;

    Ok(Json(into_models(photos)?.into()))
}
