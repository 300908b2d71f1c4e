//! Apartment and apartment photo entities.

use sqlx::FromRow;

use crate::error::RepositoryError;
use crate::repository::Record;
use crate::schema::{TableSchema, APARTMENTS, APARTMENT_PHOTOS};

/// Database row mapping for the apartments table.
#[derive(Debug, Clone, FromRow)]
pub struct ApartmentEntity {
    pub id: i64,
    pub house_id: Option<i64>,
    pub apartment_type_id: i64,
    pub owner_id: Option<i64>,
    pub condition_id: Option<i64>,
    pub status_id: Option<i64>,
    pub apartment_number: String,
    pub square_meters: f64,
    pub owner_price: f64,
    pub description: Option<String>,
}

/// Database row mapping for the apartment_photos table.
#[derive(Debug, Clone, FromRow)]
pub struct ApartmentPhotoEntity {
    pub id: i64,
    pub apartment_id: i64,
    pub photo_url: String,
}

impl From<ApartmentEntity> for domain::models::Apartment {
    fn from(entity: ApartmentEntity) -> Self {
        Self {
            id: entity.id,
            house_id: entity.house_id,
            apartment_type_id: entity.apartment_type_id,
            owner_id: entity.owner_id,
            condition_id: entity.condition_id,
            status_id: entity.status_id,
            apartment_number: entity.apartment_number,
            square_meters: entity.square_meters,
            owner_price: entity.owner_price,
            description: entity.description,
        }
    }
}

impl From<ApartmentPhotoEntity> for domain::models::ApartmentPhoto {
    fn from(entity: ApartmentPhotoEntity) -> Self {
        Self {
            id: entity.id,
            apartment_id: entity.apartment_id,
            photo_url: entity.photo_url,
        }
    }
}

impl Record for ApartmentEntity {
    const SCHEMA: &'static TableSchema = &APARTMENTS;
    type Model = domain::models::Apartment;

    fn id(&self) -> i64 {
        self.id
    }

    fn into_model(self) -> Result<Self::Model, RepositoryError> {
        Ok(self.into())
    }
}

impl Record for ApartmentPhotoEntity {
    const SCHEMA: &'static TableSchema = &APARTMENT_PHOTOS;
    type Model = domain::models::ApartmentPhoto;

    fn id(&self) -> i64 {
        self.id
    }

    fn into_model(self) -> Result<Self::Model, RepositoryError> {
        Ok(self.into())
    }
}
