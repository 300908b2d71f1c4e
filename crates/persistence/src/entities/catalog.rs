//! Apartment lookup entities: apartment types, conditions and statuses.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::error::RepositoryError;
use crate::repository::Record;
use crate::schema::{TableSchema, APARTMENT_TYPES, CONDITIONS, STATUSES};

/// Database row mapping for the apartment_types table.
#[derive(Debug, Clone, FromRow)]
pub struct ApartmentTypeEntity {
    pub id: i64,
    pub num_rooms: Option<i32>,
    pub is_furnished: Option<bool>,
    pub description: String,
}

/// Database row mapping for the conditions table.
#[derive(Debug, Clone, FromRow)]
pub struct ConditionEntity {
    pub id: i64,
    pub description: String,
    pub price: f64,
    pub for_sale: bool,
}

/// Database row mapping for the statuses table.
#[derive(Debug, Clone, FromRow)]
pub struct StatusEntity {
    pub id: i64,
    pub date_listed: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl From<ApartmentTypeEntity> for domain::models::ApartmentType {
    fn from(entity: ApartmentTypeEntity) -> Self {
        Self {
            id: entity.id,
            num_rooms: entity.num_rooms,
            is_furnished: entity.is_furnished,
            description: entity.description,
        }
    }
}

impl From<ConditionEntity> for domain::models::Condition {
    fn from(entity: ConditionEntity) -> Self {
        Self {
            id: entity.id,
            description: entity.description,
            price: entity.price,
            for_sale: entity.for_sale,
        }
    }
}

impl From<StatusEntity> for domain::models::Status {
    fn from(entity: StatusEntity) -> Self {
        Self {
            id: entity.id,
            date_listed: entity.date_listed,
            is_active: entity.is_active,
        }
    }
}

impl Record for ApartmentTypeEntity {
    const SCHEMA: &'static TableSchema = &APARTMENT_TYPES;
    type Model = domain::models::ApartmentType;

    fn id(&self) -> i64 {
        self.id
    }

    fn into_model(self) -> Result<Self::Model, RepositoryError> {
        Ok(self.into())
    }
}

impl Record for ConditionEntity {
    const SCHEMA: &'static TableSchema = &CONDITIONS;
    type Model = domain::models::Condition;

    fn id(&self) -> i64 {
        self.id
    }

    fn into_model(self) -> Result<Self::Model, RepositoryError> {
        Ok(self.into())
    }
}

impl Record for StatusEntity {
    const SCHEMA: &'static TableSchema = &STATUSES;
    type Model = domain::models::Status;

    fn id(&self) -> i64 {
        self.id
    }

    fn into_model(self) -> Result<Self::Model, RepositoryError> {
        Ok(self.into())
    }
}
