//! Location hierarchy entities: districts, streets, house types and houses.

use sqlx::FromRow;

use crate::error::RepositoryError;
use crate::repository::Record;
use crate::schema::{TableSchema, DISTRICTS, HOUSES, HOUSE_TYPES, STREETS};

/// Database row mapping for the districts table.
#[derive(Debug, Clone, FromRow)]
pub struct DistrictEntity {
    pub id: i64,
    pub name: String,
}

/// Database row mapping for the streets table.
#[derive(Debug, Clone, FromRow)]
pub struct StreetEntity {
    pub id: i64,
    pub district_id: i64,
    pub name: String,
}

/// Database row mapping for the house_types table.
#[derive(Debug, Clone, FromRow)]
pub struct HouseTypeEntity {
    pub id: i64,
    pub description: String,
    #[sqlx(rename = "type")]
    pub kind: Option<String>,
}

/// Database row mapping for the houses table.
#[derive(Debug, Clone, FromRow)]
pub struct HouseEntity {
    pub id: i64,
    pub street_id: i64,
    pub house_number: String,
    pub type_id: i64,
    pub floors: Option<i32>,
}

impl From<DistrictEntity> for domain::models::District {
    fn from(entity: DistrictEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

impl From<StreetEntity> for domain::models::Street {
    fn from(entity: StreetEntity) -> Self {
        Self {
            id: entity.id,
            district_id: entity.district_id,
            name: entity.name,
        }
    }
}

impl From<HouseTypeEntity> for domain::models::HouseType {
    fn from(entity: HouseTypeEntity) -> Self {
        Self {
            id: entity.id,
            description: entity.description,
            kind: entity.kind,
        }
    }
}

impl From<HouseEntity> for domain::models::House {
    fn from(entity: HouseEntity) -> Self {
        Self {
            id: entity.id,
            street_id: entity.street_id,
            house_number: entity.house_number,
            type_id: entity.type_id,
            floors: entity.floors,
        }
    }
}

impl Record for DistrictEntity {
    const SCHEMA: &'static TableSchema = &DISTRICTS;
    type Model = domain::models::District;

    fn id(&self) -> i64 {
        self.id
    }

    fn into_model(self) -> Result<Self::Model, RepositoryError> {
        Ok(self.into())
    }
}

impl Record for StreetEntity {
    const SCHEMA: &'static TableSchema = &STREETS;
    type Model = domain::models::Street;

    fn id(&self) -> i64 {
        self.id
    }

    fn into_model(self) -> Result<Self::Model, RepositoryError> {
        Ok(self.into())
    }
}

impl Record for HouseTypeEntity {
    const SCHEMA: &'static TableSchema = &HOUSE_TYPES;
    type Model = domain::models::HouseType;

    fn id(&self) -> i64 {
        self.id
    }

    fn into_model(self) -> Result<Self::Model, RepositoryError> {
        Ok(self.into())
    }
}

impl Record for HouseEntity {
    const SCHEMA: &'static TableSchema = &HOUSES;
    type Model = domain::models::House;

    fn id(&self) -> i64 {
        self.id
    }

    fn into_model(self) -> Result<Self::Model, RepositoryError> {
        Ok(self.into())
    }
}
