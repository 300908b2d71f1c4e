//! Agency entity (database row mapping).

use sqlx::FromRow;

use crate::error::RepositoryError;
use crate::repository::Record;
use crate::schema::{TableSchema, AGENCIES};

/// Database row mapping for the agencies table.
#[derive(Debug, Clone, FromRow)]
pub struct AgencyEntity {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub contact_info: String,
    pub commission_rate: Option<f64>,
}

impl From<AgencyEntity> for domain::models::Agency {
    fn from(entity: AgencyEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            contact_info: entity.contact_info,
            commission_rate: entity.commission_rate,
        }
    }
}

impl Record for AgencyEntity {
    const SCHEMA: &'static TableSchema = &AGENCIES;
    type Model = domain::models::Agency;

    fn id(&self) -> i64 {
        self.id
    }

    fn into_model(self) -> Result<Self::Model, RepositoryError> {
        Ok(self.into())
    }
}
