//! Row mappings for the account tables: realtors, owners and buyers.

use chrono::NaiveDate;
use domain::models::Account;
use sqlx::FromRow;

use crate::error::RepositoryError;
use crate::repository::Record;
use crate::schema::{BUYERS, OWNERS, REALTORS};

/// Database row mapping for the realtors table.
#[derive(Debug, Clone, FromRow)]
pub struct RealtorEntity {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub name: String,
    pub contact_info: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub agency_id: i64,
}

/// Database row mapping for the owners table.
#[derive(Debug, Clone, FromRow)]
pub struct OwnerEntity {
    pub owners_id: i64,
    pub username: String,
    pub password: String,
    pub name: String,
    pub contact_info: String,
    pub birth_date: NaiveDate,
    pub gender: String,
}

/// Database row mapping for the buyers table.
#[derive(Debug, Clone, FromRow)]
pub struct BuyerEntity {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub name: String,
    pub contact_info: String,
    pub birth_date: NaiveDate,
    pub gender: String,
}

macro_rules! account_of {
    ($entity:expr) => {
        Account {
            username: $entity.username,
            password_hash: $entity.password,
            name: $entity.name,
            contact_info: $entity.contact_info,
            birth_date: $entity.birth_date,
            gender: $entity.gender,
        }
    };
}

impl From<RealtorEntity> for domain::models::Realtor {
    fn from(entity: RealtorEntity) -> Self {
        Self {
            id: entity.id,
            agency_id: entity.agency_id,
            account: account_of!(entity),
        }
    }
}

impl From<OwnerEntity> for domain::models::Owner {
    fn from(entity: OwnerEntity) -> Self {
        Self {
            owners_id: entity.owners_id,
            account: account_of!(entity),
        }
    }
}

impl From<BuyerEntity> for domain::models::Buyer {
    fn from(entity: BuyerEntity) -> Self {
        Self {
            id: entity.id,
            account: account_of!(entity),
        }
    }
}

impl Record for RealtorEntity {
    const SCHEMA: &'static crate::schema::TableSchema = &REALTORS;
    type Model = domain::models::Realtor;

    fn id(&self) -> i64 {
        self.id
    }

    fn into_model(self) -> Result<Self::Model, RepositoryError> {
        Ok(self.into())
    }
}

impl Record for OwnerEntity {
    const SCHEMA: &'static crate::schema::TableSchema = &OWNERS;
    type Model = domain::models::Owner;

    fn id(&self) -> i64 {
        self.owners_id
    }

    fn into_model(self) -> Result<Self::Model, RepositoryError> {
        Ok(self.into())
    }
}

impl Record for BuyerEntity {
    const SCHEMA: &'static crate::schema::TableSchema = &BUYERS;
    type Model = domain::models::Buyer;

    fn id(&self) -> i64 {
        self.id
    }

    fn into_model(self) -> Result<Self::Model, RepositoryError> {
        Ok(self.into())
    }
}
