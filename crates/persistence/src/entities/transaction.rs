//! Transaction entities: sales, sales_rent and analytics events.

use chrono::{DateTime, Utc};
use domain::models::TransactionTerms;
use sqlx::FromRow;

use crate::error::RepositoryError;
use crate::repository::Record;
use crate::schema::{TableSchema, ANALYTICS, SALES, SALES_RENT};

/// Database row mapping for the sales table.
#[derive(Debug, Clone, FromRow)]
pub struct SaleEntity {
    pub id: i64,
    pub apartment_id: i64,
    pub buyer_id: i64,
    pub seller_id: i64,
    pub realtor_id: i64,
    pub sale_date: DateTime<Utc>,
    pub sale_price: f64,
    pub commission: f64,
    pub profit: f64,
}

/// Database row mapping for the sales_rent table.
///
/// Sale and rental columns are all nullable here; `kind` decides which set
/// is populated.
#[derive(Debug, Clone, FromRow)]
pub struct SalesRentEntity {
    pub id: i64,
    pub apartment_id: i64,
    pub renter_id: i64,
    pub owner_id: i64,
    pub realtor_id: i64,
    pub kind: String,
    pub sale_date: Option<DateTime<Utc>>,
    pub sale_price: Option<f64>,
    pub rent_start: Option<DateTime<Utc>>,
    pub rent_end: Option<DateTime<Utc>>,
    pub rent_price: Option<f64>,
    pub commission: f64,
    pub profit: f64,
}

/// Database row mapping for the analytics table.
#[derive(Debug, Clone, FromRow)]
pub struct AnalyticsEventEntity {
    pub id: i64,
    pub buyer_id: i64,
    pub apartment_id: i64,
    pub event_type: String,
    pub event_timestamp: DateTime<Utc>,
}

impl From<SaleEntity> for domain::models::Sale {
    fn from(entity: SaleEntity) -> Self {
        Self {
            id: entity.id,
            apartment_id: entity.apartment_id,
            buyer_id: entity.buyer_id,
            seller_id: entity.seller_id,
            realtor_id: entity.realtor_id,
            sale_date: entity.sale_date,
            sale_price: entity.sale_price,
            commission: entity.commission,
            profit: entity.profit,
        }
    }
}

impl TryFrom<SalesRentEntity> for domain::models::SalesRent {
    type Error = domain::models::TransactionError;

    fn try_from(entity: SalesRentEntity) -> Result<Self, Self::Error> {
        let terms = TransactionTerms::from_columns(
            &entity.kind,
            entity.sale_date,
            entity.sale_price,
            entity.rent_start,
            entity.rent_end,
            entity.rent_price,
        )?;
        Ok(Self {
            id: entity.id,
            apartment_id: entity.apartment_id,
            renter_id: entity.renter_id,
            owner_id: entity.owner_id,
            realtor_id: entity.realtor_id,
            commission: entity.commission,
            profit: entity.profit,
            terms,
        })
    }
}

impl From<AnalyticsEventEntity> for domain::models::AnalyticsEvent {
    fn from(entity: AnalyticsEventEntity) -> Self {
        Self {
            id: entity.id,
            buyer_id: entity.buyer_id,
            apartment_id: entity.apartment_id,
            event_type: entity.event_type,
            event_timestamp: entity.event_timestamp,
        }
    }
}

impl Record for SaleEntity {
    const SCHEMA: &'static TableSchema = &SALES;
    type Model = domain::models::Sale;

    fn id(&self) -> i64 {
        self.id
    }

    fn into_model(self) -> Result<Self::Model, RepositoryError> {
        Ok(self.into())
    }
}

impl Record for SalesRentEntity {
    const SCHEMA: &'static TableSchema = &SALES_RENT;
    type Model = domain::models::SalesRent;

    fn id(&self) -> i64 {
        self.id
    }

    fn into_model(self) -> Result<Self::Model, RepositoryError> {
        let id = self.id;
        domain::models::SalesRent::try_from(self).map_err(|err| RepositoryError::MalformedRow {
            table: SALES_RENT.table,
            message: format!("row {id}: {err}"),
        })
    }
}

impl Record for AnalyticsEventEntity {
    const SCHEMA: &'static TableSchema = &ANALYTICS;
    type Model = domain::models::AnalyticsEvent;

    fn id(&self) -> i64 {
        self.id
    }

    fn into_model(self) -> Result<Self::Model, RepositoryError> {
        Ok(self.into())
    }
}
