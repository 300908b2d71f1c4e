//! Repositories for every stored entity.
//!
//! All of them are the generic [`Repository`] over a concrete entity; the
//! aliases exist so call sites read like the table they touch.

pub mod apartment_photo;

use crate::entities::*;
use crate::repository::Repository;

pub type AgencyRepository = Repository<AgencyEntity>;
pub type RealtorRepository = Repository<RealtorEntity>;
pub type OwnerRepository = Repository<OwnerEntity>;
pub type BuyerRepository = Repository<BuyerEntity>;
pub type DistrictRepository = Repository<DistrictEntity>;
pub type StreetRepository = Repository<StreetEntity>;
pub type HouseTypeRepository = Repository<HouseTypeEntity>;
pub type HouseRepository = Repository<HouseEntity>;
pub type ApartmentTypeRepository = Repository<ApartmentTypeEntity>;
pub type ConditionRepository = Repository<ConditionEntity>;
pub type StatusRepository = Repository<StatusEntity>;
pub type ApartmentRepository = Repository<ApartmentEntity>;
pub type ApartmentPhotoRepository = Repository<ApartmentPhotoEntity>;
pub type SaleRepository = Repository<SaleEntity>;
pub type SalesRentRepository = Repository<SalesRentEntity>;
pub type AnalyticsRepository = Repository<AnalyticsEventEntity>;
