//! Photo lookups scoped to an apartment.

use crate::entities::ApartmentPhotoEntity;
use crate::error::RepositoryError;
use crate::repository::Repository;

impl Repository<ApartmentPhotoEntity> {
    /// All photos of one apartment, oldest first. Empty when the apartment has
    /// none or does not exist.
    pub async fn find_by_apartment(
        &self,
        apartment_id: i64,
    ) -> Result<Vec<ApartmentPhotoEntity>, RepositoryError> {
        self.list_by("apartment_id", apartment_id).await
    }
}
