use super::input_validation::validate_yard;
use crate::application::dto::{PageRequest, YardRequest};
use crate::hierarchy::domain::{Yard, YardDetails, YardId};
use crate::hierarchy::services::{PageResult, PaginationConfig};
use crate::ports::outbound::YardRepository;
use crate::shared::{CancelSignal, Result};
use tracing::debug;

/// YardUseCase - create, list, look up, update and delete yards
///
/// # Type Parameters
/// * `R` - YardRepository implementation
pub struct YardUseCase<R> {
    repository: R,
    pagination: PaginationConfig,
}

impl<R: YardRepository> YardUseCase<R> {
    pub fn new(repository: R, pagination: PaginationConfig) -> Self {
        Self {
            repository,
            pagination,
        }
    }

    /// Validates the request, builds the yard and stores it under its branch
    ///
    /// # Errors
    /// `InvalidArgument` for a blank name or a non-positive capacity;
    /// `Persistence` when the branch does not exist.
    pub async fn create(&self, request: YardRequest, cancel: &CancelSignal) -> Result<Yard> {
        validate_yard(&request)?;
        let yard = Yard::new(request.name, request.vehicle_capacity, request.branch_id)?;
        self.repository.add(yard, cancel).await
    }

    pub async fn get_page(
        &self,
        request: &PageRequest,
        cancel: &CancelSignal,
    ) -> Result<PageResult<YardDetails>> {
        let query = request.to_query(&self.pagination)?;
        self.repository.get_page(&query, cancel).await
    }

    pub async fn get_by_id(&self, id: YardId, cancel: &CancelSignal) -> Result<Option<YardDetails>> {
        self.repository.get_by_id(id, cancel).await
    }

    /// Replaces name and capacity; `request.branch_id` is ignored.
    ///
    /// # Returns
    /// `false` when no yard has this id
    pub async fn update(
        &self,
        id: YardId,
        request: YardRequest,
        cancel: &CancelSignal,
    ) -> Result<bool> {
        validate_yard(&request)?;

        let Some(YardDetails { mut yard, .. }) = self.repository.get_by_id(id, cancel).await? else {
            debug!(yard_id = %id, "yard not found for update");
            return Ok(false);
        };
        yard.update_data(request.name, request.vehicle_capacity)?;
        self.repository.update(&yard, cancel).await
    }

    /// Deletes the yard together with its vehicles
    pub async fn delete(&self, id: YardId, cancel: &CancelSignal) -> Result<bool> {
        self.repository.delete(id, cancel).await
    }
}
