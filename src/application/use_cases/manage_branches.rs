use super::input_validation::validate_branch;
use crate::application::dto::{BranchRequest, PageRequest};
use crate::hierarchy::domain::{Branch, BranchDetails, BranchId};
use crate::hierarchy::services::{PageResult, PaginationConfig};
use crate::ports::outbound::BranchRepository;
use crate::shared::{CancelSignal, Result};
use tracing::debug;

/// BranchUseCase - create, list, look up, update and delete branches
///
/// # Type Parameters
/// * `R` - BranchRepository implementation
pub struct BranchUseCase<R> {
    repository: R,
    pagination: PaginationConfig,
}

impl<R: BranchRepository> BranchUseCase<R> {
    pub fn new(repository: R, pagination: PaginationConfig) -> Self {
        Self {
            repository,
            pagination,
        }
    }

    /// Validates the request, builds the branch and stores it
    ///
    /// # Errors
    /// `InvalidArgument` for blank fields or a malformed tax id;
    /// repository failures propagate unchanged.
    pub async fn create(&self, request: BranchRequest, cancel: &CancelSignal) -> Result<Branch> {
        validate_branch(&request)?;
        let branch = Branch::new(request.name, request.neighborhood, request.tax_id)?;
        self.repository.add(branch, cancel).await
    }

    pub async fn get_page(
        &self,
        request: &PageRequest,
        cancel: &CancelSignal,
    ) -> Result<PageResult<BranchDetails>> {
        let query = request.to_query(&self.pagination)?;
        self.repository.get_page(&query, cancel).await
    }

    pub async fn get_by_id(
        &self,
        id: BranchId,
        cancel: &CancelSignal,
    ) -> Result<Option<BranchDetails>> {
        self.repository.get_by_id(id, cancel).await
    }

    /// Replaces name, neighborhood and tax id
    ///
    /// # Returns
    /// `false` when no branch has this id
    pub async fn update(
        &self,
        id: BranchId,
        request: BranchRequest,
        cancel: &CancelSignal,
    ) -> Result<bool> {
        validate_branch(&request)?;

        let Some(BranchDetails { mut branch, .. }) = self.repository.get_by_id(id, cancel).await?
        else {
            debug!(branch_id = %id, "branch not found for update");
            return Ok(false);
        };
        branch.update_data(request.name, request.neighborhood, request.tax_id)?;
        self.repository.update(&branch, cancel).await
    }

    /// Deletes the branch together with its yards and their vehicles
    pub async fn delete(&self, id: BranchId, cancel: &CancelSignal) -> Result<bool> {
        self.repository.delete(id, cancel).await
    }
}
