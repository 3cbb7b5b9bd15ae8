use crate::hierarchy::domain::{Branch, BranchDetails, BranchId, BranchSortField};
use crate::hierarchy::services::{PageQuery, PageResult};
use crate::shared::{CancelSignal, Result};
use async_trait::async_trait;

/// BranchRepository port for persisting and querying branches
///
/// Reads eager-load each branch's yards. Deleting a branch removes its
/// yards and their vehicles in the same unit of work.
///
/// # Cancellation
/// Every method takes a [`CancelSignal`]. A cancelled call returns
/// `HiveError::Cancelled` and leaves storage unchanged.
#[async_trait]
pub trait BranchRepository: Send + Sync {
    /// Persists a new, already validated branch.
    ///
    /// # Errors
    /// `Persistence` if the store rejects the write.
    async fn add(&self, branch: Branch, cancel: &CancelSignal) -> Result<Branch>;

    /// Point lookup; `Ok(None)` when the id does not exist.
    async fn get_by_id(&self, id: BranchId, cancel: &CancelSignal)
        -> Result<Option<BranchDetails>>;

    /// Filtered, sorted, sliced listing.
    async fn get_page(
        &self,
        query: &PageQuery<BranchSortField>,
        cancel: &CancelSignal,
    ) -> Result<PageResult<BranchDetails>>;

    /// Overwrites the stored branch with the same id.
    ///
    /// # Returns
    /// `false` when no stored row was affected (the id is unknown).
    async fn update(&self, branch: &Branch, cancel: &CancelSignal) -> Result<bool>;

    /// Deletes the branch and everything it owns; `false` when absent.
    async fn delete(&self, id: BranchId, cancel: &CancelSignal) -> Result<bool>;
}
