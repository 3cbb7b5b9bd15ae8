use crate::hierarchy::domain::{Yard, YardDetails, YardId, YardSortField};
use crate::hierarchy::services::{PageQuery, PageResult};
use crate::shared::{CancelSignal, Result};
use async_trait::async_trait;

/// YardRepository port
///
/// Reads eager-load the owning branch and the yard's vehicles. Writes fail
/// with `Persistence` when the owning branch does not exist.
#[async_trait]
pub trait YardRepository: Send + Sync {
    async fn add(&self, yard: Yard, cancel: &CancelSignal) -> Result<Yard>;

    async fn get_by_id(&self, id: YardId, cancel: &CancelSignal) -> Result<Option<YardDetails>>;

    async fn get_page(
        &self,
        query: &PageQuery<YardSortField>,
        cancel: &CancelSignal,
    ) -> Result<PageResult<YardDetails>>;

    /// `false` when the id is unknown.
    async fn update(&self, yard: &Yard, cancel: &CancelSignal) -> Result<bool>;

    /// Deletes the yard and its vehicles; `false` when absent.
    async fn delete(&self, id: YardId, cancel: &CancelSignal) -> Result<bool>;
}
