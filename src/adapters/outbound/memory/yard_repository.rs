use super::arena::InMemoryStore;
use crate::hierarchy::domain::{Yard, YardDetails, YardId, YardSortField};
use crate::hierarchy::services::{paginate, PageQuery, PageResult};
use crate::ports::outbound::YardRepository;
use crate::shared::{CancelSignal, HiveError, Result};
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// In-memory implementation of the YardRepository port
#[derive(Debug, Clone)]
pub struct InMemoryYardRepository {
    store: InMemoryStore,
}

impl InMemoryYardRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl YardRepository for InMemoryYardRepository {
    async fn add(&self, yard: Yard, cancel: &CancelSignal) -> Result<Yard> {
        let mut arena = self.store.write().await;
        cancel.check()?;

        if let Err(e) = arena.require_branch(yard.branch_id()) {
            warn!(yard = yard.name(), error = %e, "yard rejected");
            return Err(e);
        }
        if arena.yards.contains_key(&yard.id()) {
            return Err(HiveError::persistence(format!(
                "unique constraint violation: yard {} already exists",
                yard.id()
            )));
        }

        arena.yards.insert(yard.id(), yard.clone());
        info!(yard_id = %yard.id(), branch_id = %yard.branch_id(), "yard created");
        Ok(yard)
    }

    async fn get_by_id(&self, id: YardId, cancel: &CancelSignal) -> Result<Option<YardDetails>> {
        let arena = self.store.read().await;
        cancel.check()?;

        arena
            .yards
            .get(&id)
            .map(|yard| arena.yard_details(yard))
            .transpose()
    }

    async fn get_page(
        &self,
        query: &PageQuery<YardSortField>,
        cancel: &CancelSignal,
    ) -> Result<PageResult<YardDetails>> {
        let arena = self.store.read().await;
        cancel.check()?;

        let page = paginate(arena.yards.values(), query);
        debug!(
            page = page.page,
            page_size = page.page_size,
            total = page.total,
            search = ?query.search(),
            "yard page loaded"
        );
        page.try_map(|yard| arena.yard_details(yard))
    }

    async fn update(&self, yard: &Yard, cancel: &CancelSignal) -> Result<bool> {
        let mut arena = self.store.write().await;
        cancel.check()?;

        if !arena.yards.contains_key(&yard.id()) {
            return Ok(false);
        }
        arena.require_branch(yard.branch_id())?;

        arena.yards.insert(yard.id(), yard.clone());
        info!(yard_id = %yard.id(), "yard updated");
        Ok(true)
    }

    async fn delete(&self, id: YardId, cancel: &CancelSignal) -> Result<bool> {
        let mut arena = self.store.write().await;
        cancel.check()?;

        match arena.remove_yard_cascade(id) {
            Some(vehicles) => {
                info!(yard_id = %id, vehicles, "yard deleted with its vehicles");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
