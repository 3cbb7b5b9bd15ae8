use super::arena::InMemoryStore;
use crate::hierarchy::domain::{Branch, BranchDetails, BranchId, BranchSortField};
use crate::hierarchy::services::{paginate, PageQuery, PageResult};
use crate::ports::outbound::BranchRepository;
use crate::shared::{CancelSignal, HiveError, Result};
use async_trait::async_trait;
use tracing::{debug, info};

/// In-memory implementation of the BranchRepository port
#[derive(Debug, Clone)]
pub struct InMemoryBranchRepository {
    store: InMemoryStore,
}

impl InMemoryBranchRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BranchRepository for InMemoryBranchRepository {
    async fn add(&self, branch: Branch, cancel: &CancelSignal) -> Result<Branch> {
        let mut arena = self.store.write().await;
        cancel.check()?;

        if arena.branches.contains_key(&branch.id()) {
            return Err(HiveError::persistence(format!(
                "unique constraint violation: branch {} already exists",
                branch.id()
            )));
        }

        arena.branches.insert(branch.id(), branch.clone());
        info!(branch_id = %branch.id(), name = branch.name(), "branch created");
        Ok(branch)
    }

    async fn get_by_id(
        &self,
        id: BranchId,
        cancel: &CancelSignal,
    ) -> Result<Option<BranchDetails>> {
        let arena = self.store.read().await;
        cancel.check()?;

        Ok(arena
            .branches
            .get(&id)
            .map(|branch| arena.branch_details(branch)))
    }

    async fn get_page(
        &self,
        query: &PageQuery<BranchSortField>,
        cancel: &CancelSignal,
    ) -> Result<PageResult<BranchDetails>> {
        let arena = self.store.read().await;
        cancel.check()?;

        let page = paginate(arena.branches.values(), query);
        debug!(
            page = page.page,
            page_size = page.page_size,
            total = page.total,
            search = ?query.search(),
            "branch page loaded"
        );
        Ok(page.map(|branch| arena.branch_details(branch)))
    }

    async fn update(&self, branch: &Branch, cancel: &CancelSignal) -> Result<bool> {
        let mut arena = self.store.write().await;
        cancel.check()?;

        match arena.branches.get_mut(&branch.id()) {
            Some(stored) => {
                *stored = branch.clone();
                info!(branch_id = %branch.id(), "branch updated");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: BranchId, cancel: &CancelSignal) -> Result<bool> {
        let mut arena = self.store.write().await;
        cancel.check()?;

        match arena.remove_branch_cascade(id) {
            Some((yards, vehicles)) => {
                info!(branch_id = %id, yards, vehicles, "branch deleted with its yards and vehicles");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::services::{PaginationConfig, SortOrder};

    fn branch(name: &str) -> Branch {
        Branch::new(name, "Downtown", "12.345.678/0001-99").unwrap()
    }

    fn query(search: Option<&str>) -> PageQuery<BranchSortField> {
        PageQuery::normalize(
            &PaginationConfig::default(),
            Some(1),
            Some(10),
            search,
            SortOrder::default(),
        )
    }

    #[tokio::test]
    async fn test_add_then_get() {
        let repo = InMemoryBranchRepository::new(InMemoryStore::new());
        let cancel = CancelSignal::new();
        let created = repo.add(branch("Branch A"), &cancel).await.unwrap();

        let details = repo.get_by_id(created.id(), &cancel).await.unwrap().unwrap();
        assert_eq!(details.branch, created);
        assert!(details.yards.is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let repo = InMemoryBranchRepository::new(InMemoryStore::new());
        let found = repo.get_by_id(BranchId::new(), &CancelSignal::new()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_add_duplicate_id_is_persistence_error() {
        let repo = InMemoryBranchRepository::new(InMemoryStore::new());
        let cancel = CancelSignal::new();
        let created = repo.add(branch("Branch A"), &cancel).await.unwrap();
        let err = repo.add(created, &cancel).await.unwrap_err();
        assert!(matches!(err, HiveError::Persistence { .. }));
    }

    #[tokio::test]
    async fn test_get_page_sorted_by_name() {
        let repo = InMemoryBranchRepository::new(InMemoryStore::new());
        let cancel = CancelSignal::new();
        for name in ["Charlie", "Alpha", "Bravo"] {
            repo.add(branch(name), &cancel).await.unwrap();
        }

        let page = repo.get_page(&query(None), &cancel).await.unwrap();
        let names: Vec<&str> = page.items.iter().map(|d| d.branch.name()).collect();
        assert_eq!(names, vec!["Alpha", "Bravo", "Charlie"]);
        assert_eq!(page.total, 3);

        let page = repo.get_page(&query(Some("ravo")), &cancel).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].branch.name(), "Bravo");
    }

    #[tokio::test]
    async fn test_update_missing_returns_false() {
        let repo = InMemoryBranchRepository::new(InMemoryStore::new());
        let updated = repo
            .update(&branch("Ghost"), &CancelSignal::new())
            .await
            .unwrap();
        assert!(!updated);
    }

    #[tokio::test]
    async fn test_cancelled_add_leaves_store_unchanged() {
        let store = InMemoryStore::new();
        let repo = InMemoryBranchRepository::new(store.clone());
        let cancel = CancelSignal::new();
        cancel.cancel();

        let err = repo.add(branch("Branch A"), &cancel).await.unwrap_err();
        assert!(matches!(err, HiveError::Cancelled));
        assert!(store.snapshot().await.branches.is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_delete_keeps_branch() {
        let repo = InMemoryBranchRepository::new(InMemoryStore::new());
        let created = repo
            .add(branch("Branch A"), &CancelSignal::new())
            .await
            .unwrap();

        let cancel = CancelSignal::new();
        cancel.cancel();
        assert!(repo.delete(created.id(), &cancel).await.is_err());

        let still_there = repo
            .get_by_id(created.id(), &CancelSignal::new())
            .await
            .unwrap();
        assert!(still_there.is_some());
    }
}
