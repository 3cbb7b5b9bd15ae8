use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;
use vision_hive::hierarchy::domain::BranchSortField;
use vision_hive::hierarchy::services::{paginate, PageQuery};
use vision_hive::prelude::*;

/// Mock BranchRepository for testing
///
/// Keeps branches in a plain map without any yards. With `with_failure`,
/// every call fails as if the store were unreachable.
pub struct MockBranchRepository {
    branches: Mutex<BTreeMap<BranchId, Branch>>,
    pub should_fail: bool,
}

impl MockBranchRepository {
    pub fn new() -> Self {
        Self {
            branches: Mutex::new(BTreeMap::new()),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            branches: Mutex::new(BTreeMap::new()),
            should_fail: true,
        }
    }

    fn check(&self, cancel: &CancelSignal) -> Result<()> {
        if self.should_fail {
            return Err(HiveError::persistence("mock store is unreachable"));
        }
        cancel.check()
    }
}

#[async_trait]
impl BranchRepository for MockBranchRepository {
    async fn add(&self, branch: Branch, cancel: &CancelSignal) -> Result<Branch> {
        self.check(cancel)?;
        self.branches
            .lock()
            .unwrap()
            .insert(branch.id(), branch.clone());
        Ok(branch)
    }

    async fn get_by_id(
        &self,
        id: BranchId,
        cancel: &CancelSignal,
    ) -> Result<Option<BranchDetails>> {
        self.check(cancel)?;
        Ok(self.branches.lock().unwrap().get(&id).map(|branch| BranchDetails {
            branch: branch.clone(),
            yards: Vec::new(),
        }))
    }

    async fn get_page(
        &self,
        query: &PageQuery<BranchSortField>,
        cancel: &CancelSignal,
    ) -> Result<PageResult<BranchDetails>> {
        self.check(cancel)?;
        let branches = self.branches.lock().unwrap();
        Ok(paginate(branches.values(), query).map(|branch| BranchDetails {
            branch: branch.clone(),
            yards: Vec::new(),
        }))
    }

    async fn update(&self, branch: &Branch, cancel: &CancelSignal) -> Result<bool> {
        self.check(cancel)?;
        let mut branches = self.branches.lock().unwrap();
        match branches.get_mut(&branch.id()) {
            Some(stored) => {
                *stored = branch.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: BranchId, cancel: &CancelSignal) -> Result<bool> {
        self.check(cancel)?;
        Ok(self.branches.lock().unwrap().remove(&id).is_some())
    }
}
