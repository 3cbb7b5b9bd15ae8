use super::arena::{Arena, InMemoryStore};
use crate::hierarchy::domain::{Vehicle, VehicleDetails, VehicleId, VehicleSortField, YardId};
use crate::hierarchy::policies::CapacityPolicy;
use crate::hierarchy::services::{paginate, PageQuery, PageResult};
use crate::ports::outbound::VehicleRepository;
use crate::shared::{CancelSignal, HiveError, Result};
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// In-memory implementation of the VehicleRepository port
#[derive(Debug, Clone)]
pub struct InMemoryVehicleRepository {
    store: InMemoryStore,
}

impl InMemoryVehicleRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

/// Foreign key plus, when enforced, room for one more vehicle.
fn check_destination(arena: &Arena, yard_id: YardId, policy: CapacityPolicy) -> Result<()> {
    let yard = arena.require_yard(yard_id)?;
    if !policy.is_enforced() {
        return Ok(());
    }

    let parked = arena.vehicles_in(yard_id).count();
    if yard.can_accept_vehicle(parked) {
        Ok(())
    } else {
        Err(HiveError::CapacityExceeded {
            yard_id: yard_id.to_string(),
            capacity: yard.vehicle_capacity(),
        })
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn add(
        &self,
        vehicle: Vehicle,
        policy: CapacityPolicy,
        cancel: &CancelSignal,
    ) -> Result<Vehicle> {
        let mut arena = self.store.write().await;
        cancel.check()?;

        if let Err(e) = check_destination(&arena, vehicle.yard_id(), policy) {
            warn!(yard_id = %vehicle.yard_id(), error = %e, "vehicle rejected");
            return Err(e);
        }
        if arena.vehicles.contains_key(&vehicle.id()) {
            return Err(HiveError::persistence(format!(
                "unique constraint violation: vehicle {} already exists",
                vehicle.id()
            )));
        }

        arena.vehicles.insert(vehicle.id(), vehicle.clone());
        info!(vehicle_id = %vehicle.id(), yard_id = %vehicle.yard_id(), "vehicle created");
        Ok(vehicle)
    }

    async fn get_by_id(
        &self,
        id: VehicleId,
        cancel: &CancelSignal,
    ) -> Result<Option<VehicleDetails>> {
        let arena = self.store.read().await;
        cancel.check()?;

        arena
            .vehicles
            .get(&id)
            .map(|vehicle| arena.vehicle_details(vehicle))
            .transpose()
    }

    async fn get_page(
        &self,
        query: &PageQuery<VehicleSortField>,
        cancel: &CancelSignal,
    ) -> Result<PageResult<VehicleDetails>> {
        let arena = self.store.read().await;
        cancel.check()?;

        let page = paginate(arena.vehicles.values(), query);
        debug!(
            page = page.page,
            page_size = page.page_size,
            total = page.total,
            search = ?query.search(),
            "vehicle page loaded"
        );
        page.try_map(|vehicle| arena.vehicle_details(vehicle))
    }

    async fn update(
        &self,
        vehicle: &Vehicle,
        policy: CapacityPolicy,
        cancel: &CancelSignal,
    ) -> Result<bool> {
        let mut arena = self.store.write().await;
        cancel.check()?;

        let current_yard = match arena.vehicles.get(&vehicle.id()) {
            Some(stored) => stored.yard_id(),
            None => return Ok(false),
        };

        // Staying in the same yard never needs a free slot.
        let policy = if current_yard == vehicle.yard_id() {
            CapacityPolicy::Advisory
        } else {
            policy
        };
        if let Err(e) = check_destination(&arena, vehicle.yard_id(), policy) {
            warn!(vehicle_id = %vehicle.id(), error = %e, "vehicle update rejected");
            return Err(e);
        }

        arena.vehicles.insert(vehicle.id(), vehicle.clone());
        info!(vehicle_id = %vehicle.id(), "vehicle updated");
        Ok(true)
    }

    async fn delete(&self, id: VehicleId, cancel: &CancelSignal) -> Result<bool> {
        let mut arena = self.store.write().await;
        cancel.check()?;

        let removed = arena.vehicles.remove(&id).is_some();
        if removed {
            info!(vehicle_id = %id, "vehicle deleted");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::memory::{InMemoryBranchRepository, InMemoryYardRepository};
    use crate::hierarchy::domain::{Branch, Priority, VehicleIdentifiers, Yard};
    use crate::ports::outbound::{BranchRepository, YardRepository};

    async fn store_with_yard(capacity: i64) -> (InMemoryStore, YardId) {
        let store = InMemoryStore::new();
        let cancel = CancelSignal::new();
        let branch = Branch::new("Branch A", "Downtown", "12.345.678/0001-99").unwrap();
        let yard = Yard::new("Yard 1", capacity, branch.id()).unwrap();
        let yard_id = yard.id();
        InMemoryBranchRepository::new(store.clone())
            .add(branch, &cancel)
            .await
            .unwrap();
        InMemoryYardRepository::new(store.clone())
            .add(yard, &cancel)
            .await
            .unwrap();
        (store, yard_id)
    }

    fn vehicle(plate: &str, yard_id: YardId) -> Vehicle {
        Vehicle::new(
            VehicleIdentifiers::new(Some(plate.to_string()), None, None),
            Priority::Medium,
            yard_id,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_enforced_capacity_rejects_overflow() {
        let (store, yard_id) = store_with_yard(1).await;
        let repo = InMemoryVehicleRepository::new(store.clone());
        let cancel = CancelSignal::new();

        repo.add(vehicle("AAA0001", yard_id), CapacityPolicy::Enforced, &cancel)
            .await
            .unwrap();
        let err = repo
            .add(vehicle("AAA0002", yard_id), CapacityPolicy::Enforced, &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, HiveError::CapacityExceeded { capacity: 1, .. }));
        assert_eq!(store.snapshot().await.vehicles.len(), 1);
    }

    #[tokio::test]
    async fn test_advisory_capacity_allows_overflow() {
        let (store, yard_id) = store_with_yard(1).await;
        let repo = InMemoryVehicleRepository::new(store);
        let cancel = CancelSignal::new();

        for plate in ["AAA0001", "AAA0002"] {
            repo.add(vehicle(plate, yard_id), CapacityPolicy::Advisory, &cancel)
                .await
                .unwrap();
        }
        let yard = InMemoryYardRepository::new(repo.store.clone())
            .get_by_id(yard_id, &cancel)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(yard.vehicles.len(), 2);
        assert!(!yard.can_accept_vehicle());
    }

    #[tokio::test]
    async fn test_add_requires_existing_yard() {
        let repo = InMemoryVehicleRepository::new(InMemoryStore::new());
        let err = repo
            .add(
                vehicle("AAA0001", YardId::new()),
                CapacityPolicy::Advisory,
                &CancelSignal::new(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, HiveError::Persistence { .. }));
    }

    #[tokio::test]
    async fn test_update_in_full_yard_is_allowed() {
        let (store, yard_id) = store_with_yard(1).await;
        let repo = InMemoryVehicleRepository::new(store);
        let cancel = CancelSignal::new();
        let mut stored = repo
            .add(vehicle("AAA0001", yard_id), CapacityPolicy::Enforced, &cancel)
            .await
            .unwrap();

        stored
            .update_data(stored.identifiers().clone(), Priority::High, yard_id)
            .unwrap();
        assert!(repo
            .update(&stored, CapacityPolicy::Enforced, &cancel)
            .await
            .unwrap());

        let details = repo.get_by_id(stored.id(), &cancel).await.unwrap().unwrap();
        assert_eq!(details.vehicle.priority(), Priority::High);
        assert_eq!(details.yard.id(), yard_id);
    }

    #[tokio::test]
    async fn test_delete() {
        let (store, yard_id) = store_with_yard(3).await;
        let repo = InMemoryVehicleRepository::new(store);
        let cancel = CancelSignal::new();
        let stored = repo
            .add(vehicle("AAA0001", yard_id), CapacityPolicy::Enforced, &cancel)
            .await
            .unwrap();

        assert!(repo.delete(stored.id(), &cancel).await.unwrap());
        assert!(!repo.delete(stored.id(), &cancel).await.unwrap());
        assert!(repo.get_by_id(stored.id(), &cancel).await.unwrap().is_none());
    }
}
