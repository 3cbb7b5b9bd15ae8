use vision_hive::prelude::*;

pub const TAX_ID: &str = "12.345.678/0001-99";

/// The three use cases wired to one shared arena store.
pub struct Hive {
    pub store: InMemoryStore,
    pub branches: BranchUseCase<InMemoryBranchRepository>,
    pub yards: YardUseCase<InMemoryYardRepository>,
    pub vehicles: VehicleUseCase<InMemoryVehicleRepository>,
}

impl Hive {
    pub fn new(policy: CapacityPolicy) -> Self {
        Self::with_store(InMemoryStore::new(), policy)
    }

    pub fn with_store(store: InMemoryStore, policy: CapacityPolicy) -> Self {
        let pagination = PaginationConfig::default();
        Self {
            branches: BranchUseCase::new(InMemoryBranchRepository::new(store.clone()), pagination),
            yards: YardUseCase::new(InMemoryYardRepository::new(store.clone()), pagination),
            vehicles: VehicleUseCase::new(
                InMemoryVehicleRepository::new(store.clone()),
                pagination,
                policy,
            ),
            store,
        }
    }

    pub async fn branch(&self, name: &str) -> Branch {
        self.branches
            .create(
                BranchRequest::new(name, "Downtown", TAX_ID),
                &CancelSignal::new(),
            )
            .await
            .expect("branch fixture")
    }

    pub async fn yard(&self, name: &str, capacity: i64, branch_id: BranchId) -> Yard {
        self.yards
            .create(
                YardRequest::new(name, capacity, branch_id),
                &CancelSignal::new(),
            )
            .await
            .expect("yard fixture")
    }

    pub async fn vehicle_with_plate(&self, plate: &str, yard_id: YardId) -> Vehicle {
        self.vehicles
            .create(
                VehicleRequest::new(Priority::Medium, yard_id).with_plate(plate),
                &CancelSignal::new(),
            )
            .await
            .expect("vehicle fixture")
    }
}
