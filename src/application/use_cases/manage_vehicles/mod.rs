use super::input_validation::validate_vehicle;
use crate::application::dto::{PageRequest, VehicleRequest};
use crate::hierarchy::domain::{Vehicle, VehicleDetails, VehicleId};
use crate::hierarchy::policies::CapacityPolicy;
use crate::hierarchy::services::{PageResult, PaginationConfig};
use crate::ports::outbound::VehicleRepository;
use crate::shared::{CancelSignal, Result};
use tracing::debug;

/// VehicleUseCase - create, list, look up, update and delete vehicles
///
/// Writes are subject to the configured [`CapacityPolicy`]. Under
/// `Enforced`, parking a vehicle in a full yard fails with
/// `HiveError::CapacityExceeded`.
///
/// # Type Parameters
/// * `R` - VehicleRepository implementation
pub struct VehicleUseCase<R> {
    repository: R,
    pagination: PaginationConfig,
    capacity_policy: CapacityPolicy,
}

impl<R: VehicleRepository> VehicleUseCase<R> {
    pub fn new(repository: R, pagination: PaginationConfig, capacity_policy: CapacityPolicy) -> Self {
        Self {
            repository,
            pagination,
            capacity_policy,
        }
    }

    pub fn capacity_policy(&self) -> CapacityPolicy {
        self.capacity_policy
    }

    /// Validates the request, builds the vehicle and parks it in its yard
    ///
    /// # Errors
    /// - `InvalidArgument` when plate, chassis and engine number are all blank
    /// - `Persistence` when the yard does not exist
    /// - `CapacityExceeded` when the yard is full and capacity is enforced
    pub async fn create(&self, request: VehicleRequest, cancel: &CancelSignal) -> Result<Vehicle> {
        validate_vehicle(&request)?;
        let vehicle = Vehicle::new(request.identifiers(), request.priority, request.yard_id)?;
        self.repository
            .add(vehicle, self.capacity_policy, cancel)
            .await
    }

    pub async fn get_page(
        &self,
        request: &PageRequest,
        cancel: &CancelSignal,
    ) -> Result<PageResult<VehicleDetails>> {
        let query = request.to_query(&self.pagination)?;
        self.repository.get_page(&query, cancel).await
    }

    pub async fn get_by_id(
        &self,
        id: VehicleId,
        cancel: &CancelSignal,
    ) -> Result<Option<VehicleDetails>> {
        self.repository.get_by_id(id, cancel).await
    }

    /// Replaces identifiers and priority, and moves the vehicle when
    /// `request.yard_id` names a different yard
    ///
    /// # Returns
    /// `false` when no vehicle has this id
    pub async fn update(
        &self,
        id: VehicleId,
        request: VehicleRequest,
        cancel: &CancelSignal,
    ) -> Result<bool> {
        validate_vehicle(&request)?;

        let Some(VehicleDetails { mut vehicle, .. }) =
            self.repository.get_by_id(id, cancel).await?
        else {
            debug!(vehicle_id = %id, "vehicle not found for update");
            return Ok(false);
        };
        vehicle.update_data(request.identifiers(), request.priority, request.yard_id)?;
        self.repository
            .update(&vehicle, self.capacity_policy, cancel)
            .await
    }

    pub async fn delete(&self, id: VehicleId, cancel: &CancelSignal) -> Result<bool> {
        self.repository.delete(id, cancel).await
    }
}
