use crate::hierarchy::domain::{Vehicle, VehicleDetails, VehicleId, VehicleSortField};
use crate::hierarchy::policies::CapacityPolicy;
use crate::hierarchy::services::{PageQuery, PageResult};
use crate::shared::{CancelSignal, Result};
use async_trait::async_trait;

/// VehicleRepository port
///
/// Reads eager-load the owning yard. Writes fail with `Persistence` when
/// the target yard does not exist.
///
/// # Capacity
/// `add` and `update` take the [`CapacityPolicy`] to apply. Under
/// `Enforced`, the capacity check and the write happen atomically, and a
/// full yard yields `HiveError::CapacityExceeded`. An update that keeps
/// the vehicle in its current yard never counts against capacity.
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn add(
        &self,
        vehicle: Vehicle,
        policy: CapacityPolicy,
        cancel: &CancelSignal,
    ) -> Result<Vehicle>;

    async fn get_by_id(
        &self,
        id: VehicleId,
        cancel: &CancelSignal,
    ) -> Result<Option<VehicleDetails>>;

    async fn get_page(
        &self,
        query: &PageQuery<VehicleSortField>,
        cancel: &CancelSignal,
    ) -> Result<PageResult<VehicleDetails>>;

    /// `false` when the id is unknown.
    async fn update(
        &self,
        vehicle: &Vehicle,
        policy: CapacityPolicy,
        cancel: &CancelSignal,
    ) -> Result<bool>;

    /// `false` when absent.
    async fn delete(&self, id: VehicleId, cancel: &CancelSignal) -> Result<bool>;
}
