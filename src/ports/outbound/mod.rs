/// Outbound ports (Driven ports) - Storage interfaces
///
/// These ports define the interfaces the use cases rely on to persist
/// and query branches, yards and vehicles.
pub mod branch_repository;
pub mod snapshot_store;
pub mod vehicle_repository;
pub mod yard_repository;

pub use branch_repository::BranchRepository;
pub use snapshot_store::{
    BranchRecord, Snapshot, SnapshotStore, VehicleRecord, YardRecord, SNAPSHOT_VERSION,
};
pub use vehicle_repository::VehicleRepository;
pub use yard_repository::YardRepository;
