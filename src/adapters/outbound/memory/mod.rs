//! Arena-backed storage adapter.
mod arena;
mod branch_repository;
mod vehicle_repository;
mod yard_repository;

pub use arena::InMemoryStore;
pub use branch_repository::InMemoryBranchRepository;
pub use vehicle_repository::InMemoryVehicleRepository;
pub use yard_repository::InMemoryYardRepository;
