//! vision-hive - registry of branches, their yards and the vehicles parked in them
//!
//! This library provides validated domain entities for a three-level ownership
//! hierarchy (Branch → Yard → Vehicle), a generic pagination engine, and the
//! use cases that tie them to storage, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`hierarchy`): Entities, invariants, capacity policy and pagination
//! - **Application Layer** (`application`): Use cases and request/response DTOs
//! - **Ports** (`ports`): Repository and snapshot interfaces
//! - **Adapters** (`adapters`): In-memory arena store and JSON snapshot file
//! - **Shared** (`shared`): Error taxonomy, result alias, cancellation
//!
//! # Example
//!
//! ```no_run
//! use vision_hive::prelude::*;
//!
//! # async fn demo() -> Result<()> {
//! let store = InMemoryStore::new();
//! let cancel = CancelSignal::new();
//! let config = PaginationConfig::default();
//!
//! let branches = BranchUseCase::new(InMemoryBranchRepository::new(store.clone()), config);
//! let yards = YardUseCase::new(InMemoryYardRepository::new(store.clone()), config);
//!
//! let branch = branches
//!     .create(BranchRequest::new("Branch A", "Downtown", "12.345.678/0001-99"), &cancel)
//!     .await?;
//! yards
//!     .create(YardRequest::new("Yard 1", 2, branch.id()), &cancel)
//!     .await?;
//!
//! let page = yards
//!     .get_page(&PageRequest::new(1, 10).with_search("Yard 1"), &cancel)
//!     .await?;
//! assert_eq!(page.total, 1);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod hierarchy;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::JsonSnapshotFile;
    pub use crate::adapters::outbound::memory::{
        InMemoryBranchRepository, InMemoryStore, InMemoryVehicleRepository,
        InMemoryYardRepository,
    };
    pub use crate::application::dto::{
        BranchRequest, BranchResponse, PageRequest, PageResponse, VehicleRequest,
        VehicleResponse, YardRequest, YardResponse,
    };
    pub use crate::application::use_cases::{BranchUseCase, VehicleUseCase, YardUseCase};
    pub use crate::hierarchy::domain::{
        Branch, BranchDetails, BranchId, Priority, Vehicle, VehicleDetails, VehicleId,
        VehicleIdentifiers, Yard, YardDetails, YardId,
    };
    pub use crate::hierarchy::policies::CapacityPolicy;
    pub use crate::hierarchy::services::{
        PageResult, PaginationConfig, SortDirection, SortOrder,
    };
    pub use crate::ports::outbound::{
        BranchRepository, Snapshot, SnapshotStore, VehicleRepository, YardRepository,
    };
    pub use crate::shared::{CancelSignal, HiveError, Result};
}
