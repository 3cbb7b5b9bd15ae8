/// Use cases module containing application business logic orchestration
mod input_validation;
mod manage_branches;
mod manage_vehicles;
mod manage_yards;

pub use manage_branches::BranchUseCase;
pub use manage_vehicles::VehicleUseCase;
pub use manage_yards::YardUseCase;
