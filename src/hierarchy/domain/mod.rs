pub mod audit;
pub mod branch;
pub mod details;
pub mod ids;
pub mod priority;
pub mod tax_id;
pub mod vehicle;
pub mod yard;

pub use audit::AuditStamp;
pub use branch::{Branch, BranchSortField};
pub use details::{BranchDetails, VehicleDetails, YardDetails};
pub use ids::{BranchId, VehicleId, YardId};
pub use priority::Priority;
pub use tax_id::TaxId;
pub use vehicle::{Vehicle, VehicleIdentifiers, VehicleSortField};
pub use yard::{Yard, YardSortField};

/// Canonical spelling used to match sort field names:
/// lowercase with `_` and `-` removed, so `taxId`, `tax_id` and `TAX-ID` agree.
fn sort_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}
