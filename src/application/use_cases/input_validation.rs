//! Request-level checks run before any entity is built or touched.
//!
//! The entities repeat these rules on construction; this pass rejects bad
//! input before the repository is consulted at all.

use crate::application::dto::{BranchRequest, VehicleRequest, YardRequest};
use crate::shared::{HiveError, Result};

fn require_text(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(HiveError::invalid(field, format!("{} is required", field)))
    } else {
        Ok(())
    }
}

pub(super) fn validate_branch(request: &BranchRequest) -> Result<()> {
    require_text("name", &request.name)?;
    require_text("neighborhood", &request.neighborhood)?;
    require_text("tax_id", &request.tax_id)
}

pub(super) fn validate_yard(request: &YardRequest) -> Result<()> {
    require_text("name", &request.name)?;
    if request.vehicle_capacity <= 0 {
        return Err(HiveError::invalid(
            "vehicle_capacity",
            "vehicle_capacity must be greater than zero",
        ));
    }
    Ok(())
}

pub(super) fn validate_vehicle(request: &VehicleRequest) -> Result<()> {
    if request.identifiers().has_any() {
        Ok(())
    } else {
        Err(HiveError::invalid(
            "identifiers",
            "must supply at least one of plate, chassis, or engine number",
        ))
    }
}
