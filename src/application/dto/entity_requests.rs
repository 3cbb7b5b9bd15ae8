use crate::hierarchy::domain::{BranchId, Priority, VehicleIdentifiers, YardId};
use serde::Deserialize;

/// BranchRequest - input for creating or updating a branch
///
/// Structurally typed but not business-validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchRequest {
    pub name: String,
    pub neighborhood: String,
    /// Tax id in `DD.DDD.DDD/DDDD-DD` form, e.g. `12.345.678/0001-99`
    pub tax_id: String,
}

impl BranchRequest {
    pub fn new(
        name: impl Into<String>,
        neighborhood: impl Into<String>,
        tax_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            neighborhood: neighborhood.into(),
            tax_id: tax_id.into(),
        }
    }
}

/// YardRequest - input for creating or updating a yard
///
/// `branch_id` is only read on creation; a yard never changes branch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YardRequest {
    pub name: String,
    pub vehicle_capacity: i64,
    pub branch_id: BranchId,
}

impl YardRequest {
    pub fn new(name: impl Into<String>, vehicle_capacity: i64, branch_id: BranchId) -> Self {
        Self {
            name: name.into(),
            vehicle_capacity,
            branch_id,
        }
    }
}

/// VehicleRequest - input for creating or updating a vehicle
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRequest {
    pub plate: Option<String>,
    pub chassis: Option<String>,
    pub engine_number: Option<String>,
    pub priority: Priority,
    pub yard_id: YardId,
}

impl VehicleRequest {
    pub fn new(priority: Priority, yard_id: YardId) -> Self {
        Self {
            plate: None,
            chassis: None,
            engine_number: None,
            priority,
            yard_id,
        }
    }

    pub fn with_plate(mut self, plate: impl Into<String>) -> Self {
        self.plate = Some(plate.into());
        self
    }

    pub fn with_chassis(mut self, chassis: impl Into<String>) -> Self {
        self.chassis = Some(chassis.into());
        self
    }

    pub fn with_engine_number(mut self, engine_number: impl Into<String>) -> Self {
        self.engine_number = Some(engine_number.into());
        self
    }

    pub fn identifiers(&self) -> VehicleIdentifiers {
        VehicleIdentifiers::new(
            self.plate.clone(),
            self.chassis.clone(),
            self.engine_number.clone(),
        )
    }
}
