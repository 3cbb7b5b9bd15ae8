use crate::hierarchy::domain::{
    Branch, BranchDetails, BranchId, Vehicle, VehicleDetails, VehicleId, Yard, YardDetails, YardId,
};
use crate::hierarchy::services::PageResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// BranchResponse - branch projection with the names of its yards
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchResponse {
    pub id: BranchId,
    pub name: String,
    pub neighborhood: String,
    pub tax_id: String,
    pub yards: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl BranchResponse {
    fn from_parts(branch: &Branch, yards: &[Yard]) -> Self {
        Self {
            id: branch.id(),
            name: branch.name().to_string(),
            neighborhood: branch.neighborhood().to_string(),
            tax_id: branch.tax_id().to_string(),
            yards: yards.iter().map(|y| y.name().to_string()).collect(),
            created_at: branch.audit().created_at(),
            modified_at: branch.audit().modified_at(),
        }
    }
}

impl From<&Branch> for BranchResponse {
    fn from(branch: &Branch) -> Self {
        Self::from_parts(branch, &[])
    }
}

impl From<&BranchDetails> for BranchResponse {
    fn from(details: &BranchDetails) -> Self {
        Self::from_parts(&details.branch, &details.yards)
    }
}

/// VehicleResponse - vehicle projection with the name of its yard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: VehicleId,
    pub plate: Option<String>,
    pub chassis: Option<String>,
    pub engine_number: Option<String>,
    pub priority: String,
    pub yard_id: YardId,
    pub yard: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl VehicleResponse {
    fn from_parts(vehicle: &Vehicle, yard: Option<&Yard>) -> Self {
        Self {
            id: vehicle.id(),
            plate: vehicle.plate().map(str::to_string),
            chassis: vehicle.chassis().map(str::to_string),
            engine_number: vehicle.engine_number().map(str::to_string),
            priority: vehicle.priority().to_string(),
            yard_id: vehicle.yard_id(),
            yard: yard.map(|y| y.name().to_string()),
            created_at: vehicle.audit().created_at(),
            modified_at: vehicle.audit().modified_at(),
        }
    }
}

impl From<&Vehicle> for VehicleResponse {
    fn from(vehicle: &Vehicle) -> Self {
        Self::from_parts(vehicle, None)
    }
}

impl From<&VehicleDetails> for VehicleResponse {
    fn from(details: &VehicleDetails) -> Self {
        Self::from_parts(&details.vehicle, Some(&details.yard))
    }
}

/// YardResponse - yard projection with its branch name, vehicles and
/// current capacity status
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YardResponse {
    pub id: YardId,
    pub name: String,
    pub vehicle_capacity: u32,
    pub branch_id: BranchId,
    pub branch: Option<String>,
    pub vehicles: Vec<VehicleResponse>,
    pub can_accept_vehicle: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<&Yard> for YardResponse {
    fn from(yard: &Yard) -> Self {
        Self {
            id: yard.id(),
            name: yard.name().to_string(),
            vehicle_capacity: yard.vehicle_capacity(),
            branch_id: yard.branch_id(),
            branch: None,
            vehicles: Vec::new(),
            can_accept_vehicle: None,
            created_at: yard.audit().created_at(),
            modified_at: yard.audit().modified_at(),
        }
    }
}

impl From<&YardDetails> for YardResponse {
    fn from(details: &YardDetails) -> Self {
        let yard = &details.yard;
        Self {
            branch: Some(details.branch.name().to_string()),
            vehicles: details
                .vehicles
                .iter()
                .map(|v| VehicleResponse::from_parts(v, Some(yard)))
                .collect(),
            can_accept_vehicle: Some(details.can_accept_vehicle()),
            ..Self::from(yard)
        }
    }
}

/// PageResponse - wire shape of a page result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> PageResponse<T> {
    /// Projects each item and computes the derived navigation fields.
    pub fn from_page<'a, S>(page: &'a PageResult<S>, project: impl Fn(&'a S) -> T) -> Self {
        Self {
            items: page.items.iter().map(project).collect(),
            page: page.page,
            page_size: page.page_size,
            total: page.total,
            total_pages: page.total_pages(),
            has_next: page.has_next(),
            has_previous: page.has_previous(),
        }
    }
}
