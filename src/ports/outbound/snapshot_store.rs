use crate::hierarchy::domain::{
    AuditStamp, Branch, BranchId, Priority, Vehicle, VehicleId, VehicleIdentifiers, Yard, YardId,
};
use crate::shared::{HiveError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current snapshot layout version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable image of the whole store
///
/// Records are flat rows keyed by id with foreign keys to their parents,
/// the same shape a relational schema would have.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    #[serde(default)]
    pub branches: Vec<BranchRecord>,
    #[serde(default)]
    pub yards: Vec<YardRecord>,
    #[serde(default)]
    pub vehicles: Vec<VehicleRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchRecord {
    pub id: BranchId,
    pub name: String,
    pub neighborhood: String,
    pub tax_id: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YardRecord {
    pub id: YardId,
    pub branch_id: BranchId,
    pub name: String,
    pub vehicle_capacity: i64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: VehicleId,
    pub yard_id: YardId,
    pub plate: Option<String>,
    pub chassis: Option<String>,
    pub engine_number: Option<String>,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<&Branch> for BranchRecord {
    fn from(branch: &Branch) -> Self {
        Self {
            id: branch.id(),
            name: branch.name().to_string(),
            neighborhood: branch.neighborhood().to_string(),
            tax_id: branch.tax_id().to_string(),
            created_at: branch.audit().created_at(),
            modified_at: branch.audit().modified_at(),
        }
    }
}

impl TryFrom<BranchRecord> for Branch {
    type Error = HiveError;

    fn try_from(record: BranchRecord) -> Result<Self> {
        Branch::restore(
            record.id,
            record.name,
            record.neighborhood,
            record.tax_id,
            AuditStamp::restore(record.created_at, record.modified_at),
        )
    }
}

impl From<&Yard> for YardRecord {
    fn from(yard: &Yard) -> Self {
        Self {
            id: yard.id(),
            branch_id: yard.branch_id(),
            name: yard.name().to_string(),
            vehicle_capacity: i64::from(yard.vehicle_capacity()),
            created_at: yard.audit().created_at(),
            modified_at: yard.audit().modified_at(),
        }
    }
}

impl TryFrom<YardRecord> for Yard {
    type Error = HiveError;

    fn try_from(record: YardRecord) -> Result<Self> {
        Yard::restore(
            record.id,
            record.branch_id,
            record.name,
            record.vehicle_capacity,
            AuditStamp::restore(record.created_at, record.modified_at),
        )
    }
}

impl From<&Vehicle> for VehicleRecord {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id(),
            yard_id: vehicle.yard_id(),
            plate: vehicle.plate().map(str::to_string),
            chassis: vehicle.chassis().map(str::to_string),
            engine_number: vehicle.engine_number().map(str::to_string),
            priority: vehicle.priority(),
            created_at: vehicle.audit().created_at(),
            modified_at: vehicle.audit().modified_at(),
        }
    }
}

impl TryFrom<VehicleRecord> for Vehicle {
    type Error = HiveError;

    fn try_from(record: VehicleRecord) -> Result<Self> {
        Vehicle::restore(
            record.id,
            record.yard_id,
            VehicleIdentifiers::new(record.plate, record.chassis, record.engine_number),
            record.priority,
            AuditStamp::restore(record.created_at, record.modified_at),
        )
    }
}

/// SnapshotStore port for saving the store between process runs
pub trait SnapshotStore {
    /// Reads the stored snapshot; `Ok(None)` when nothing was saved yet.
    ///
    /// # Errors
    /// `Persistence` when the snapshot exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<Snapshot>>;

    /// Replaces the stored snapshot.
    fn save(&self, snapshot: &Snapshot) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_record_restores_same_entity() {
        let branch = Branch::new("Branch A", "Downtown", "12.345.678/0001-99").unwrap();
        let record = BranchRecord::from(&branch);
        let restored = Branch::try_from(record).unwrap();
        assert_eq!(restored, branch);
    }

    #[test]
    fn test_invalid_yard_record_is_rejected() {
        let yard = Yard::new("Yard 1", 3, BranchId::new()).unwrap();
        let mut record = YardRecord::from(&yard);
        record.vehicle_capacity = 0;
        assert!(Yard::try_from(record).is_err());
    }

    #[test]
    fn test_vehicle_record_without_identifiers_is_rejected() {
        let vehicle = Vehicle::new(
            VehicleIdentifiers::new(Some("ABC1234".to_string()), None, None),
            Priority::Medium,
            YardId::new(),
        )
        .unwrap();
        let mut record = VehicleRecord::from(&vehicle);
        record.plate = Some("  ".to_string());
        assert!(Vehicle::try_from(record).is_err());
    }
}
