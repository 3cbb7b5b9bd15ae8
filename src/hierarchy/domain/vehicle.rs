use super::audit::AuditStamp;
use super::ids::{VehicleId, YardId};
use super::priority::Priority;
use super::sort_key;
use crate::hierarchy::services::pagination::{compare_optional, Pageable};
use crate::shared::{HiveError, Result};
use std::cmp::Ordering;
use std::str::FromStr;
use uuid::Uuid;

/// The three identifying attributes of a vehicle. At least one is non-blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleIdentifiers {
    pub plate: Option<String>,
    pub chassis: Option<String>,
    pub engine_number: Option<String>,
}

impl VehicleIdentifiers {
    pub fn new(
        plate: Option<String>,
        chassis: Option<String>,
        engine_number: Option<String>,
    ) -> Self {
        Self {
            plate,
            chassis,
            engine_number,
        }
    }

    pub fn has_any(&self) -> bool {
        [&self.plate, &self.chassis, &self.engine_number]
            .into_iter()
            .flatten()
            .any(|value| !value.trim().is_empty())
    }

    fn validate(&self) -> Result<()> {
        if self.has_any() {
            Ok(())
        } else {
            Err(HiveError::invalid(
                "identifiers",
                "must supply at least one of plate, chassis, or engine number",
            ))
        }
    }
}

/// Vehicle entity, owned by exactly one yard.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    id: VehicleId,
    yard_id: YardId,
    identifiers: VehicleIdentifiers,
    priority: Priority,
    audit: AuditStamp,
}

impl Vehicle {
    pub fn new(identifiers: VehicleIdentifiers, priority: Priority, yard_id: YardId) -> Result<Self> {
        identifiers.validate()?;
        Ok(Self {
            id: VehicleId::new(),
            yard_id,
            identifiers,
            priority,
            audit: AuditStamp::now(),
        })
    }

    /// Rebuilds a stored vehicle, re-running the same validation.
    pub fn restore(
        id: VehicleId,
        yard_id: YardId,
        identifiers: VehicleIdentifiers,
        priority: Priority,
        audit: AuditStamp,
    ) -> Result<Self> {
        identifiers.validate()?;
        Ok(Self {
            id,
            yard_id,
            identifiers,
            priority,
            audit,
        })
    }

    /// Replaces identifiers, priority and yard; nothing changes on failure.
    pub fn update_data(
        &mut self,
        identifiers: VehicleIdentifiers,
        priority: Priority,
        yard_id: YardId,
    ) -> Result<()> {
        identifiers.validate()?;
        self.identifiers = identifiers;
        self.priority = priority;
        self.yard_id = yard_id;
        self.audit.touch();
        Ok(())
    }

    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn yard_id(&self) -> YardId {
        self.yard_id
    }

    pub fn plate(&self) -> Option<&str> {
        self.identifiers.plate.as_deref()
    }

    pub fn chassis(&self) -> Option<&str> {
        self.identifiers.chassis.as_deref()
    }

    pub fn engine_number(&self) -> Option<&str> {
        self.identifiers.engine_number.as_deref()
    }

    pub fn identifiers(&self) -> &VehicleIdentifiers {
        &self.identifiers
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn audit(&self) -> &AuditStamp {
        &self.audit
    }
}

/// Sort fields accepted by vehicle listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VehicleSortField {
    #[default]
    Id,
    Plate,
    Chassis,
    EngineNumber,
    Priority,
}

impl FromStr for VehicleSortField {
    type Err = HiveError;

    fn from_str(s: &str) -> Result<Self> {
        match sort_key(s).as_str() {
            "id" => Ok(VehicleSortField::Id),
            "plate" => Ok(VehicleSortField::Plate),
            "chassis" => Ok(VehicleSortField::Chassis),
            "enginenumber" => Ok(VehicleSortField::EngineNumber),
            "priority" => Ok(VehicleSortField::Priority),
            _ => Err(HiveError::invalid(
                "sort_by",
                format!(
                    "'{}' is not one of id, plate, chassis, engineNumber, priority",
                    s
                ),
            )),
        }
    }
}

impl Pageable for Vehicle {
    type SortField = VehicleSortField;

    fn search_fields(&self) -> Vec<&str> {
        [self.plate(), self.chassis(), self.engine_number()]
            .into_iter()
            .flatten()
            .collect()
    }

    fn compare_by(&self, other: &Self, field: VehicleSortField) -> Ordering {
        match field {
            VehicleSortField::Id => self.id.cmp(&other.id),
            VehicleSortField::Plate => compare_optional(self.plate(), other.plate()),
            VehicleSortField::Chassis => compare_optional(self.chassis(), other.chassis()),
            VehicleSortField::EngineNumber => {
                compare_optional(self.engine_number(), other.engine_number())
            }
            VehicleSortField::Priority => self.priority.cmp(&other.priority),
        }
    }

    fn tie_breaker(&self) -> Uuid {
        self.id.as_uuid()
    }
}
