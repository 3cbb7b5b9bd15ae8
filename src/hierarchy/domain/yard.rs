use super::audit::AuditStamp;
use super::ids::{BranchId, YardId};
use super::sort_key;
use crate::hierarchy::services::pagination::Pageable;
use crate::shared::{HiveError, Result};
use std::cmp::Ordering;
use std::str::FromStr;
use uuid::Uuid;

/// Yard entity: a capacity-bounded area owned by exactly one branch.
///
/// The owning branch is fixed at construction; the branch id is kept for
/// lookup only and the yard lives and dies with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Yard {
    id: YardId,
    branch_id: BranchId,
    name: String,
    vehicle_capacity: u32,
    audit: AuditStamp,
}

impl Yard {
    pub fn new(name: impl Into<String>, vehicle_capacity: i64, branch_id: BranchId) -> Result<Self> {
        let name = name.into();
        let vehicle_capacity = Self::validate(&name, vehicle_capacity)?;

        Ok(Self {
            id: YardId::new(),
            branch_id,
            name,
            vehicle_capacity,
            audit: AuditStamp::now(),
        })
    }

    /// Rebuilds a stored yard, re-running the same validation.
    pub fn restore(
        id: YardId,
        branch_id: BranchId,
        name: String,
        vehicle_capacity: i64,
        audit: AuditStamp,
    ) -> Result<Self> {
        let vehicle_capacity = Self::validate(&name, vehicle_capacity)?;
        Ok(Self {
            id,
            branch_id,
            name,
            vehicle_capacity,
            audit,
        })
    }

    pub fn update_data(&mut self, name: impl Into<String>, vehicle_capacity: i64) -> Result<()> {
        let name = name.into();
        let vehicle_capacity = Self::validate(&name, vehicle_capacity)?;

        self.name = name;
        self.vehicle_capacity = vehicle_capacity;
        self.audit.touch();
        Ok(())
    }

    fn validate(name: &str, vehicle_capacity: i64) -> Result<u32> {
        if name.trim().is_empty() {
            return Err(HiveError::invalid("name", "yard name must not be blank"));
        }
        if vehicle_capacity <= 0 {
            return Err(HiveError::invalid(
                "vehicle_capacity",
                format!("yard capacity must be greater than zero, got {}", vehicle_capacity),
            ));
        }
        u32::try_from(vehicle_capacity).map_err(|_| {
            HiveError::invalid(
                "vehicle_capacity",
                format!("yard capacity {} exceeds {}", vehicle_capacity, u32::MAX),
            )
        })
    }

    /// Whether one more vehicle fits, given how many the yard holds now.
    ///
    /// Pure predicate; vehicle creation consults it only under
    /// [`CapacityPolicy::Enforced`](crate::hierarchy::policies::CapacityPolicy).
    pub fn can_accept_vehicle(&self, current_vehicle_count: usize) -> bool {
        current_vehicle_count < self.vehicle_capacity as usize
    }

    pub fn id(&self) -> YardId {
        self.id
    }

    pub fn branch_id(&self) -> BranchId {
        self.branch_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vehicle_capacity(&self) -> u32 {
        self.vehicle_capacity
    }

    pub fn audit(&self) -> &AuditStamp {
        &self.audit
    }
}

/// Sort fields accepted by yard listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YardSortField {
    #[default]
    Name,
    Capacity,
}

impl FromStr for YardSortField {
    type Err = HiveError;

    fn from_str(s: &str) -> Result<Self> {
        match sort_key(s).as_str() {
            "name" => Ok(YardSortField::Name),
            "capacity" | "vehiclecapacity" => Ok(YardSortField::Capacity),
            _ => Err(HiveError::invalid(
                "sort_by",
                format!("'{}' is not one of name, capacity", s),
            )),
        }
    }
}

impl Pageable for Yard {
    type SortField = YardSortField;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn compare_by(&self, other: &Self, field: YardSortField) -> Ordering {
        match field {
            YardSortField::Name => self.name.cmp(&other.name),
            YardSortField::Capacity => self.vehicle_capacity.cmp(&other.vehicle_capacity),
        }
    }

    fn tie_breaker(&self) -> Uuid {
        self.id.as_uuid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_yard_valid() {
        let branch_id = BranchId::new();
        let yard = Yard::new("Yard 1", 2, branch_id).unwrap();
        assert_eq!(yard.name(), "Yard 1");
        assert_eq!(yard.vehicle_capacity(), 2);
        assert_eq!(yard.branch_id(), branch_id);
    }

    #[test]
    fn test_new_yard_rejects_non_positive_capacity() {
        for capacity in [0, -1, -100, i64::MIN] {
            let err = Yard::new("Yard 1", capacity, BranchId::new()).unwrap_err();
            assert!(matches!(
                err,
                HiveError::InvalidArgument {
                    field: "vehicle_capacity",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_new_yard_rejects_oversized_capacity() {
        assert!(Yard::new("Yard 1", i64::from(u32::MAX) + 1, BranchId::new()).is_err());
    }

    #[test]
    fn test_new_yard_rejects_blank_name() {
        let err = Yard::new("  ", 5, BranchId::new()).unwrap_err();
        assert!(matches!(err, HiveError::InvalidArgument { field: "name", .. }));
    }

    #[test]
    fn test_update_yard_validates() {
        let mut yard = Yard::new("Yard 1", 5, BranchId::new()).unwrap();
        let before = yard.clone();
        assert!(yard.update_data("Yard 2", 0).is_err());
        assert_eq!(yard, before);

        yard.update_data("Yard 2", 8).unwrap();
        assert_eq!(yard.name(), "Yard 2");
        assert_eq!(yard.vehicle_capacity(), 8);
        assert_eq!(yard.branch_id(), before.branch_id());
    }

    #[test]
    fn test_can_accept_vehicle() {
        let yard = Yard::new("Yard 1", 2, BranchId::new()).unwrap();
        assert!(yard.can_accept_vehicle(0));
        assert!(yard.can_accept_vehicle(1));
        assert!(!yard.can_accept_vehicle(2));
        assert!(!yard.can_accept_vehicle(3));
    }

    #[test]
    fn test_search_matches_name_only() {
        let yard = Yard::new("Yard 1", 2, BranchId::new()).unwrap();
        assert!(yard.matches("Yard 1"));
        assert!(!yard.matches("yard"));
        assert!(!yard.matches("2"));
    }
}
