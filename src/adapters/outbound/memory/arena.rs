use crate::hierarchy::domain::{
    Branch, BranchDetails, BranchId, Vehicle, VehicleDetails, VehicleId, Yard, YardDetails, YardId,
};
use crate::ports::outbound::{Snapshot, SNAPSHOT_VERSION};
use crate::shared::{HiveError, Result};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Id-keyed tables for the three entity kinds.
///
/// Children refer to parents by id only. Parent/child navigation is a scan
/// over the child table, so there are no reference cycles and a cascade is
/// just a set of key removals.
#[derive(Debug, Default)]
pub struct Arena {
    pub(super) branches: BTreeMap<BranchId, Branch>,
    pub(super) yards: BTreeMap<YardId, Yard>,
    pub(super) vehicles: BTreeMap<VehicleId, Vehicle>,
}

impl Arena {
    /// Rebuilds the tables from a snapshot, checking every record and every
    /// foreign key.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(HiveError::persistence(format!(
                "unsupported snapshot version {} (expected {})",
                snapshot.version, SNAPSHOT_VERSION
            )));
        }

        let mut arena = Arena::default();

        for record in snapshot.branches {
            let branch = Branch::try_from(record)?;
            if arena.branches.insert(branch.id(), branch).is_some() {
                return Err(HiveError::persistence("duplicate branch id in snapshot"));
            }
        }

        for record in snapshot.yards {
            let yard = Yard::try_from(record)?;
            arena.require_branch(yard.branch_id())?;
            if arena.yards.insert(yard.id(), yard).is_some() {
                return Err(HiveError::persistence("duplicate yard id in snapshot"));
            }
        }

        for record in snapshot.vehicles {
            let vehicle = Vehicle::try_from(record)?;
            arena.require_yard(vehicle.yard_id())?;
            if arena.vehicles.insert(vehicle.id(), vehicle).is_some() {
                return Err(HiveError::persistence("duplicate vehicle id in snapshot"));
            }
        }

        Ok(arena)
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            branches: self.branches.values().map(Into::into).collect(),
            yards: self.yards.values().map(Into::into).collect(),
            vehicles: self.vehicles.values().map(Into::into).collect(),
        }
    }

    pub(super) fn require_branch(&self, id: BranchId) -> Result<&Branch> {
        self.branches.get(&id).ok_or_else(|| {
            HiveError::persistence(format!(
                "foreign key violation: branch {} does not exist",
                id
            ))
        })
    }

    pub(super) fn require_yard(&self, id: YardId) -> Result<&Yard> {
        self.yards.get(&id).ok_or_else(|| {
            HiveError::persistence(format!("foreign key violation: yard {} does not exist", id))
        })
    }

    pub(super) fn yards_of(&self, branch_id: BranchId) -> impl Iterator<Item = &Yard> {
        self.yards
            .values()
            .filter(move |yard| yard.branch_id() == branch_id)
    }

    pub(super) fn vehicles_in(&self, yard_id: YardId) -> impl Iterator<Item = &Vehicle> {
        self.vehicles
            .values()
            .filter(move |vehicle| vehicle.yard_id() == yard_id)
    }

    pub(super) fn branch_details(&self, branch: &Branch) -> BranchDetails {
        BranchDetails {
            branch: branch.clone(),
            yards: self.yards_of(branch.id()).cloned().collect(),
        }
    }

    pub(super) fn yard_details(&self, yard: &Yard) -> Result<YardDetails> {
        Ok(YardDetails {
            yard: yard.clone(),
            branch: self.require_branch(yard.branch_id())?.clone(),
            vehicles: self.vehicles_in(yard.id()).cloned().collect(),
        })
    }

    pub(super) fn vehicle_details(&self, vehicle: &Vehicle) -> Result<VehicleDetails> {
        Ok(VehicleDetails {
            vehicle: vehicle.clone(),
            yard: self.require_yard(vehicle.yard_id())?.clone(),
        })
    }

    /// Removes the yard and every vehicle parked in it.
    /// Returns the number of vehicles removed, or `None` if the yard is absent.
    pub(super) fn remove_yard_cascade(&mut self, id: YardId) -> Option<usize> {
        self.yards.remove(&id)?;
        let before = self.vehicles.len();
        self.vehicles.retain(|_, vehicle| vehicle.yard_id() != id);
        Some(before - self.vehicles.len())
    }

    /// Removes the branch, its yards and their vehicles.
    /// Returns `(yards, vehicles)` removed, or `None` if the branch is absent.
    pub(super) fn remove_branch_cascade(&mut self, id: BranchId) -> Option<(usize, usize)> {
        self.branches.remove(&id)?;
        let yard_ids: HashSet<YardId> = self.yards_of(id).map(Yard::id).collect();

        let before = self.vehicles.len();
        self.vehicles
            .retain(|_, vehicle| !yard_ids.contains(&vehicle.yard_id()));
        let vehicles_removed = before - self.vehicles.len();

        self.yards.retain(|yard_id, _| !yard_ids.contains(yard_id));
        Some((yard_ids.len(), vehicles_removed))
    }
}

/// Shared handle to the arena; clones see the same data.
///
/// Every repository operation takes the lock once for its whole duration,
/// which makes a cascade delete or a checked insert a single unit of work.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    arena: Arc<RwLock<Arena>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        Ok(Self {
            arena: Arc::new(RwLock::new(Arena::from_snapshot(snapshot)?)),
        })
    }

    pub async fn snapshot(&self) -> Snapshot {
        self.arena.read().await.to_snapshot()
    }

    pub(super) async fn read(&self) -> RwLockReadGuard<'_, Arena> {
        self.arena.read().await
    }

    pub(super) async fn write(&self) -> RwLockWriteGuard<'_, Arena> {
        self.arena.write().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::domain::{Priority, VehicleIdentifiers};

    fn populated() -> (Arena, BranchId, YardId, YardId) {
        let mut arena = Arena::default();
        let branch = Branch::new("Branch A", "Downtown", "12.345.678/0001-99").unwrap();
        let other = Branch::new("Branch B", "Uptown", "98.765.432/0001-10").unwrap();
        let yard = Yard::new("Yard 1", 5, branch.id()).unwrap();
        let other_yard = Yard::new("Yard 2", 5, other.id()).unwrap();
        for (yard_id, plate) in [(yard.id(), "AAA0001"), (yard.id(), "AAA0002"), (other_yard.id(), "BBB0001")] {
            let vehicle = Vehicle::new(
                VehicleIdentifiers::new(Some(plate.to_string()), None, None),
                Priority::Low,
                yard_id,
            )
            .unwrap();
            arena.vehicles.insert(vehicle.id(), vehicle);
        }
        let ids = (branch.id(), yard.id(), other_yard.id());
        arena.branches.insert(branch.id(), branch);
        arena.branches.insert(other.id(), other);
        arena.yards.insert(yard.id(), yard);
        arena.yards.insert(other_yard.id(), other_yard);
        (arena, ids.0, ids.1, ids.2)
    }

    #[test]
    fn test_branch_cascade_removes_descendants_only() {
        let (mut arena, branch_id, yard_id, other_yard_id) = populated();
        assert_eq!(arena.remove_branch_cascade(branch_id), Some((1, 2)));
        assert!(!arena.yards.contains_key(&yard_id));
        assert!(arena.yards.contains_key(&other_yard_id));
        assert_eq!(arena.vehicles.len(), 1);
        assert_eq!(arena.branches.len(), 1);
    }

    #[test]
    fn test_cascade_on_missing_ids() {
        let (mut arena, _, _, _) = populated();
        assert_eq!(arena.remove_branch_cascade(BranchId::new()), None);
        assert_eq!(arena.remove_yard_cascade(YardId::new()), None);
        assert_eq!(arena.vehicles.len(), 3);
    }

    #[test]
    fn test_yard_cascade() {
        let (mut arena, _, yard_id, _) = populated();
        assert_eq!(arena.remove_yard_cascade(yard_id), Some(2));
        assert_eq!(arena.vehicles.len(), 1);
    }

    #[test]
    fn test_snapshot_round_trip_preserves_tables() {
        let (arena, _, _, _) = populated();
        let snapshot = arena.to_snapshot();
        let restored = Arena::from_snapshot(snapshot.clone()).unwrap();
        assert_eq!(restored.to_snapshot(), snapshot);
    }

    #[test]
    fn test_snapshot_with_dangling_yard_is_rejected() {
        let (arena, branch_id, _, _) = populated();
        let mut snapshot = arena.to_snapshot();
        snapshot.branches.retain(|b| b.id != branch_id);
        let err = Arena::from_snapshot(snapshot).unwrap_err();
        assert!(format!("{}", err).contains("foreign key violation"));
    }

    #[test]
    fn test_snapshot_version_mismatch_is_rejected() {
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION + 1,
            ..Snapshot::default()
        };
        assert!(Arena::from_snapshot(snapshot).is_err());
    }
}
