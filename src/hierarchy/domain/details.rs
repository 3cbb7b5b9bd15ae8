use super::{Branch, Vehicle, Yard};

/// A branch together with the yards it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchDetails {
    pub branch: Branch,
    pub yards: Vec<Yard>,
}

/// A yard together with its owning branch and the vehicles parked in it.
#[derive(Debug, Clone, PartialEq)]
pub struct YardDetails {
    pub yard: Yard,
    pub branch: Branch,
    pub vehicles: Vec<Vehicle>,
}

impl YardDetails {
    /// Capacity check against the vehicles loaded with this yard.
    pub fn can_accept_vehicle(&self) -> bool {
        self.yard.can_accept_vehicle(self.vehicles.len())
    }
}

/// A vehicle together with the yard it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleDetails {
    pub vehicle: Vehicle,
    pub yard: Yard,
}
