use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Whether vehicle writes must respect the destination yard's capacity.
///
/// - `Enforced`: the repository checks `Yard::can_accept_vehicle` under the
///   same store lock as the insert/move and refuses with `CapacityExceeded`.
/// - `Advisory`: capacity is reported on yards but never blocks a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityPolicy {
    #[default]
    Enforced,
    Advisory,
}

impl CapacityPolicy {
    pub fn is_enforced(self) -> bool {
        matches!(self, CapacityPolicy::Enforced)
    }
}

impl FromStr for CapacityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "enforced" => Ok(CapacityPolicy::Enforced),
            "advisory" => Ok(CapacityPolicy::Advisory),
            _ => Err(format!(
                "Invalid capacity policy: {}. Please specify 'enforced' or 'advisory'",
                s
            )),
        }
    }
}

impl fmt::Display for CapacityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityPolicy::Enforced => write!(f, "enforced"),
            CapacityPolicy::Advisory => write!(f, "advisory"),
        }
    }
}
