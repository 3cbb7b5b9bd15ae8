pub mod capacity;

pub use capacity::CapacityPolicy;
