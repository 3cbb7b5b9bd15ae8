/// Outbound adapters - Storage implementations of outbound ports
pub mod filesystem;
pub mod memory;
