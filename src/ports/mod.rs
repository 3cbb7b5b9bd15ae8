/// Ports module defining the interfaces between the core and storage
///
/// The use cases depend only on these traits; adapters provide the
/// concrete implementations.
pub mod outbound;
