/// Adapters layer - Infrastructure implementations
///
/// This layer contains the concrete implementations of the ports:
/// the arena-backed repositories and the JSON snapshot file.
pub mod outbound;
