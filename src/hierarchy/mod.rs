/// Hierarchy domain: entities, the pagination engine and write policies.
///
/// Nothing in here performs I/O; persistence goes through the repository
/// ports in [`crate::ports`].
pub mod domain;
pub mod policies;
pub mod services;
