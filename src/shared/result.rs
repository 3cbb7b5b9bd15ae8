use super::error::HiveError;

/// Type alias for Result with [`HiveError`] as the error type.
/// Callers match on the typed failure instead of downcasting.
pub type Result<T> = std::result::Result<T, HiveError>;
