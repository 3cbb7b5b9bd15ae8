/// Shared kernel: error taxonomy, result alias and cancellation.
pub mod cancellation;
pub mod error;
pub mod result;

pub use cancellation::CancelSignal;
pub use error::{ExitCode, HiveError};
pub use result::Result;
