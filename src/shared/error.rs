use std::fmt;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts distinguish a missing record from a rejected
/// request or a storage failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the command completed
    Success = 0,
    /// The requested id does not exist
    NotFound = 1,
    /// Invalid command-line arguments or rejected input values
    InvalidArguments = 2,
    /// Application error (storage, capacity, configuration, cancellation)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NotFound => write!(f, "Not Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Failures surfaced by the domain, the use cases and the repositories.
///
/// A missing record is not represented here: lookups return `Option` and
/// updates/deletes return `bool`.
#[derive(Debug, Error)]
pub enum HiveError {
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    #[error("Persistence failure: {details}")]
    Persistence { details: String },

    #[error("Yard {yard_id} is full: capacity of {capacity} vehicle(s) reached")]
    CapacityExceeded { yard_id: String, capacity: u32 },

    #[error("Operation cancelled before any change was written")]
    Cancelled,
}

impl HiveError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        HiveError::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    pub fn persistence(details: impl Into<String>) -> Self {
        HiveError::Persistence {
            details: details.into(),
        }
    }

    /// Maps the failure onto the process exit code reported by the CLI.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            HiveError::InvalidArgument { .. } => ExitCode::InvalidArguments,
            HiveError::Persistence { .. }
            | HiveError::CapacityExceeded { .. }
            | HiveError::Cancelled => ExitCode::ApplicationError,
        }
    }
}
