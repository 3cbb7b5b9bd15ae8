use chrono::{DateTime, Utc};

/// Creation and last-modification timestamps carried by every entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditStamp {
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl AuditStamp {
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            modified_at: now,
        }
    }

    /// Rebuilds a stamp read back from storage.
    pub fn restore(created_at: DateTime<Utc>, modified_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            modified_at,
        }
    }

    pub fn touch(&mut self) {
        self.modified_at = Utc::now();
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }
}
