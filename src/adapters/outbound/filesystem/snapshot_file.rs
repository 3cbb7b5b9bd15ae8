use crate::ports::outbound::{Snapshot, SnapshotStore};
use crate::shared::{HiveError, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// JsonSnapshotFile adapter persisting the store as a pretty-printed JSON file
///
/// Writes go to a uniquely named temporary file in the target's directory
/// that is then persisted over the target, so a failed save never truncates
/// the previous snapshot and leaves no temporary file behind.
#[derive(Debug, Clone)]
pub struct JsonSnapshotFile {
    path: PathBuf,
}

impl JsonSnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn reject_symlink(&self) -> Result<()> {
        match fs::symlink_metadata(&self.path) {
            Ok(metadata) if metadata.is_symlink() => Err(HiveError::persistence(format!(
                "{}: symbolic links are not allowed as data files",
                self.path.display()
            ))),
            _ => Ok(()),
        }
    }
}

impl SnapshotStore for JsonSnapshotFile {
    fn load(&self) -> Result<Option<Snapshot>> {
        self.reject_symlink()?;

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no snapshot yet");
                return Ok(None);
            }
            Err(e) => {
                return Err(HiveError::persistence(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let snapshot = serde_json::from_str(&content).map_err(|e| {
            HiveError::persistence(format!("failed to parse {}: {}", self.path.display(), e))
        })?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        self.reject_symlink()?;

        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| HiveError::persistence(format!("failed to encode snapshot: {}", e)))?;

        let mut temp = NamedTempFile::new_in(self.parent_dir()).map_err(|e| {
            HiveError::persistence(format!(
                "failed to create a temporary file next to {}: {}",
                self.path.display(),
                e
            ))
        })?;
        temp.write_all(json.as_bytes())
            .and_then(|_| temp.as_file().sync_all())
            .map_err(|e| {
                HiveError::persistence(format!("failed to write {}: {}", self.path.display(), e))
            })?;
        temp.persist(&self.path).map_err(|e| {
            HiveError::persistence(format!(
                "failed to replace {}: {}",
                self.path.display(),
                e.error
            ))
        })?;

        debug!(
            path = %self.path.display(),
            branches = snapshot.branches.len(),
            yards = snapshot.yards.len(),
            vehicles = snapshot.vehicles.len(),
            "snapshot saved"
        );
        Ok(())
    }
}
