use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{Result, WatchError};
use crate::snapshot::Snapshot;

/// Flat-file record of the last snapshot that was announced.
///
/// Writes are plain overwrites. A torn write leaves a record that fails to
/// parse, which `load_or_default` treats as "no baseline".
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored snapshot. `Ok(None)` when no record has been written yet.
    pub async fn load(&self) -> Result<Option<Snapshot>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(WatchError::Persistence(format!(
                    "reading {}: {e}",
                    self.path.display()
                )))
            }
        };

        contents
            .parse::<Snapshot>()
            .map(Some)
            .map_err(|e| WatchError::Persistence(format!("{}: {e}", self.path.display())))
    }

    /// Load the baseline, falling back to zero on any failure.
    pub async fn load_or_default(&self) -> Snapshot {
        match self.load().await {
            Ok(Some(snapshot)) => {
                info!(
                    cases = snapshot.cases,
                    deaths = snapshot.deaths,
                    path = %self.path.display(),
                    "Loaded baseline"
                );
                snapshot
            }
            Ok(None) => {
                info!(path = %self.path.display(), "No stored baseline, starting from zero");
                Snapshot::default()
            }
            Err(e) => {
                warn!(error = %e, "Unreadable baseline, starting from zero");
                Snapshot::default()
            }
        }
    }

    pub async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        tokio::fs::write(&self.path, snapshot.to_string())
            .await
            .map_err(|e| WatchError::Persistence(format!("writing {}: {e}", self.path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("latestRecord"));

        store.save(&Snapshot::new(1234, 56)).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(Snapshot::new(1234, 56)));
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, "1234,56");
    }

    #[tokio::test]
    async fn missing_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("latestRecord"));

        assert_eq!(store.load().await.unwrap(), None);
        assert_eq!(store.load_or_default().await, Snapshot::default());
    }

    #[tokio::test]
    async fn corrupt_file_falls_back_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latestRecord");
        std::fs::write(&path, "12").unwrap();
        let store = RecordStore::new(path);

        assert!(matches!(store.load().await, Err(WatchError::Persistence(_))));
        assert_eq!(store.load_or_default().await, Snapshot::default());
    }

    #[tokio::test]
    async fn save_overwrites_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("latestRecord"));

        store.save(&Snapshot::new(1_000_000, 50_000)).await.unwrap();
        store.save(&Snapshot::new(7, 1)).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(Snapshot::new(7, 1)));
    }

    #[tokio::test]
    async fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("nope").join("latestRecord"));

        let err = store.save(&Snapshot::new(1, 1)).await.unwrap_err();
        assert!(matches!(err, WatchError::Persistence(_)));
    }
}
