use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use scoring::models::RankSnapshot;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{CliError, Result};

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    Ok(serde_json::from_str(&content)?)
}

/// Loads the snapshot left by the previous run. A missing file is a first run.
pub fn load_snapshot(path: &Path) -> Result<RankSnapshot> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(serde_json::from_str(&content)?),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No snapshot at {}, treating as first run", path.display());
            Ok(RankSnapshot::new())
        }
        Err(e) => Err(CliError::io(path, e)),
    }
}

/// Replaces the snapshot file. Written to a sibling file first and renamed so a
/// failed run never leaves a truncated snapshot behind.
pub fn save_snapshot(path: &Path, snapshot: &RankSnapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    let staging = path.with_extension("json.tmp");

    fs::write(&staging, json).map_err(|e| CliError::io(&staging, e))?;
    fs::rename(&staging, path).map_err(|e| CliError::io(path, e))?;

    info!("Saved snapshot of {} ranks to {}", snapshot.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use uuid::Uuid;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir().join(format!("tourney-{}.json", Uuid::new_v4()))
    }

    #[test]
    fn test_missing_snapshot_is_empty() {
        let snapshot = load_snapshot(&scratch_path()).unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_snapshot_is_overwritten() {
        let path = scratch_path();
        let subject = Uuid::new_v4();

        save_snapshot(&path, &[(subject, 3)].into_iter().collect()).unwrap();
        save_snapshot(&path, &[(subject, 0)].into_iter().collect()).unwrap();

        let loaded = load_snapshot(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.rank_of(&subject), Some(0));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_malformed_snapshot_is_an_error() {
        let path = scratch_path();
        fs::write(&path, "not json").unwrap();

        assert!(matches!(load_snapshot(&path), Err(CliError::Json(_))));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_json_missing_file() {
        let result: Result<RankSnapshot> = read_json(&scratch_path());
        assert!(matches!(result, Err(CliError::Io { .. })));
    }
}
