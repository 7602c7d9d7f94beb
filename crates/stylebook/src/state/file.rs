use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{StateResult, StateStore};
use crate::error::StateError;

/// One JSON file per slot under a directory.
///
/// Writes go to `<slot>.json.tmp` first and are renamed over `<slot>.json`,
/// so a crash mid-write leaves the previous content intact.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    dir: PathBuf,
}

impl FileStateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slot))
    }
}

impl StateStore for FileStateStore {
    fn name(&self) -> &str {
        "file"
    }

    fn load(&self, slot: &str) -> StateResult<Option<serde_json::Value>> {
        let path = self.slot_path(slot);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StateError::Serialization {
                slot: slot.to_string(),
                source,
            })
    }

    fn save(&mut self, slot: &str, value: serde_json::Value) -> StateResult<()> {
        fs::create_dir_all(&self.dir).map_err(|_| StateError::Unavailable {
            path: self.dir.clone(),
        })?;

        let path = self.slot_path(slot);
        let tmp_path = path.with_extension("json.tmp");
        {
            let file = File::create(&tmp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &value).map_err(|source| {
                StateError::Serialization {
                    slot: slot.to_string(),
                    source,
                }
            })?;
            writer.flush()?;
        }
        fs::rename(&tmp_path, &path)?;

        debug!(slot, path = %path.display(), "saved state slot");
        Ok(())
    }

    fn clear(&mut self) -> StateResult<()> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(err.into()),
        };
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}
