//! core::artifact::store
//!
//! Artifact files on disk.
//!
//! Artifacts are pretty-printed JSON arrays (two-space indent, non-ASCII
//! text written as-is). Writes go to a temporary file in the same
//! directory and are renamed into place. [`write_pair`] stages both
//! artifacts before renaming either.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::schema::VerseRecord;
use super::ArtifactError;

/// Read all records of one artifact.
pub fn read_records(path: &Path) -> Result<Vec<VerseRecord>, ArtifactError> {
    let contents = fs::read_to_string(path).map_err(|e| ArtifactError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&contents).map_err(|e| ArtifactError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Write all records of one artifact atomically.
///
/// Creates parent directories if needed.
pub fn write_records(path: &Path, records: &[VerseRecord]) -> Result<(), ArtifactError> {
    stage_records(path, records)?.commit()
}

/// Write both artifacts of a pair.
///
/// Both temporary files are fully written before either is renamed into
/// place, so a failure while writing leaves both existing artifacts as
/// they were.
pub fn write_pair(
    source_path: &Path,
    source: &[VerseRecord],
    translation_path: &Path,
    translation: &[VerseRecord],
) -> Result<(), ArtifactError> {
    let source = stage_records(source_path, source)?;
    let translation = stage_records(translation_path, translation)?;
    source.commit()?;
    translation.commit()
}

/// A fully written temporary file waiting to replace its artifact.
///
/// Dropping it without [`StagedArtifact::commit`] removes the temporary
/// file.
#[derive(Debug)]
pub struct StagedArtifact {
    path: PathBuf,
    temp_path: PathBuf,
    committed: bool,
}

impl StagedArtifact {
    /// Rename the temporary file over the artifact.
    pub fn commit(mut self) -> Result<(), ArtifactError> {
        fs::rename(&self.temp_path, &self.path).map_err(|e| ArtifactError::Write {
            path: self.path.clone(),
            source: e,
        })?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for StagedArtifact {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.temp_path);
        }
    }
}

/// Write `records` next to `path` without touching `path` itself.
pub fn stage_records(path: &Path, records: &[VerseRecord]) -> Result<StagedArtifact, ArtifactError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ArtifactError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let contents =
        serde_json::to_string_pretty(records).map_err(|e| ArtifactError::Serialize(e.to_string()))?;

    let staged = StagedArtifact {
        path: path.to_path_buf(),
        temp_path: path.with_extension("json.tmp"),
        committed: false,
    };
    let write_err = |e| ArtifactError::Write {
        path: staged.temp_path.clone(),
        source: e,
    };

    let mut file = fs::File::create(&staged.temp_path).map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    file.sync_all().map_err(write_err)?;

    Ok(staged)
}
