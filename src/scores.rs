use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScoreError;
use crate::settings::beside_executable;

pub const SCORES_FILE: &str = "highest_score.json";

/// The persisted best score: a single JSON integer, overwritten on every
/// new record.
#[derive(Clone, Debug)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Stored next to the executable.
    pub fn default_location() -> Self {
        Self::new(beside_executable(SCORES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file counts as a high score of zero.
    pub fn load(&self) -> Result<u32, ScoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(source) => {
                return Err(ScoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(text.trim()).map_err(|source| ScoreError::Format {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, high_score: u32) -> Result<(), ScoreError> {
        let json = serde_json::to_string(&high_score).map_err(|source| ScoreError::Format {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|source| ScoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_returns_same_score() {
        let dir = tempfile::tempdir().unwrap();
        let file = HighScoreFile::new(dir.path().join(SCORES_FILE));
        file.save(4_250).unwrap();
        assert_eq!(file.load().unwrap(), 4_250);
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "4250");
    }

    #[test]
    fn save_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let file = HighScoreFile::new(dir.path().join(SCORES_FILE));
        file.save(1_000_000).unwrap();
        file.save(75).unwrap();
        assert_eq!(file.load().unwrap(), 75);
    }

    #[test]
    fn missing_file_loads_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let file = HighScoreFile::new(dir.path().join(SCORES_FILE));
        assert_eq!(file.load().unwrap(), 0);
    }

    #[test]
    fn garbage_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = HighScoreFile::new(dir.path().join(SCORES_FILE));
        fs::write(file.path(), "{\"score\": 3}").unwrap();
        assert!(matches!(file.load(), Err(ScoreError::Format { .. })));
    }

    #[test]
    fn unwritable_location_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = HighScoreFile::new(dir.path().join("missing-dir").join(SCORES_FILE));
        assert!(matches!(file.save(10), Err(ScoreError::Write { .. })));
    }
}
