//! Identifier-to-path index over the per-match document directory.
//!
//! Document files are named `<date>_<home>_<away>_<matchId>.json`. The index
//! is built once at startup so a lookup is a hash probe instead of a
//! directory scan per request, and naming problems (files with no trailing
//! id segment, two files claiming the same id) show up in the startup log
//! instead of being resolved silently.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use pitch_core::record::MatchRecord;
use serde_json::Value as JsonValue;

use crate::error::AppError;

/// Match id to document path, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct MatchIndex {
    paths: HashMap<String, PathBuf>,
}

impl MatchIndex {
    /// Scan `dir` for `*.json` documents and index them by the trailing
    /// `_<id>` segment of the file stem. Files without one are skipped with
    /// a warning. On duplicate ids the lexicographically first path wins.
    pub fn build(dir: &Path) -> anyhow::Result<Self> {
        if !dir.is_dir() {
            tracing::warn!(
                "Match directory {} does not exist; no documents indexed",
                dir.display()
            );
            return Ok(Self::default());
        }

        let pattern = dir.join("*.json");
        let pattern = pattern
            .to_str()
            .context("match directory path is not valid UTF-8")?;

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in glob::glob(pattern).context("invalid match directory pattern")? {
            files.push(entry.context("unreadable match directory entry")?);
        }
        files.sort();

        let mut paths: HashMap<String, PathBuf> = HashMap::new();
        for path in files {
            let Some(id) = match_id_from_path(&path) else {
                tracing::warn!("Skipping match file with no id segment: {}", path.display());
                continue;
            };
            if let Some(existing) = paths.get(&id) {
                tracing::warn!(
                    "Duplicate match id {}: keeping {}, ignoring {}",
                    id,
                    existing.display(),
                    path.display()
                );
                continue;
            }
            paths.insert(id, path);
        }

        Ok(Self { paths })
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Path of the document for a match id, if one was indexed.
    pub fn path_for(&self, match_id: &str) -> Option<&Path> {
        self.paths.get(match_id).map(PathBuf::as_path)
    }

    /// Load and parse the typed record for a match id.
    pub async fn load_record(&self, match_id: &str) -> Result<MatchRecord, AppError> {
        let bytes = self.read_document(match_id).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Load the stored document for a match id as raw JSON.
    pub async fn load_raw(&self, match_id: &str) -> Result<JsonValue, AppError> {
        let bytes = self.read_document(match_id).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn read_document(&self, match_id: &str) -> Result<Vec<u8>, AppError> {
        let path = self
            .path_for(match_id)
            .ok_or_else(|| AppError::NotFound(format!("No match found with id '{match_id}'")))?;
        Ok(tokio::fs::read(path).await?)
    }
}

/// Extract the id from a `<anything>_<id>.json` file name.
fn match_id_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let (_, id) = stem.rsplit_once('_')?;
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_doc(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn indexes_documents_by_trailing_id_segment() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "20240102_Getafe_Rayo_1734855.json", "{}");
        write_doc(dir.path(), "20230812_Inter_Milan_99.json", "{}");

        let index = MatchIndex::build(dir.path()).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(
            index.path_for("1734855").unwrap(),
            dir.path().join("20240102_Getafe_Rayo_1734855.json")
        );
        assert!(index.path_for("20240102").is_none());
    }

    #[test]
    fn skips_files_without_an_id_segment() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "noidsegment.json", "{}");
        write_doc(dir.path(), "_.json", "{}");
        write_doc(dir.path(), "a_1.json", "{}");

        let index = MatchIndex::build(dir.path()).unwrap();

        assert_eq!(index.len(), 1);
        assert!(index.path_for("1").is_some());
    }

    #[test]
    fn ignores_non_json_files() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "a_1.json", "{}");
        write_doc(dir.path(), "notes_2.txt", "{}");

        let index = MatchIndex::build(dir.path()).unwrap();

        assert_eq!(index.len(), 1);
        assert!(index.path_for("2").is_none());
    }

    #[test]
    fn first_path_wins_on_duplicate_ids() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "b_later_77.json", "{}");
        write_doc(dir.path(), "a_earlier_77.json", "{}");

        let index = MatchIndex::build(dir.path()).unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(
            index.path_for("77").unwrap(),
            dir.path().join("a_earlier_77.json")
        );
    }

    #[test]
    fn missing_directory_builds_an_empty_index() {
        let dir = tempfile::tempdir().unwrap();
        let index = MatchIndex::build(&dir.path().join("nope")).unwrap();
        assert!(index.is_empty());
    }

    #[tokio::test]
    async fn load_record_parses_the_document() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(
            dir.path(),
            "20240102_A_B_42.json",
            r#"{"matchId": 42, "maxMinute": 95}"#,
        );

        let index = MatchIndex::build(dir.path()).unwrap();
        let record = index.load_record("42").await.unwrap();

        assert_eq!(record.match_id, Some(42));
        assert_eq!(record.max_minute, Some(95));
    }

    #[tokio::test]
    async fn unknown_id_is_a_not_found_error() {
        let dir = tempfile::tempdir().unwrap();
        let index = MatchIndex::build(dir.path()).unwrap();

        let err = index.load_raw("123").await.unwrap_err();
        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "No match found with id '123'"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
