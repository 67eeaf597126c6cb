//! JSON file helpers used by on-disk stores and the CLI.

use crate::error::CommonError;
use crate::result::CommonResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read and parse `path`. A missing file is `Ok(None)`.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> CommonResult<Option<T>> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(serde_json::from_str(&source)?))
}

/// Write `value` as pretty JSON.
///
/// The file is written next to its destination and renamed over it, so
/// readers never see a half-written document.
pub fn write_json_file<T: Serialize + ?Sized>(path: &Path, value: &T) -> CommonResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');

    let tmp = tmp_path(path);
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;

    debug!(path = %path.display(), "Wrote JSON file");
    Ok(())
}

/// Delete `path`. Returns whether a file was there.
pub fn remove_file_if_exists(path: &Path) -> CommonResult<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err.into()),
    }
}

/// File stems of every `*.json` file directly inside `dir`, sorted.
/// A missing directory yields an empty list.
pub fn list_json_stems(dir: &Path) -> CommonResult<Vec<String>> {
    if dir.is_file() {
        return Err(CommonError::NotADirectory(dir.to_path_buf()));
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };

    let mut stems = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            stems.push(stem.to_string());
        }
    }
    stems.sort();
    Ok(stems)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let value: Option<Value> = read_json_file(&dir.path().join("nope.json")).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("site.json");

        write_json_file(&path, &json!({ "id": "home" })).unwrap();
        let value: Option<Value> = read_json_file(&path).unwrap();
        assert_eq!(value, Some(json!({ "id": "home" })));
        assert!(!dir.path().join("nested").join("site.json.tmp").exists());
    }

    #[test]
    fn test_bad_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let result: CommonResult<Option<Value>> = read_json_file(&path);
        assert!(matches!(result, Err(crate::CommonError::Json(_))));
    }

    #[test]
    fn test_list_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        write_json_file(&dir.path().join("b.json"), &json!({})).unwrap();
        write_json_file(&dir.path().join("a.json"), &json!({})).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();

        assert_eq!(list_json_stems(dir.path()).unwrap(), ["a", "b"]);
        assert!(remove_file_if_exists(&dir.path().join("a.json")).unwrap());
        assert!(!remove_file_if_exists(&dir.path().join("a.json")).unwrap());
        assert!(list_json_stems(&dir.path().join("missing")).unwrap().is_empty());
    }

    #[test]
    fn test_list_on_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, "{}").unwrap();
        assert!(matches!(list_json_stems(&path), Err(CommonError::NotADirectory(_))));
    }
}
