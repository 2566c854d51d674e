use std::io::ErrorKind;
use std::path::Path;

use crate::core::error::{OdinError, OdinResult};

/// Check whether anything exists at `path`.
///
/// `Ok(false)` only when the OS confirms absence. Any other failure
/// (permission denied, a file where a directory was expected, I/O errors)
/// comes back as [`OdinError::Probe`] so callers never mistake it for absence.
pub fn exists(path: &Path) -> OdinResult<bool> {
    match std::fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(OdinError::Probe {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_entries_are_found() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("steamcmd.sh");
        std::fs::write(&file, b"#!/bin/sh\n").unwrap();

        assert!(exists(dir.path()).unwrap());
        assert!(exists(&file).unwrap());
    }

    #[test]
    fn absent_entry_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!exists(&dir.path().join("missing")).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn io_failure_is_distinct_from_absence() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("regular");
        std::fs::write(&file, b"").unwrap();

        // Looking inside a regular file fails with ENOTDIR, not ENOENT.
        let err = exists(&file.join("child")).unwrap_err();
        match err {
            OdinError::Probe { path, .. } => assert_eq!(path, file.join("child")),
            other => panic!("expected probe error, got {other:?}"),
        }
    }
}
