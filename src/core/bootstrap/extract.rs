use std::fs::File;
use std::path::Path;

use tracing::debug;
use zip::ZipArchive;

use crate::core::error::BootstrapError;

/// Unpack every entry of the zip at `archive_path` into `dest`.
///
/// Each entry's reader and output file are scoped to one loop iteration, so
/// both are closed before the next entry and on every early return. The first
/// failing entry aborts the extraction; files written before it stay on disk.
/// Returns the number of files written.
pub fn extract_archive(archive_path: &Path, dest: &Path) -> Result<usize, BootstrapError> {
    let open_err = |source| BootstrapError::ArchiveOpen {
        path: archive_path.to_path_buf(),
        source,
    };
    let archive_file = File::open(archive_path)
        .map_err(|e| open_err(zip::result::ZipError::Io(e)))?;
    let mut archive = ZipArchive::new(archive_file).map_err(open_err)?;

    let mut written = 0;
    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|source| BootstrapError::Entry { index, source })?;

        let relative = entry
            .enclosed_name()
            .ok_or_else(|| BootstrapError::UnsafeEntry {
                name: entry.name().to_string(),
            })?;
        let out_path = dest.join(relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&out_path).map_err(|source| BootstrapError::Extract {
                path: out_path.clone(),
                source,
            })?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| BootstrapError::Extract {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut out = File::create(&out_path).map_err(|source| BootstrapError::Extract {
            path: out_path.clone(),
            source,
        })?;
        std::io::copy(&mut entry, &mut out).map_err(|source| BootstrapError::Extract {
            path: out_path.clone(),
            source,
        })?;
        drop(out);

        apply_mode(entry.unix_mode(), &out_path)?;
        debug!("Extracted {:?}", out_path);
        written += 1;
    }

    Ok(written)
}

/// Keep the archived permission bits so `steamcmd.sh` stays executable.
#[cfg(unix)]
fn apply_mode(mode: Option<u32>, path: &Path) -> Result<(), BootstrapError> {
    use std::os::unix::fs::PermissionsExt;

    let Some(mode) = mode else {
        return Ok(());
    };
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode)).map_err(|source| {
        BootstrapError::Extract {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(not(unix))]
fn apply_mode(_mode: Option<u32>, _path: &Path) -> Result<(), BootstrapError> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use zip::write::SimpleFileOptions;

    use super::*;

    fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
        let mut writer = zip::ZipWriter::new(File::create(path).unwrap());
        for (name, contents) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(contents).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn extracts_nested_entries() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("steamcmd.zip");
        let dest = dir.path().join("steamcmd");
        std::fs::create_dir(&dest).unwrap();
        write_zip(
            &archive,
            &[("steamcmd.sh", b"#!/bin/sh\n"), ("linux32/steamcmd", b"elf")],
        );

        let written = extract_archive(&archive, &dest).unwrap();

        assert_eq!(written, 2);
        assert_eq!(std::fs::read(dest.join("steamcmd.sh")).unwrap(), b"#!/bin/sh\n");
        assert_eq!(std::fs::read(dest.join("linux32/steamcmd")).unwrap(), b"elf");
    }

    #[test]
    fn stops_at_failing_entry_and_keeps_earlier_files() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("steamcmd.zip");
        let dest = dir.path().join("steamcmd");
        std::fs::create_dir(&dest).unwrap();
        write_zip(
            &archive,
            &[("first.txt", b"1"), ("second.txt", b"2"), ("third.txt", b"3")],
        );
        // A directory squatting on the second entry's path makes its create fail.
        std::fs::create_dir(dest.join("second.txt")).unwrap();

        let err = extract_archive(&archive, &dest).unwrap_err();

        assert!(matches!(err, BootstrapError::Extract { ref path, .. } if path.ends_with("second.txt")));
        assert_eq!(std::fs::read(dest.join("first.txt")).unwrap(), b"1");
        assert!(!dest.join("third.txt").exists());
        #[cfg(target_os = "linux")]
        assert_eq!(
            crate::core::test_support::open_files_under(dir.path()),
            Vec::<std::path::PathBuf>::new()
        );
    }

    #[test]
    fn rejects_entries_outside_destination() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("steamcmd.zip");
        let dest = dir.path().join("steamcmd");
        std::fs::create_dir(&dest).unwrap();
        write_zip(&archive, &[("../escape.txt", b"x")]);

        let err = extract_archive(&archive, &dest).unwrap_err();

        assert!(matches!(err, BootstrapError::UnsafeEntry { .. }));
        assert!(!dir.path().join("escape.txt").exists());
    }

    #[test]
    fn garbage_archive_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("steamcmd.zip");
        std::fs::write(&archive, b"<html>not a zip</html>").unwrap();

        let err = extract_archive(&archive, dir.path()).unwrap_err();

        assert!(matches!(err, BootstrapError::ArchiveOpen { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn keeps_unix_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("steamcmd.zip");
        let dest = dir.path().join("steamcmd");
        std::fs::create_dir(&dest).unwrap();

        let mut writer = zip::ZipWriter::new(File::create(&archive).unwrap());
        writer
            .start_file(
                "steamcmd.sh",
                SimpleFileOptions::default().unix_permissions(0o755),
            )
            .unwrap();
        writer.write_all(b"#!/bin/sh\n").unwrap();
        writer.finish().unwrap();

        extract_archive(&archive, &dest).unwrap();

        let mode = std::fs::metadata(dest.join("steamcmd.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
