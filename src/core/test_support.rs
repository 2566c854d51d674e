#[cfg(unix)]
use std::path::Path;
#[cfg(target_os = "linux")]
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Tests that write an executable and then spawn it hold this lock. Without
/// it, a fork in another test thread can inherit the still-open write handle
/// and the exec fails with ETXTBSY.
static EXEC_LOCK: Mutex<()> = Mutex::new(());

pub(crate) fn exec_guard() -> MutexGuard<'static, ()> {
    EXEC_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(unix)]
pub(crate) fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

/// Files under `dir` that this process still has a descriptor open on.
#[cfg(target_os = "linux")]
pub(crate) fn open_files_under(dir: &Path) -> Vec<PathBuf> {
    let dir = dir.canonicalize().unwrap();
    std::fs::read_dir("/proc/self/fd")
        .unwrap()
        .filter_map(|entry| std::fs::read_link(entry.ok()?.path()).ok())
        .filter(|target| target.starts_with(&dir))
        .collect()
}
