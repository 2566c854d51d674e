use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

/// Open `folder` in the platform file browser.
///
/// Best-effort by contract: the browser is spawned and left running, and any
/// failure to spawn it is logged at debug level and otherwise ignored. Callers
/// get no result to act on.
pub fn open_folder(folder: &Path) {
    let mut command = browser_command(folder);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    match command.spawn() {
        Ok(_child) => debug!("Opened {:?} in the file browser", folder),
        Err(err) => debug!("Could not open {:?} in the file browser: {}", folder, err),
    }
}

fn browser_command(folder: &Path) -> Command {
    #[cfg(target_os = "windows")]
    let mut cmd = Command::new("explorer");

    #[cfg(target_os = "macos")]
    let mut cmd = Command::new("open");

    #[cfg(all(unix, not(target_os = "macos")))]
    let mut cmd = Command::new("xdg-open");

    cmd.arg(folder);
    cmd
}
