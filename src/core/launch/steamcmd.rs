// ─── SteamCMD ───
// Installs or updates the dedicated server files into an instance directory.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use super::exit::{classify_exit, ExitOutcome, STEAMCMD_BENIGN_EXIT};
use super::format_command_for_logs;

/// Build the `+force_install_dir ... +exit` invocation for `app_id`.
pub fn install_command(installer_bin: &Path, install_dir: &Path, app_id: u32) -> Command {
    let mut cmd = Command::new(installer_bin);
    cmd.arg("+force_install_dir")
        .arg(install_dir)
        .args(["+login", "anonymous"])
        .arg("+app_update")
        .arg(app_id.to_string())
        .args(["validate", "+exit"]);

    // Both streams go to our stdout so progress shows up live, in order.
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::from(std::io::stdout()));
    cmd
}

/// Run SteamCMD to completion. Exit code 7 counts as success.
pub async fn install_app(installer_bin: &Path, install_dir: &Path, app_id: u32) -> ExitOutcome {
    let mut cmd = install_command(installer_bin, install_dir, app_id);

    info!("Running SteamCMD for app {} into {:?}", app_id, install_dir);
    debug!("Command: {}", format_command_for_logs(cmd.as_std(), &[]));

    let outcome = classify_exit(cmd.status().await, &[STEAMCMD_BENIGN_EXIT]);
    if let ExitOutcome::KnownBenignExit(code) = outcome {
        debug!("SteamCMD exited with known benign code {}", code);
    }
    outcome
}
