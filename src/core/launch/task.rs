// ─── Launch Task ───
// Runs a dedicated server in the foreground until it exits.

use std::process::{ExitStatus, Stdio};

use tokio::process::{Child, Command};
use tracing::{debug, info};

use crate::core::error::OdinResult;
use crate::core::instance::{LaunchParameters, ServerInstance};

use super::exit::classify_exit;
use super::format_command_for_logs;

const PASSWORD_FLAG: &str = "-password";

/// Read by the server's bundled Steam runtime; it refuses to start without it.
pub const STEAM_APP_ID_ENV: &str = "SteamAppId";

pub fn server_command(
    instance: &ServerInstance,
    params: &LaunchParameters,
    game_app_id: u32,
) -> Command {
    let name = instance.name.as_str();
    let mut cmd = Command::new(&instance.server_bin);
    cmd.args(["-nographics", "-batchmode"])
        .args(["-name", name])
        .args(["-world", name])
        .arg("-port")
        .arg(params.port.to_string())
        .arg(PASSWORD_FLAG)
        .arg(&params.password)
        .arg("-savedir")
        .arg(&instance.dir);

    cmd.env(STEAM_APP_ID_ENV, game_app_id.to_string());
    cmd.current_dir(&instance.dir);

    // Interactive session: the operator talks to the server directly.
    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());
    cmd
}

/// Launch the server and block until it exits. Any non-zero exit is an error.
pub async fn run_server(
    instance: &ServerInstance,
    params: &LaunchParameters,
    game_app_id: u32,
) -> OdinResult<()> {
    let mut cmd = server_command(instance, params, game_app_id);

    info!(
        "Starting server \"{}\" on port {}",
        instance.name, params.port
    );
    debug!(
        "Command: {}",
        format_command_for_logs(cmd.as_std(), &[PASSWORD_FLAG])
    );
    info!("Tip: Press CTRL+C to save and quit server");

    let status = match cmd.spawn() {
        Ok(mut child) => wait_through_interrupts(&mut child).await,
        Err(err) => Err(err),
    };

    classify_exit(status, &[]).into_result(&instance.server_bin)?;
    info!("Server \"{}\" stopped", instance.name);
    Ok(())
}

/// Ctrl+C reaches the server too, which saves and quits on its own. We keep
/// waiting so its exit code is still observed.
async fn wait_through_interrupts(child: &mut Child) -> std::io::Result<ExitStatus> {
    loop {
        tokio::select! {
            status = child.wait() => return status,
            signal = tokio::signal::ctrl_c() => {
                if signal.is_err() {
                    return child.wait().await;
                }
                info!("Interrupt received, waiting for the server to save and quit...");
            }
        }
    }
}
