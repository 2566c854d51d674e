use std::path::Path;
use std::process::ExitStatus;

use crate::core::error::{OdinError, OdinResult};

/// SteamCMD exits with 7 after a successful `+app_update ... +exit` run on
/// some hosts. It is treated as success for the installer only.
pub const STEAMCMD_BENIGN_EXIT: i32 = 7;

/// How a child process ended.
#[derive(Debug)]
pub enum ExitOutcome {
    /// The process could not be started at all.
    LaunchFailure(std::io::Error),
    CleanExit,
    /// Non-zero, but listed as harmless for this program.
    KnownBenignExit(i32),
    /// Non-zero and not listed, or killed by a signal (`None`).
    AbnormalExit(Option<i32>),
}

/// The one place exit codes are interpreted.
pub fn classify_exit(result: std::io::Result<ExitStatus>, benign_codes: &[i32]) -> ExitOutcome {
    let status = match result {
        Ok(status) => status,
        Err(err) => return ExitOutcome::LaunchFailure(err),
    };

    if status.success() {
        return ExitOutcome::CleanExit;
    }

    match status.code() {
        Some(code) if benign_codes.contains(&code) => ExitOutcome::KnownBenignExit(code),
        code => ExitOutcome::AbnormalExit(code),
    }
}

impl ExitOutcome {
    /// Map to the crate error kinds: spawn failures and bad exits stay distinct.
    pub fn into_result(self, program: &Path) -> OdinResult<()> {
        match self {
            ExitOutcome::CleanExit | ExitOutcome::KnownBenignExit(_) => Ok(()),
            ExitOutcome::LaunchFailure(source) => Err(OdinError::LaunchFailure {
                program: program.to_path_buf(),
                source,
            }),
            ExitOutcome::AbnormalExit(code) => Err(OdinError::AbnormalExit {
                program: program.to_path_buf(),
                code,
            }),
        }
    }
}
