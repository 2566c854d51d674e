use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::core::downloader::ArchiveSource;
use crate::core::error::{BootstrapError, OdinResult};
use crate::core::paths::InstallationRoot;
use crate::core::probe;

use super::extract::extract_archive;

/// Lifecycle of the local SteamCMD copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallerState {
    Absent,
    Downloading,
    Downloaded,
    Extracting,
    Present,
    Failed,
}

/// What `ensure_installer_present` had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    AlreadyPresent,
    Installed,
}

/// Fetches and unpacks SteamCMD into `<root>/steamcmd/` exactly once.
pub struct Bootstrapper {
    root: InstallationRoot,
    archive_url: String,
    source: Box<dyn ArchiveSource>,
}

impl Bootstrapper {
    pub fn new(root: InstallationRoot, archive_url: String, source: Box<dyn ArchiveSource>) -> Self {
        Self {
            root,
            archive_url,
            source,
        }
    }

    /// `Present` when the installer binary is on disk, `Absent` otherwise.
    pub fn state(&self) -> OdinResult<InstallerState> {
        if probe::exists(&self.root.installer_bin())? {
            Ok(InstallerState::Present)
        } else {
            Ok(InstallerState::Absent)
        }
    }

    /// Make sure SteamCMD is installed. A present binary means no network or
    /// disk activity at all; there is no version check.
    pub async fn ensure_installer_present(&self) -> OdinResult<BootstrapOutcome> {
        if self.state()? == InstallerState::Present {
            debug!("SteamCMD already present at {:?}", self.root.installer_bin());
            return Ok(BootstrapOutcome::AlreadyPresent);
        }

        info!("SteamCMD not found, downloading...");
        match self.install().await {
            Ok(()) => {
                transition(InstallerState::Present);
                info!("SteamCMD installed");
                Ok(BootstrapOutcome::Installed)
            }
            Err(err) => {
                transition(InstallerState::Failed);
                Err(err)
            }
        }
    }

    #[instrument(skip(self), fields(url = %self.archive_url))]
    async fn install(&self) -> OdinResult<()> {
        let archive = self.root.installer_archive();

        transition(InstallerState::Downloading);
        if let Err(err) = self.source.fetch(&self.archive_url, &archive).await {
            discard_partial_download(&archive).await;
            return Err(err.into());
        }
        transition(InstallerState::Downloaded);

        // On failure from here on the archive stays put for inspection.
        transition(InstallerState::Extracting);
        let files = extract_archive(&archive, &self.root.installer_dir())?;
        debug!("Extracted {} files from {:?}", files, archive);

        let installer = self.root.installer_bin();
        if !probe::exists(&installer)? {
            return Err(BootstrapError::MissingInstaller { path: installer }.into());
        }

        tokio::fs::remove_file(&archive)
            .await
            .map_err(|source| BootstrapError::Cleanup {
                path: archive.clone(),
                source,
            })?;
        Ok(())
    }
}

fn transition(state: InstallerState) {
    debug!(?state, "SteamCMD bootstrap");
}

/// Best-effort: a leftover partial archive is harmless, so a failed delete is
/// only logged.
async fn discard_partial_download(archive: &Path) {
    match tokio::fs::remove_file(archive).await {
        Ok(()) => debug!("Removed partial download {:?}", archive),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => warn!("Could not remove partial download {:?}: {}", archive, err),
    }
}
