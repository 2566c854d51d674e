use tracing::{info, instrument};

use super::model::{InstanceName, LaunchParameters, ProvisionOutcome, ServerInstance};
use crate::core::bootstrap::Bootstrapper;
use crate::core::error::{OdinError, OdinResult};
use crate::core::launch;
use crate::core::paths::InstallationRoot;
use crate::core::probe;
use crate::core::state::Settings;

/// Manages server instances on disk: the directory layout, provisioning
/// through SteamCMD, and foreground server sessions.
pub struct InstanceManager {
    root: InstallationRoot,
    server_app_id: u32,
    game_app_id: u32,
}

impl InstanceManager {
    pub fn new(root: InstallationRoot, settings: &Settings) -> Self {
        Self {
            root,
            server_app_id: settings.dedicated_server_app_id,
            game_app_id: settings.game_app_id,
        }
    }

    /// Create `servers/`, `worlds/` and `steamcmd/` where missing, then make
    /// sure SteamCMD is installed. Must run before any other operation.
    ///
    /// Directories are created one level deep; the installation root itself
    /// is expected to exist.
    pub async fn ensure_layout(&self, bootstrapper: &Bootstrapper) -> OdinResult<()> {
        for dir in self.root.layout_dirs() {
            if probe::exists(&dir)? {
                continue;
            }
            tokio::fs::create_dir(&dir)
                .await
                .map_err(|source| OdinError::Layout {
                    path: dir.clone(),
                    source,
                })?;
            info!("Created directory: {}", dir.display());
        }

        bootstrapper.ensure_installer_present().await?;
        Ok(())
    }

    pub fn exists(&self, name: &InstanceName) -> OdinResult<bool> {
        probe::exists(&self.root.instance_dir(name.as_str()))
    }

    /// Look up an existing instance. A missing directory is `NotFound`.
    pub fn locate(&self, name: &InstanceName) -> OdinResult<ServerInstance> {
        let dir = self.root.instance_dir(name.as_str());
        if !probe::exists(&dir)? {
            return Err(OdinError::NotFound {
                name: name.to_string(),
                path: dir,
            });
        }

        Ok(ServerInstance {
            name: name.clone(),
            server_bin: self.root.server_bin(name.as_str()),
            dir,
        })
    }

    /// Download the dedicated server into a new `servers/<name>/` directory.
    ///
    /// An existing directory short-circuits without running SteamCMD. If
    /// SteamCMD fails, the directory is left behind.
    #[instrument(skip_all, fields(name = %name))]
    pub async fn create(&self, name: &InstanceName) -> OdinResult<ProvisionOutcome> {
        let dir = self.root.instance_dir(name.as_str());
        if probe::exists(&dir)? {
            info!("{} already exists", name);
            return Ok(ProvisionOutcome::AlreadyExists);
        }

        tokio::fs::create_dir(&dir)
            .await
            .map_err(|source| OdinError::Io {
                path: dir.clone(),
                source,
            })?;
        info!("Created directory: {}", dir.display());

        let installer = self.root.installer_bin();
        launch::install_app(&installer, &dir, self.server_app_id)
            .await
            .into_result(&installer)?;

        info!("Created server \"{}\"", name);
        Ok(ProvisionOutcome::Created)
    }

    /// Run the server for `name` in the foreground until it exits.
    pub async fn start(&self, name: &InstanceName, params: &LaunchParameters) -> OdinResult<()> {
        let instance = self.locate(name)?;
        launch::run_server(&instance, params, self.game_app_id).await
    }
}
