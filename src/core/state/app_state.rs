use crate::core::bootstrap::Bootstrapper;
use crate::core::downloader::{ArchiveSource, HttpArchiveSource};
use crate::core::error::{BootstrapError, OdinResult};
use crate::core::http::build_http_client;
use crate::core::instance::InstanceManager;
use crate::core::paths::InstallationRoot;

use super::settings::Settings;

/// Everything one invocation needs, built once at entry and passed down.
pub struct AppState {
    pub root: InstallationRoot,
    pub settings: Settings,
    pub bootstrapper: Bootstrapper,
    pub instance_manager: InstanceManager,
}

impl AppState {
    /// Load `odin.json` from the installation root and wire up an HTTP
    /// archive source.
    pub fn new(root: InstallationRoot) -> OdinResult<Self> {
        let settings = Settings::load(&root.settings_file());
        let client = build_http_client().map_err(BootstrapError::Http)?;
        Ok(Self::with_source(
            root,
            settings,
            Box::new(HttpArchiveSource::new(client)),
        ))
    }

    pub fn with_source(
        root: InstallationRoot,
        settings: Settings,
        source: Box<dyn ArchiveSource>,
    ) -> Self {
        let bootstrapper = Bootstrapper::new(
            root.clone(),
            settings.installer_archive_url.clone(),
            source,
        );
        let instance_manager = InstanceManager::new(root.clone(), &settings);

        Self {
            root,
            settings,
            bootstrapper,
            instance_manager,
        }
    }

    /// Directory layout plus SteamCMD. Every subcommand calls this first.
    pub async fn ensure_layout(&self) -> OdinResult<()> {
        self.instance_manager.ensure_layout(&self.bootstrapper).await
    }
}
