use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::error::{OdinError, OdinResult};

pub const DEFAULT_INSTALLER_URL: &str =
    "https://steamcdn-a.akamaihd.net/client/installer/steamcmd.zip";
/// Valheim Dedicated Server.
pub const DEFAULT_SERVER_APP_ID: u32 = 896660;
/// Valheim itself; the server's Steam runtime expects this in `SteamAppId`.
pub const DEFAULT_GAME_APP_ID: u32 = 892970;
pub const DEFAULT_PORT: u16 = 2456;
pub const DEFAULT_PASSWORD: &str = "123456";

/// Optional `odin.json` next to the executable. Every field falls back to
/// its default when missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Must point at a zip archive.
    pub installer_archive_url: String,
    pub dedicated_server_app_id: u32,
    pub game_app_id: u32,
    pub default_port: u16,
    pub default_password: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            installer_archive_url: DEFAULT_INSTALLER_URL.to_string(),
            dedicated_server_app_id: DEFAULT_SERVER_APP_ID,
            game_app_id: DEFAULT_GAME_APP_ID,
            default_port: DEFAULT_PORT,
            default_password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from `path`. An absent file yields the defaults; a
    /// broken one is reported and also yields the defaults.
    pub fn load(path: &Path) -> Settings {
        match Self::read(path) {
            Ok(Some(settings)) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Ok(None) => Settings::default(),
            Err(err) => {
                warn!("Ignoring settings file: {}", err);
                Settings::default()
            }
        }
    }

    fn read(path: &Path) -> OdinResult<Option<Settings>> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(OdinError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }
}
