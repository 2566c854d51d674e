use std::path::{Path, PathBuf};

use crate::core::error::{OdinError, OdinResult};

pub const SERVERS_DIR: &str = "servers";
pub const WORLDS_DIR: &str = "worlds";
pub const INSTALLER_DIR: &str = "steamcmd";
pub const INSTALLER_ARCHIVE: &str = "steamcmd.zip";
pub const SETTINGS_FILE: &str = "odin.json";

#[cfg(target_os = "windows")]
pub const INSTALLER_BIN: &str = "steamcmd.exe";
#[cfg(not(target_os = "windows"))]
pub const INSTALLER_BIN: &str = "steamcmd.sh";

#[cfg(target_os = "windows")]
pub const SERVER_BIN: &str = "valheim_server.exe";
#[cfg(not(target_os = "windows"))]
pub const SERVER_BIN: &str = "valheim_server.x86_64";

/// Directory containing the odin executable. Every managed path hangs off it,
/// so the caller's working directory never matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationRoot {
    root: PathBuf,
}

impl InstallationRoot {
    /// Ask the OS where the running executable lives (not `argv[0]`).
    pub fn resolve() -> OdinResult<Self> {
        let exe = std::env::current_exe().map_err(|source| OdinError::RootUnresolved { source })?;
        let root = exe.parent().ok_or_else(|| OdinError::RootUnresolved {
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} has no parent directory", exe.display()),
            ),
        })?;

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Anchor at an explicit directory.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Join segments onto the root. Pure; segments are not validated.
    pub fn join<I, S>(&self, segments: I) -> PathBuf
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let mut path = self.root.clone();
        for segment in segments {
            path.push(segment);
        }
        path
    }

    pub fn servers_dir(&self) -> PathBuf {
        self.join([SERVERS_DIR])
    }

    pub fn worlds_dir(&self) -> PathBuf {
        self.join([WORLDS_DIR])
    }

    pub fn installer_dir(&self) -> PathBuf {
        self.join([INSTALLER_DIR])
    }

    pub fn installer_bin(&self) -> PathBuf {
        self.join([INSTALLER_DIR, INSTALLER_BIN])
    }

    /// Transient download target, removed once extraction succeeds.
    pub fn installer_archive(&self) -> PathBuf {
        self.join([INSTALLER_ARCHIVE])
    }

    pub fn instance_dir(&self, name: &str) -> PathBuf {
        self.join([SERVERS_DIR, name])
    }

    pub fn server_bin(&self, name: &str) -> PathBuf {
        self.join([SERVERS_DIR, name, SERVER_BIN])
    }

    pub fn settings_file(&self) -> PathBuf {
        self.join([SETTINGS_FILE])
    }

    /// Root directories that must exist before any subcommand runs.
    pub fn layout_dirs(&self) -> [PathBuf; 3] {
        [self.servers_dir(), self.worlds_dir(), self.installer_dir()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_anchors_every_segment_at_root() {
        let root = InstallationRoot::at("/opt/odin");
        assert_eq!(
            root.join(["servers", "midgard"]),
            PathBuf::from("/opt/odin/servers/midgard")
        );
        assert_eq!(root.join(Vec::<&str>::new()), PathBuf::from("/opt/odin"));
    }

    #[test]
    fn managed_paths_follow_layout() {
        let root = InstallationRoot::at("/opt/odin");
        assert_eq!(root.installer_bin(), Path::new("/opt/odin/steamcmd").join(INSTALLER_BIN));
        assert_eq!(root.installer_archive(), PathBuf::from("/opt/odin/steamcmd.zip"));
        assert_eq!(
            root.server_bin("midgard"),
            Path::new("/opt/odin/servers/midgard").join(SERVER_BIN)
        );
        assert_eq!(
            root.layout_dirs(),
            [
                PathBuf::from("/opt/odin/servers"),
                PathBuf::from("/opt/odin/worlds"),
                PathBuf::from("/opt/odin/steamcmd"),
            ]
        );
    }

    #[test]
    fn resolve_uses_executable_directory() {
        let root = InstallationRoot::resolve().unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(root.path(), exe.parent().unwrap());
        assert!(root.path().is_absolute());
    }
}
