use std::path::PathBuf;

use crate::core::error::{OdinError, OdinResult};

/// Name of a server. Used verbatim as the directory under `servers/` and as
/// the world/save name, so anything that would change which directory it
/// points at is refused.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceName(String);

impl InstanceName {
    pub fn parse(raw: &str) -> OdinResult<Self> {
        let reject = |reason| {
            Err(OdinError::InvalidName {
                name: raw.to_string(),
                reason,
            })
        };

        if raw.is_empty() {
            return reject("name is empty");
        }
        if raw == "." || raw == ".." {
            return reject("name refers to a relative directory");
        }
        if raw.contains(['/', '\\']) {
            return reject("name contains a path separator");
        }
        if raw.chars().any(char::is_control) {
            return reject("name contains a control character");
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InstanceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A provisioned server. The directory existing is the instance existing;
/// there is no metadata file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerInstance {
    pub name: InstanceName,
    pub dir: PathBuf,
    pub server_bin: PathBuf,
}

/// Per-invocation settings for a server session. Never persisted.
///
/// The server and world name come from the [`ServerInstance`] being started,
/// which only exists for a validated, provisioned name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchParameters {
    pub port: u16,
    pub password: String,
}

/// Result of `create`. An existing instance is success, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Created,
    AlreadyExists,
}
