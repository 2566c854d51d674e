// ─── Commands ───
// Operations the CLI shell calls with already-parsed arguments. Names are
// validated here; everything else lives in `core`.

use tracing::info;

use crate::core::error::OdinResult;
use crate::core::instance::{InstanceName, LaunchParameters, ProvisionOutcome};
use crate::core::launch;
use crate::core::state::AppState;

pub async fn create_instance(state: &AppState, name: &str) -> OdinResult<ProvisionOutcome> {
    let name = InstanceName::parse(name)?;
    state.instance_manager.create(&name).await
}

pub async fn start_instance(
    state: &AppState,
    name: &str,
    port: u16,
    password: &str,
) -> OdinResult<()> {
    let name = InstanceName::parse(name)?;
    let params = LaunchParameters {
        port,
        password: password.to_string(),
    };
    state.instance_manager.start(&name, &params).await
}

pub fn instance_exists(state: &AppState, name: &str) -> OdinResult<bool> {
    let name = InstanceName::parse(name)?;
    state.instance_manager.exists(&name)
}

/// `NotFound` for a missing instance. Opening the browser itself is
/// fire-and-forget, so a successful return says nothing about whether a
/// window appeared.
pub fn open_instance_folder(state: &AppState, name: &str) -> OdinResult<()> {
    let name = InstanceName::parse(name)?;
    let instance = state.instance_manager.locate(&name)?;
    info!("Opening {}", instance.dir.display());
    launch::open_folder(&instance.dir);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bootstrap::installer::tests::FakeSource;
    use crate::core::error::OdinError;
    use crate::core::paths::InstallationRoot;
    use crate::core::state::Settings;

    fn state(dir: &tempfile::TempDir) -> AppState {
        let root = InstallationRoot::at(dir.path());
        std::fs::create_dir(root.servers_dir()).unwrap();
        AppState::with_source(root, Settings::default(), Box::new(FakeSource::serving(&[])))
    }

    #[tokio::test]
    async fn invalid_names_are_rejected_before_touching_disk() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(&dir);

        let err = create_instance(&state, "../outside").await.unwrap_err();

        assert!(matches!(err, OdinError::InvalidName { .. }));
        assert!(!dir.path().join("outside").exists());
    }

    #[test]
    fn instance_exists_follows_directory() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(&dir);

        assert!(!instance_exists(&state, "midgard").unwrap());
        std::fs::create_dir(state.root.instance_dir("midgard")).unwrap();
        assert!(instance_exists(&state, "midgard").unwrap());
    }

    #[test]
    fn open_missing_instance_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(&dir);

        let err = open_instance_folder(&state, "nope").unwrap_err();

        assert!(matches!(err, OdinError::NotFound { .. }));
    }

    #[tokio::test]
    async fn start_missing_instance_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(&dir);

        let err = start_instance(&state, "nope", 2456, "pw").await.unwrap_err();

        assert!(matches!(err, OdinError::NotFound { .. }));
    }
}
