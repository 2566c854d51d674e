pub mod cli;
pub mod commands;
pub mod core;

use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, CliCommand};
use crate::core::error::OdinResult;
use crate::core::paths::InstallationRoot;
use crate::core::state::AppState;

pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

/// Resolve the installation root, ensure the layout, then dispatch.
pub async fn run(cli: Cli) -> OdinResult<()> {
    let root = InstallationRoot::resolve()?;
    let state = AppState::new(root)?;
    state.ensure_layout().await?;

    match cli.command {
        CliCommand::Create { name } => {
            commands::create_instance(&state, &name).await?;
        }
        CliCommand::Start {
            name,
            port,
            password,
        } => {
            let port = port.unwrap_or(state.settings.default_port);
            let password = password.unwrap_or_else(|| state.settings.default_password.clone());
            commands::start_instance(&state, &name, port, &password).await?;
        }
        CliCommand::Open { name } => commands::open_instance_folder(&state, &name)?,
    }

    Ok(())
}
