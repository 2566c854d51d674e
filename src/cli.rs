use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "odin",
    version,
    about = "Creates and runs Valheim dedicated servers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Creates a new server.
    Create {
        /// Server name, also used as the world name.
        name: String,
    },
    /// Starts a server.
    Start {
        name: String,
        /// Defaults to `default_port` from odin.json (2456).
        #[arg(long)]
        port: Option<u16>,
        /// Defaults to `default_password` from odin.json.
        #[arg(long)]
        password: Option<String>,
    },
    /// Opens a server's folder in the file browser.
    Open { name: String },
}
