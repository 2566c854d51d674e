pub mod extract;
pub mod installer;

pub use extract::extract_archive;
pub use installer::{BootstrapOutcome, Bootstrapper, InstallerState};
