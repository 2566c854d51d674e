// ─── Odin Core ───
// Valheim dedicated server management on top of SteamCMD.
//
// Architecture:
//   core/
//     paths       - installation root + managed paths
//     probe       - existence checks that keep "absent" and "error" apart
//     downloader/ - archive source (HTTP)
//     bootstrap/  - SteamCMD download + zip extraction
//     instance/   - server names, layout, provisioning
//     launch/     - exit classification, SteamCMD and server processes
//     state/      - settings + per-invocation wiring

pub mod bootstrap;
pub mod downloader;
pub mod error;
pub mod http;
pub mod instance;
pub mod launch;
pub mod paths;
pub mod probe;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
