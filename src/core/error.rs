use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the server manager.
/// Every module returns `Result<T, OdinError>`.
#[derive(Debug, Error)]
pub enum OdinError {
    // ── Paths ───────────────────────────────────────────
    #[error("Could not locate the odin executable: {source}")]
    RootUnresolved { source: std::io::Error },

    #[error("Could not check if {path:?} exists: {source}")]
    Probe {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not create directory {path:?}: {source}")]
    Layout {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── SteamCMD ────────────────────────────────────────
    #[error("Could not set up SteamCMD: {0}")]
    Bootstrap(#[from] BootstrapError),

    // ── Instance ────────────────────────────────────────
    #[error("Invalid server name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("Server doesn't exist: {path:?}")]
    NotFound { name: String, path: PathBuf },

    // ── Child processes ─────────────────────────────────
    #[error("Could not run {program:?}: {source}")]
    LaunchFailure {
        program: PathBuf,
        source: std::io::Error,
    },

    #[error("{program:?} {}", describe_exit(.code))]
    AbnormalExit { program: PathBuf, code: Option<i32> },

    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures of the SteamCMD download/extract pipeline.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("download failed for {url}: HTTP {status}")]
    DownloadFailed { url: String, status: u16 },

    #[error("could not write the download to {path:?}: {source}")]
    Download {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not open archive {path:?}: {source}")]
    ArchiveOpen {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    #[error("could not read archive entry #{index}: {source}")]
    Entry {
        index: usize,
        source: zip::result::ZipError,
    },

    #[error("archive entry {name:?} escapes the extraction directory")]
    UnsafeEntry { name: String },

    #[error("SteamCMD archive did not contain {path:?}")]
    MissingInstaller { path: PathBuf },

    #[error("could not extract {path:?}: {source}")]
    Extract {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not delete {path:?}, please delete it manually: {source}")]
    Cleanup {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type OdinResult<T> = Result<T, OdinError>;

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with code {code}"),
        None => "was terminated by a signal".to_string(),
    }
}
