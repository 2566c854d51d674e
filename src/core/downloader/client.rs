use std::path::Path;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::core::error::BootstrapError;

/// Where the SteamCMD archive comes from.
#[async_trait]
pub trait ArchiveSource: Send + Sync {
    /// Write the archive at `url` to `dest`, returning the number of bytes written.
    async fn fetch(&self, url: &str, dest: &Path) -> Result<u64, BootstrapError>;
}

/// Plain HTTP GET, streamed to disk. No retries, ranges or checksums.
pub struct HttpArchiveSource {
    client: Client,
}

impl HttpArchiveSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ArchiveSource for HttpArchiveSource {
    async fn fetch(&self, url: &str, dest: &Path) -> Result<u64, BootstrapError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BootstrapError::DownloadFailed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let write_err = |source| BootstrapError::Download {
            path: dest.to_path_buf(),
            source,
        };

        // The handle lives only inside this function so it is closed before
        // the archive is reopened for extraction.
        let mut file = tokio::fs::File::create(dest).await.map_err(write_err)?;
        let mut written = 0_u64;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await.map_err(write_err)?;
            written = written.saturating_add(chunk.len() as u64);
        }
        file.flush().await.map_err(write_err)?;

        debug!("Downloaded: {} -> {:?} ({} bytes)", url, dest, written);
        Ok(written)
    }
}
