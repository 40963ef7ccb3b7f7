//! Machine info and log download endpoints.

use crate::{Download, KeyscoreClient};
use keyscore_core::{MachineInfo, Result};

/// Machine info and log download endpoints
pub struct MachineApi<'a> {
    client: &'a KeyscoreClient,
}

impl<'a> MachineApi<'a> {
    pub(crate) const fn new(client: &'a KeyscoreClient) -> Self {
        Self { client }
    }

    /// Fetch the normalized profile of a machine
    pub async fn info(&self, uuid: &str) -> Result<MachineInfo> {
        self.client.get("/machineinfo", &[("uuid", uuid)]).await
    }

    /// Download the full log archive of a machine
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let download = client.machine().download(uuid).await?;
    /// let name = download.filename().unwrap_or("archive.zip").to_string();
    /// let mut file = tokio::fs::File::create(name).await?;
    /// download.write_to(&mut file).await?;
    /// ```
    pub async fn download(&self, uuid: &str) -> Result<Download> {
        self.client.get_raw("/download", &[("uuid", uuid)]).await
    }

    /// Download a single file from a machine's log archive
    pub async fn download_file(&self, uuid: &str, file: &str) -> Result<Download> {
        if file.is_empty() {
            return self.download(uuid).await;
        }
        self.client
            .get_raw("/download", &[("uuid", uuid), ("file", file)])
            .await
    }
}
