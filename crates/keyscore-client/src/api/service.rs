//! Service status and metadata endpoints.

use crate::KeyscoreClient;
use keyscore_core::{HealthResponse, Result, SourcesResponse};

/// Service status and metadata endpoints
pub struct ServiceApi<'a> {
    client: &'a KeyscoreClient,
}

impl<'a> ServiceApi<'a> {
    pub(crate) const fn new(client: &'a KeyscoreClient) -> Self {
        Self { client }
    }

    /// Check API service health
    pub async fn health(&self) -> Result<HealthResponse> {
        self.client.get("/health", &[]).await
    }

    /// List the data sources results can be filtered by
    pub async fn sources(&self) -> Result<SourcesResponse> {
        self.client.get("/sources", &[]).await
    }
}
