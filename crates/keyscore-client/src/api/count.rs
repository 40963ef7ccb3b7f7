//! Count API endpoints.

use crate::KeyscoreClient;
use keyscore_core::{CountRequest, CountResponse, DetailedCountResponse, Result};

/// Count API endpoints
pub struct CountApi<'a> {
    client: &'a KeyscoreClient,
}

impl<'a> CountApi<'a> {
    pub(crate) const fn new(client: &'a KeyscoreClient) -> Self {
        Self { client }
    }

    /// Count records matching the request
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let request = CountRequest::new(["example.com"]).types(["domain"]);
    /// let total = client.count().total(&request).await?;
    /// println!("{} records", total.count);
    /// ```
    pub async fn total(&self, request: &CountRequest) -> Result<CountResponse> {
        self.client.post("/count", request).await
    }

    /// Count records matching the request, broken down by category
    pub async fn detailed(&self, request: &CountRequest) -> Result<DetailedCountResponse> {
        self.client.post("/count/detailed", request).await
    }
}
