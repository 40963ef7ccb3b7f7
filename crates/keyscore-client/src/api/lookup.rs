//! Hash and IP lookup endpoints.

use crate::KeyscoreClient;
use keyscore_core::{
    HashLookupRequest, HashLookupResponse, IpLookupRequest, IpLookupResponse, Result,
};

/// Hash and IP lookup endpoints
pub struct LookupApi<'a> {
    client: &'a KeyscoreClient,
}

impl<'a> LookupApi<'a> {
    pub(crate) const fn new(client: &'a KeyscoreClient) -> Self {
        Self { client }
    }

    /// Resolve hashes to known plaintexts
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let found = client.lookup().hashes(["5f4dcc3b5aa765d61d8327deb882cf99"]).await?;
    /// for (hash, record) in &found.results {
    ///     println!("{hash} => {:?}", record.plaintext);
    /// }
    /// ```
    pub async fn hashes<I, S>(&self, terms: I) -> Result<HashLookupResponse>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hashes_request(&HashLookupRequest::new(terms)).await
    }

    /// Resolve hashes using a prepared request
    pub async fn hashes_request(&self, request: &HashLookupRequest) -> Result<HashLookupResponse> {
        self.client.post("/hashlookup", request).await
    }

    /// Geolocate IP addresses.
    /// Addresses the API cannot resolve are reported in [`IpLookupResponse::errors`].
    pub async fn ips<I, S>(&self, terms: I) -> Result<IpLookupResponse>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ips_request(&IpLookupRequest::new(terms)).await
    }

    /// Geolocate IP addresses using a prepared request
    pub async fn ips_request(&self, request: &IpLookupRequest) -> Result<IpLookupResponse> {
        self.client.post("/iplookup", request).await
    }
}
