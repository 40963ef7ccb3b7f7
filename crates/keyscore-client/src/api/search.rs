//! Search API endpoints.

use crate::KeyscoreClient;
use keyscore_core::{Operator, Result, SearchRequest, SearchResponse};
use serde_json::Value;

/// Search API endpoints
pub struct SearchApi<'a> {
    client: &'a KeyscoreClient,
}

impl<'a> SearchApi<'a> {
    pub(crate) const fn new(client: &'a KeyscoreClient) -> Self {
        Self { client }
    }

    /// Search with a prepared request
    pub async fn send(&self, request: &SearchRequest) -> Result<SearchResponse> {
        self.client.post("/search", request).await
    }

    /// Start building a search for the given terms
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let results = client.search()
    ///     .query(["alice@example.com"])
    ///     .types(["email"])
    ///     .page_size(100)
    ///     .send()
    ///     .await?;
    ///
    /// for (category, record) in results.records() {
    ///     println!("{category}: {record:?}");
    /// }
    /// ```
    #[must_use]
    pub fn query<I, S>(&self, terms: I) -> SearchRequestBuilder<'a>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SearchRequestBuilder::new(self.client, terms.into_iter().map(Into::into).collect())
    }
}

/// Builder for search requests
pub struct SearchRequestBuilder<'a> {
    client: &'a KeyscoreClient,
    request: SearchRequest,
}

impl<'a> SearchRequestBuilder<'a> {
    fn new(client: &'a KeyscoreClient, terms: Vec<String>) -> Self {
        Self {
            client,
            request: SearchRequest {
                terms,
                ..SearchRequest::default()
            },
        }
    }

    /// Record types to search
    #[must_use]
    pub fn types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict the search to one source
    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.request.source = source.into();
        self
    }

    /// Treat terms as wildcard patterns
    #[must_use]
    pub fn wildcard(mut self, wildcard: bool) -> Self {
        self.request.wildcard = wildcard;
        self
    }

    /// Treat terms as regular expressions
    #[must_use]
    pub fn regex(mut self, regex: bool) -> Self {
        self.request.regex = regex;
        self
    }

    /// Operator joining multiple terms
    #[must_use]
    pub fn operator(mut self, operator: impl Into<Operator>) -> Self {
        self.request.operator = Some(operator.into());
        self
    }

    /// Restrict results to a date range
    #[must_use]
    pub fn date_range(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.request.date_from = Some(from.into());
        self.request.date_to = Some(to.into());
        self
    }

    /// Set the page number (1-indexed)
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.request.page = Some(page);
        self
    }

    /// Set the number of results per page
    #[must_use]
    pub fn page_size(mut self, size: u32) -> Self {
        self.request.page_size = Some(size);
        self
    }

    /// Continue from the pagination state of a previous response
    #[must_use]
    pub fn pages(mut self, pages: Value) -> Self {
        self.request.pages = Some(pages);
        self
    }

    /// The request as it will be sent
    #[must_use]
    pub const fn request(&self) -> &SearchRequest {
        &self.request
    }

    /// Execute the search
    pub async fn send(self) -> Result<SearchResponse> {
        SearchApi::new(self.client).send(&self.request).await
    }
}
