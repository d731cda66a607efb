use async_trait::async_trait;

use crate::api::{ApiRequest, RequestClient};
use crate::app::Result;
use crate::domain::SearchResponse;

pub const DEFAULT_SEARCH_HOST: &str = "mock.apidog.com";
pub const DEFAULT_SEARCH_PATH: &str = "/m1/735111-711675-default/search";

/// Typed access to the free-text search endpoint.
#[async_trait]
pub trait SearchApi {
    async fn search(&self, query: &str) -> Result<SearchResponse>;
}

pub struct SearchClient {
    client: RequestClient,
    host: String,
    path: String,
}

impl SearchClient {
    pub fn new(client: RequestClient) -> Self {
        Self::with_endpoint(client, DEFAULT_SEARCH_HOST, DEFAULT_SEARCH_PATH)
    }

    pub fn with_endpoint(
        client: RequestClient,
        host: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            client,
            host: host.into(),
            path: path.into(),
        }
    }
}

#[async_trait]
impl SearchApi for SearchClient {
    async fn search(&self, query: &str) -> Result<SearchResponse> {
        // ApiRequest drops empty values, so an empty query sends no `q`.
        let request = ApiRequest::get(&self.host, &self.path)
            .query_param("q", Some(query.to_string()));
        self.client.perform(&request).await
    }
}
