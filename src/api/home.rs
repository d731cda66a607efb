use async_trait::async_trait;

use crate::api::{ApiRequest, RequestClient};
use crate::app::Result;
use crate::domain::HomeSectionsResponse;

pub const DEFAULT_HOME_HOST: &str = "api-v2-b2sit6oh3a-uc.a.run.app";
const HOME_SECTIONS_PATH: &str = "/home_sections";

/// Typed access to the home-sections endpoint.
#[async_trait]
pub trait HomeSectionsApi {
    /// Fetch one page of home sections. `None` requests the first page.
    async fn fetch_home_sections(&self, page: Option<String>) -> Result<HomeSectionsResponse>;
}

pub struct HomeSectionsClient {
    client: RequestClient,
    host: String,
}

impl HomeSectionsClient {
    pub fn new(client: RequestClient) -> Self {
        Self::with_host(client, DEFAULT_HOME_HOST)
    }

    pub fn with_host(client: RequestClient, host: impl Into<String>) -> Self {
        Self {
            client,
            host: host.into(),
        }
    }
}

#[async_trait]
impl HomeSectionsApi for HomeSectionsClient {
    async fn fetch_home_sections(&self, page: Option<String>) -> Result<HomeSectionsResponse> {
        let request = ApiRequest::get(&self.host, HOME_SECTIONS_PATH).query_param("page", page);
        self.client.perform(&request).await
    }
}

#[async_trait]
impl<T: HomeSectionsApi + Send + Sync + ?Sized> HomeSectionsApi for std::sync::Arc<T> {
    async fn fetch_home_sections(&self, page: Option<String>) -> Result<HomeSectionsResponse> {
        self.as_ref().fetch_home_sections(page).await
    }
}
