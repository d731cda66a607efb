use std::sync::Arc;
use std::time::Duration;

use crate::api::home::HomeSectionsClient;
use crate::api::search::SearchClient;
use crate::api::transport::{HttpTransport, Transport};
use crate::api::RequestClient;
use crate::config::Config;
use crate::service::{spawn_search_pipeline, DebounceInput, SearchService};

pub struct AppContext {
    pub client: RequestClient,
    pub home_api: Arc<HomeSectionsClient>,
    pub search_api: Arc<SearchClient>,
    pub debounce_window: Duration,
}

impl AppContext {
    pub fn new(config: &Config) -> Self {
        let transport: Arc<dyn Transport + Send + Sync> =
            Arc::new(HttpTransport::new(config.timeout_secs, &config.user_agent));
        Self::with_transport(transport, config)
    }

    pub fn with_transport(transport: Arc<dyn Transport + Send + Sync>, config: &Config) -> Self {
        let client = RequestClient::new(transport);
        let home_api = Arc::new(HomeSectionsClient::with_host(
            client.clone(),
            config.home_host.clone(),
        ));
        let search_api = Arc::new(SearchClient::with_endpoint(
            client.clone(),
            config.search_host.clone(),
            config.search_path.clone(),
        ));

        Self {
            client,
            home_api,
            search_api,
            debounce_window: Duration::from_millis(config.debounce_ms),
        }
    }

    pub fn search_service(&self) -> SearchService<SearchClient> {
        SearchService::with_shared(self.search_api.clone())
    }

    /// Search service plus a running debounce pipeline; keystrokes go in
    /// through the returned handle.
    pub fn spawn_search_pipeline(&self) -> (SearchService<SearchClient>, DebounceInput) {
        let service = self.search_service();
        let input = spawn_search_pipeline(service.clone(), self.debounce_window);
        (service, input)
    }
}
