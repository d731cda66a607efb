use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{debug, error};

use crate::api::search::SearchApi;
use crate::domain::SearchSection;
use crate::service::debounce::{self, DebounceInput};

pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(200);

/// Search view state. `has_searched` distinguishes "no results" from
/// "never searched"; `error_message` marks the inline retryable error state.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<SearchSection>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub has_searched: bool,
}

/// Debounced search over the free-text endpoint.
///
/// Overlapping requests are allowed to race; each one takes a monotonic
/// sequence number and a response is applied only while its sequence is
/// still the latest issued, so stale responses are discarded instead of
/// clobbering newer results.
pub struct SearchService<A> {
    api: Arc<A>,
    state: Arc<Mutex<SearchState>>,
    issued: Arc<AtomicU64>,
}

impl<A> Clone for SearchService<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: self.state.clone(),
            issued: self.issued.clone(),
        }
    }
}

impl<A: SearchApi + Send + Sync + 'static> SearchService<A> {
    pub fn new(api: A) -> Self {
        Self::with_shared(Arc::new(api))
    }

    pub fn with_shared(api: Arc<A>) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(SearchState::default())),
            issued: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn snapshot(&self) -> SearchState {
        self.state.lock().expect("search state lock poisoned").clone()
    }

    /// Run a search. A query that trims to empty never touches the network:
    /// it clears the results and the has-searched flag.
    pub async fn perform_search(&self, query: &str) {
        if query.trim().is_empty() {
            let mut state = self.state.lock().expect("search state lock poisoned");
            state.query = query.to_string();
            state.results.clear();
            state.has_searched = false;
            return;
        }

        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.lock().expect("search state lock poisoned");
            state.query = query.to_string();
            state.is_loading = true;
            state.error_message = None;
        }

        let result = self.api.search(query).await;

        let mut state = self.state.lock().expect("search state lock poisoned");
        if seq != self.issued.load(Ordering::SeqCst) {
            // A newer request has been issued; it owns the state now.
            debug!("Discarding stale search response for '{}'", query);
            return;
        }

        state.is_loading = false;
        state.has_searched = true;
        match result {
            Ok(response) => {
                // Server order is authoritative for search results.
                state.results = response.sections;
            }
            Err(err) => {
                error!("Search for '{}' failed: {}", query, err);
                state.error_message = Some(err.to_string());
            }
        }
    }

    /// Re-issue the last query, e.g. from an inline error state.
    pub async fn retry_search(&self) {
        let query = self.snapshot().query;
        self.perform_search(&query).await;
    }

    pub fn clear_search(&self) {
        let mut state = self.state.lock().expect("search state lock poisoned");
        *state = SearchState::default();
    }
}

/// Wire a debouncer in front of the service: keystrokes go in through the
/// returned handle, and each debounced value dispatches one search task.
pub fn spawn_search_pipeline<A: SearchApi + Send + Sync + 'static>(
    service: SearchService<A>,
    window: Duration,
) -> DebounceInput {
    let (input, mut queries) = debounce::spawn(String::new(), window);

    tokio::spawn(async move {
        while let Some(query) = queries.recv().await {
            let service = service.clone();
            tokio::spawn(async move {
                service.perform_search(&query).await;
            });
        }
    });

    input
}
