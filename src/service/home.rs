use tracing::{error, warn};

use crate::api::home::HomeSectionsApi;
use crate::domain::{HomeSection, Pagination};

/// Home feed view state: ordered sections plus pagination bookkeeping.
///
/// The service owns its state exclusively and every mutation goes through
/// `&mut self`, so a refresh can never race an in-flight next-page load.
pub struct HomeFeed<A> {
    api: A,
    sections: Vec<HomeSection>,
    is_loading: bool,
    is_loading_next: bool,
    error_message: Option<String>,
    has_more_pages: bool,
    next_page: u32,
}

impl<A: HomeSectionsApi> HomeFeed<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            sections: Vec::new(),
            is_loading: false,
            is_loading_next: false,
            error_message: None,
            has_more_pages: false,
            next_page: 1,
        }
    }

    pub fn sections(&self) -> &[HomeSection] {
        &self.sections
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn has_more_pages(&self) -> bool {
        self.has_more_pages
    }

    /// The page index the next `load_next_page` call would fetch.
    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    /// Load the first page, replacing any previously loaded sections.
    /// On failure the existing sections are left untouched and a user-facing
    /// error message is recorded.
    pub async fn load_home_sections(&mut self) {
        if self.is_loading || self.is_loading_next {
            return;
        }
        self.is_loading = true;
        self.error_message = None;

        match self.api.fetch_home_sections(None).await {
            Ok(response) => {
                self.sections = sorted_by_order(response.sections);
                self.apply_pagination(&response.pagination);
            }
            Err(err) => {
                error!("Failed to load home sections: {}", err);
                self.error_message = Some(err.to_string());
            }
        }

        self.is_loading = false;
    }

    /// Fetch the next page and append it. A no-op unless more pages exist,
    /// nothing is in flight, and the cursor has moved past page 1. Failures
    /// are logged and swallowed so content already on screen survives.
    pub async fn load_next_page(&mut self) {
        if !self.has_more_pages || self.is_loading || self.is_loading_next || self.next_page <= 1
        {
            return;
        }
        self.is_loading_next = true;

        match self
            .api
            .fetch_home_sections(Some(self.next_page.to_string()))
            .await
        {
            Ok(response) => {
                // Each batch is sorted on its own; pages are assumed to be in
                // correct relative order already.
                self.sections.extend(sorted_by_order(response.sections));
                self.apply_pagination(&response.pagination);
            }
            Err(err) => {
                warn!("Failed to load page {}: {}", self.next_page, err);
            }
        }

        self.is_loading_next = false;
    }

    pub async fn refresh(&mut self) {
        self.load_home_sections().await;
    }

    fn apply_pagination(&mut self, pagination: &Pagination) {
        self.has_more_pages = pagination.next_page.is_some();
        // The cursor is a numeric page index serialized as a string; an
        // unparsable value falls back to 1 rather than failing the load.
        self.next_page = pagination
            .next_page
            .as_deref()
            .and_then(|page| page.parse().ok())
            .unwrap_or(1);
    }
}

fn sorted_by_order(mut sections: Vec<HomeSection>) -> Vec<HomeSection> {
    // Stable: ties keep the API-delivered relative order.
    sections.sort_by_key(|section| section.order);
    sections
}
