pub mod debounce;
pub mod home;
pub mod search;

pub use debounce::DebounceInput;
pub use home::HomeFeed;
pub use search::{spawn_search_pipeline, SearchService, SearchState, DEBOUNCE_WINDOW};
