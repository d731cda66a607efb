pub mod content;
pub mod search;
pub mod section;

pub use content::{
    AudioArticleItem, AudiobookItem, ContentItem, ContentKind, EpisodeItem, PodcastItem,
};
pub use search::{SearchContentItem, SearchResponse, SearchSection};
pub use section::{HomeSection, HomeSectionsResponse, Pagination, SectionLayout};
