use serde::Deserialize;

fn default_language() -> String {
    "en".to_string()
}

/// The four content kinds the catalog serves. Doubles as the dispatch tag
/// for section content decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Podcast,
    Episode,
    AudioBook,
    AudioArticle,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Podcast => "podcast",
            ContentKind::Episode => "episode",
            ContentKind::AudioBook => "audio_book",
            ContentKind::AudioArticle => "audio_article",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PodcastItem {
    #[serde(rename = "podcast_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub avatar_url: String,
    pub duration: u64,
    pub score: f64,
    pub episode_count: u64,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub priority: i64,
    // Two fields on this API arrive camelCased while their neighbors are
    // snake_cased; the renames below preserve the wire casing exactly.
    #[serde(rename = "popularityScore", default)]
    pub popularity_score: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeItem {
    #[serde(rename = "episode_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub avatar_url: String,
    pub duration: u64,
    pub score: f64,
    pub season_number: Option<u32>,
    pub episode_type: String,
    pub podcast_name: String,
    #[serde(default)]
    pub author_name: String,
    pub number: Option<i64>,
    pub audio_url: String,
    #[serde(default)]
    pub separated_audio_url: String,
    pub release_date: String,
    #[serde(rename = "podcastPopularityScore")]
    pub podcast_popularity_score: i64,
    #[serde(rename = "podcastPriority")]
    pub podcast_priority: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudiobookItem {
    #[serde(rename = "audiobook_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub avatar_url: String,
    pub duration: u64,
    pub score: f64,
    pub author_name: String,
    #[serde(default = "default_language")]
    pub language: String,
    pub release_date: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioArticleItem {
    #[serde(rename = "article_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub avatar_url: String,
    pub duration: u64,
    pub score: f64,
    pub author_name: String,
    pub release_date: String,
}

/// A single catalog entry. The variant is decided by the owning section's
/// `content_type`, never by probing the payload.
#[derive(Debug, Clone)]
pub enum ContentItem {
    Podcast(PodcastItem),
    Episode(EpisodeItem),
    Audiobook(AudiobookItem),
    AudioArticle(AudioArticleItem),
}

impl ContentItem {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentItem::Podcast(_) => ContentKind::Podcast,
            ContentItem::Episode(_) => ContentKind::Episode,
            ContentItem::Audiobook(_) => ContentKind::AudioBook,
            ContentItem::AudioArticle(_) => ContentKind::AudioArticle,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ContentItem::Podcast(item) => &item.id,
            ContentItem::Episode(item) => &item.id,
            ContentItem::Audiobook(item) => &item.id,
            ContentItem::AudioArticle(item) => &item.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ContentItem::Podcast(item) => &item.name,
            ContentItem::Episode(item) => &item.name,
            ContentItem::Audiobook(item) => &item.name,
            ContentItem::AudioArticle(item) => &item.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            ContentItem::Podcast(item) => &item.description,
            ContentItem::Episode(item) => &item.description,
            ContentItem::Audiobook(item) => &item.description,
            ContentItem::AudioArticle(item) => &item.description,
        }
    }

    pub fn avatar_url(&self) -> &str {
        match self {
            ContentItem::Podcast(item) => &item.avatar_url,
            ContentItem::Episode(item) => &item.avatar_url,
            ContentItem::Audiobook(item) => &item.avatar_url,
            ContentItem::AudioArticle(item) => &item.avatar_url,
        }
    }

    /// Duration in seconds.
    pub fn duration(&self) -> u64 {
        match self {
            ContentItem::Podcast(item) => item.duration,
            ContentItem::Episode(item) => item.duration,
            ContentItem::Audiobook(item) => item.duration,
            ContentItem::AudioArticle(item) => item.duration,
        }
    }

    pub fn score(&self) -> f64 {
        match self {
            ContentItem::Podcast(item) => item.score,
            ContentItem::Episode(item) => item.score,
            ContentItem::Audiobook(item) => item.score,
            ContentItem::AudioArticle(item) => item.score,
        }
    }
}
