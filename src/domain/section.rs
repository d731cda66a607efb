use serde::{Deserialize, Deserializer};
use sha2::{Digest, Sha256};

use crate::domain::content::{
    AudioArticleItem, AudiobookItem, ContentItem, ContentKind, EpisodeItem, PodcastItem,
};

/// Layout hint for a home section. The API has shipped two spellings for the
/// big-square layout, so both are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SectionLayout {
    #[serde(rename = "queue")]
    Queue,
    #[serde(rename = "big_square", alias = "big square")]
    BigSquare,
    #[serde(rename = "square")]
    Square,
    #[serde(rename = "2_lines_grid")]
    TwoLinesGrid,
    #[serde(rename = "binary_grid")]
    BinaryGrid,
}

/// A named, ordered group of homogeneous content items.
#[derive(Debug, Clone)]
pub struct HomeSection {
    /// Synthetic id, generated at decode time; not a wire field.
    pub id: String,
    pub name: String,
    pub layout: SectionLayout,
    pub content_type: ContentKind,
    pub order: i64,
    pub content: Vec<ContentItem>,
}

impl HomeSection {
    /// Deterministic id from the fields that identify a section within a page.
    pub fn generate_id(name: &str, order: i64, kind: ContentKind) -> String {
        let mut hasher = Sha256::new();
        hasher.update(name.as_bytes());
        hasher.update(order.to_le_bytes());
        hasher.update(kind.as_str().as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[derive(Deserialize)]
struct HomeSectionWire {
    name: String,
    #[serde(rename = "type")]
    layout: SectionLayout,
    content_type: ContentKind,
    order: i64,
    content: serde_json::Value,
}

fn decode_content(kind: ContentKind, value: serde_json::Value) -> serde_json::Result<Vec<ContentItem>> {
    let items = match kind {
        ContentKind::Podcast => serde_json::from_value::<Vec<PodcastItem>>(value)?
            .into_iter()
            .map(ContentItem::Podcast)
            .collect(),
        ContentKind::Episode => serde_json::from_value::<Vec<EpisodeItem>>(value)?
            .into_iter()
            .map(ContentItem::Episode)
            .collect(),
        ContentKind::AudioBook => serde_json::from_value::<Vec<AudiobookItem>>(value)?
            .into_iter()
            .map(ContentItem::Audiobook)
            .collect(),
        ContentKind::AudioArticle => serde_json::from_value::<Vec<AudioArticleItem>>(value)?
            .into_iter()
            .map(ContentItem::AudioArticle)
            .collect(),
    };
    Ok(items)
}

impl<'de> Deserialize<'de> for HomeSection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = HomeSectionWire::deserialize(deserializer)?;

        // A malformed content array is section-scoped: substitute an empty
        // list so one bad section never blanks the rest of the page. Unknown
        // layout or content_type strings have already failed above and
        // propagate.
        let content = match decode_content(wire.content_type, wire.content) {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(
                    "Dropping content of section '{}': {}",
                    wire.name,
                    err
                );
                Vec::new()
            }
        };

        Ok(HomeSection {
            id: HomeSection::generate_id(&wire.name, wire.order, wire.content_type),
            name: wire.name,
            layout: wire.layout,
            content_type: wire.content_type,
            order: wire.order,
            content,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    pub next_page: Option<String>,
    pub total_pages: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HomeSectionsResponse {
    pub sections: Vec<HomeSection>,
    pub pagination: Pagination,
}
