use serde::Deserialize;

/// Search results come back through a looser schema than the home feed:
/// every numeric-looking field is a string and nothing is cross-validated
/// against the home-section enums.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub sections: Vec<SearchSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSection {
    pub content: Vec<SearchContentItem>,
    pub content_type: String,
    pub name: String,
    pub order: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchContentItem {
    pub avatar_url: String,
    pub description: String,
    pub duration: String,
    pub episode_count: String,
    pub language: String,
    pub name: String,
    pub podcast_id: String,
    #[serde(rename = "popularityScore")]
    pub popularity_score: String,
    pub priority: String,
    pub score: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_keeps_string_fields() {
        let json = r#"{
            "sections": [{
                "content": [{
                    "avatar_url": "https://cdn.example.com/p1.jpg",
                    "description": "A show",
                    "duration": "3600",
                    "episode_count": "12",
                    "language": "en",
                    "name": "Night Signals",
                    "podcast_id": "p1",
                    "popularityScore": "77",
                    "priority": "3",
                    "score": "9.5"
                }],
                "content_type": "podcast",
                "name": "Podcasts",
                "order": "1",
                "type": "square"
            }]
        }"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let section = &response.sections[0];
        assert_eq!(section.order, "1");
        assert_eq!(section.kind, "square");
        let item = &section.content[0];
        assert_eq!(item.duration, "3600");
        assert_eq!(item.score, "9.5");
        assert_eq!(item.popularity_score, "77");
    }

    #[test]
    fn test_search_section_accepts_free_strings() {
        // No enum validation on this endpoint.
        let json = r#"{
            "sections": [{
                "content": [],
                "content_type": "anything",
                "name": "Whatever",
                "order": "not-a-number",
                "type": "mystery"
            }]
        }"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.sections[0].content_type, "anything");
    }
}
