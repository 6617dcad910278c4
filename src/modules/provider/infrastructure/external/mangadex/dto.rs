use serde::{Deserialize, Serialize};

/// `GET /manga?title=..&limit=..` response
///
/// The catalog omits `data` entirely when nothing matches; default to an
/// empty vec so that case decodes as "no match" rather than a decode error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MangaListResponse {
    #[serde(default)]
    pub data: Vec<MangaData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MangaData {
    pub id: String,
    #[serde(default)]
    pub attributes: Option<MangaAttributes>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MangaAttributes {
    #[serde(default)]
    pub title: std::collections::HashMap<String, String>,
}

impl MangaData {
    /// Preferred display title: English first, then any available locale
    pub fn display_title(&self) -> Option<String> {
        let titles = &self.attributes.as_ref()?.title;
        titles
            .get("en")
            .or_else(|| titles.values().next())
            .cloned()
    }
}

/// `GET /cover?manga[]=..&limit=1` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverListResponse {
    #[serde(default)]
    pub data: Vec<CoverData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverData {
    pub id: String,
    pub attributes: CoverAttributes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverAttributes {
    #[serde(rename = "fileName")]
    pub file_name: String,
}

/// `GET /manga/{id}/feed` response page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterFeedResponse {
    #[serde(default)]
    pub data: Vec<ChapterData>,
    #[serde(default)]
    pub total: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterData {
    pub id: String,
    pub attributes: ChapterAttributes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterAttributes {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub pages: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_data_decodes_as_empty() {
        let response: MangaListResponse = serde_json::from_str(r#"{"result":"ok"}"#).unwrap();
        assert!(response.data.is_empty());

        let covers: CoverListResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(covers.data.is_empty());
    }

    #[test]
    fn test_cover_file_name_field_mapping() {
        let json = r#"{"data":[{"id":"c1","attributes":{"fileName":"x.jpg"}}]}"#;
        let response: CoverListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data[0].attributes.file_name, "x.jpg");
    }

    #[test]
    fn test_display_title_prefers_english() {
        let json = r#"{"data":[{"id":"m1","attributes":{"title":{"ja":"ワンピース","en":"One Piece"}}}]}"#;
        let response: MangaListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.data[0].display_title().as_deref(),
            Some("One Piece")
        );
    }
}
