use crate::shared::errors::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single catalog entry returned by a title search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogMatch {
    /// Remote work id, valid for the lifetime of one resolution call
    pub work_id: String,
    pub title: Option<String>,
}

/// Cover-art entry for one work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverAsset {
    pub file_name: String,
}

/// One chapter entry from the remote feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterEntry {
    pub id: String,
    pub title: Option<String>,
    pub pages: Option<i32>,
}

/// One page of the remote chapter feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterFeedPage {
    pub entries: Vec<ChapterEntry>,
    /// Total number of entries the remote feed reports for this work
    pub total: u32,
}

/// Client for the remote manga catalog
///
/// Stateless over requests; network I/O only. Transport and decoding
/// failures surface as `AppError::ExternalServiceError`, a legitimate empty
/// result does not.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Search works by title. An absent or empty `data` collection in the
    /// remote payload decodes to an empty list, never an error.
    async fn search_manga(&self, title: &str, limit: usize) -> AppResult<Vec<CatalogMatch>>;

    /// Fetch the cover entry for one work id. `None` when the catalog has no
    /// cover entry for that work.
    async fn fetch_cover(&self, work_id: &str) -> AppResult<Option<CoverAsset>>;

    /// Fetch one page of a work's chapter feed
    async fn chapter_feed(
        &self,
        work_id: &str,
        limit: u32,
        offset: u32,
    ) -> AppResult<ChapterFeedPage>;
}
