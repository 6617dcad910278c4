use crate::modules::provider::infrastructure::external::CommonHttpHandler;
use crate::modules::provider::traits::{
    CatalogClient, CatalogMatch, ChapterEntry, ChapterFeedPage, CoverAsset,
};
use crate::shared::{
    errors::{AppError, AppResult},
    utils::RateLimiter,
};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::debug;

use super::dto::{ChapterFeedResponse, CoverListResponse, MangaListResponse};

pub const MANGADEX_API_URL: &str = "https://api.mangadex.org";

/// HTTP client for the MangaDex catalog
pub struct MangaDexClient {
    client: Client,
    base_url: String,
    rate_limiter: Arc<RateLimiter>,
}

impl MangaDexClient {
    pub fn new() -> AppResult<Self> {
        let base_url = std::env::var("MANGADEX_API_URL")
            .unwrap_or_else(|_| MANGADEX_API_URL.to_string());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> AppResult<Self> {
        let client = CommonHttpHandler::create_http_client(30, "MangaReader-Backend/1.0")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            rate_limiter: Arc::new(RateLimiter::new(5.0)), // MangaDex global limit
        })
    }
}

#[async_trait]
impl CatalogClient for MangaDexClient {
    async fn search_manga(&self, title: &str, limit: usize) -> AppResult<Vec<CatalogMatch>> {
        if title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Search title cannot be empty".to_string(),
            ));
        }

        self.rate_limiter.wait().await?;

        let url = format!("{}/manga", self.base_url);
        let response = CommonHttpHandler::execute_with_retry(
            || {
                self.client
                    .get(&url)
                    .query(&[("title", title), ("limit", &limit.to_string())])
                    .send()
            },
            "MangaDex",
            "search manga",
        )
        .await?;

        let payload = response
            .json::<MangaListResponse>()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!(
                    "Failed to parse MangaDex search response: {}",
                    e
                ))
            })?;

        debug!("MangaDex search '{}' returned {} matches", title, payload.data.len());

        Ok(payload
            .data
            .into_iter()
            .map(|entry| CatalogMatch {
                title: entry.display_title(),
                work_id: entry.id,
            })
            .collect())
    }

    async fn fetch_cover(&self, work_id: &str) -> AppResult<Option<CoverAsset>> {
        self.rate_limiter.wait().await?;

        let url = format!("{}/cover", self.base_url);
        let response = CommonHttpHandler::execute_with_retry(
            || {
                self.client
                    .get(&url)
                    .query(&[("manga[]", work_id), ("limit", "1")])
                    .send()
            },
            "MangaDex",
            "fetch cover",
        )
        .await?;

        let payload = response
            .json::<CoverListResponse>()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!(
                    "Failed to parse MangaDex cover response: {}",
                    e
                ))
            })?;

        Ok(payload.data.into_iter().next().map(|cover| CoverAsset {
            file_name: cover.attributes.file_name,
        }))
    }

    async fn chapter_feed(
        &self,
        work_id: &str,
        limit: u32,
        offset: u32,
    ) -> AppResult<ChapterFeedPage> {
        self.rate_limiter.wait().await?;

        let url = format!("{}/manga/{}/feed", self.base_url, work_id);
        let response = CommonHttpHandler::execute_with_retry(
            || {
                self.client
                    .get(&url)
                    .query(&[
                        ("limit", limit.to_string()),
                        ("offset", offset.to_string()),
                    ])
                    .send()
            },
            "MangaDex",
            "chapter feed",
        )
        .await?;

        let payload = response
            .json::<ChapterFeedResponse>()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!(
                    "Failed to parse MangaDex feed response: {}",
                    e
                ))
            })?;

        Ok(ChapterFeedPage {
            total: payload.total,
            entries: payload
                .data
                .into_iter()
                .map(|chapter| ChapterEntry {
                    id: chapter.id,
                    title: chapter.attributes.title,
                    pages: chapter.attributes.pages,
                })
                .collect(),
        })
    }
}
