#![allow(dead_code)]
//! Shared test utilities: deterministic stub catalog client and factories
use async_trait::async_trait;
use mangareader::modules::provider::traits::{
    CatalogClient, CatalogMatch, ChapterEntry, ChapterFeedPage, CoverAsset,
};
use mangareader::shared::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

/// Deterministic in-memory catalog: title -> work id -> cover/feed data,
/// with call counters so tests can assert which endpoints were hit.
#[derive(Default)]
pub struct StubCatalogClient {
    works: HashMap<String, String>,
    covers: HashMap<String, String>,
    chapter_totals: HashMap<String, u32>,
    delay: Option<Duration>,
    fail_search: bool,
    pub search_calls: AtomicU32,
    pub cover_calls: AtomicU32,
    pub feed_calls: AtomicU32,
}

impl StubCatalogClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_work(mut self, title: &str, work_id: &str) -> Self {
        self.works.insert(title.to_string(), work_id.to_string());
        self
    }

    pub fn with_cover(mut self, work_id: &str, file_name: &str) -> Self {
        self.covers
            .insert(work_id.to_string(), file_name.to_string());
        self
    }

    pub fn with_chapters(mut self, work_id: &str, total: u32) -> Self {
        self.chapter_totals.insert(work_id.to_string(), total);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }
}

#[async_trait]
impl CatalogClient for StubCatalogClient {
    async fn search_manga(&self, title: &str, _limit: usize) -> AppResult<Vec<CatalogMatch>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_search {
            return Err(AppError::ExternalServiceError(
                "stub catalog unavailable".to_string(),
            ));
        }
        Ok(self
            .works
            .get(title)
            .map(|work_id| CatalogMatch {
                work_id: work_id.clone(),
                title: Some(title.to_string()),
            })
            .into_iter()
            .collect())
    }

    async fn fetch_cover(&self, work_id: &str) -> AppResult<Option<CoverAsset>> {
        self.cover_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.covers.get(work_id).map(|file_name| CoverAsset {
            file_name: file_name.clone(),
        }))
    }

    async fn chapter_feed(
        &self,
        work_id: &str,
        limit: u32,
        offset: u32,
    ) -> AppResult<ChapterFeedPage> {
        self.feed_calls.fetch_add(1, Ordering::SeqCst);
        let total = *self.chapter_totals.get(work_id).unwrap_or(&0);
        let page_len = total.saturating_sub(offset).min(limit);
        let entries = (0..page_len)
            .map(|i| {
                let number = offset + i + 1;
                ChapterEntry {
                    id: format!("{}-ch-{}", work_id, number),
                    title: Some(format!("Chapter {}", number)),
                    pages: Some(20),
                }
            })
            .collect();
        Ok(ChapterFeedPage { entries, total })
    }
}
