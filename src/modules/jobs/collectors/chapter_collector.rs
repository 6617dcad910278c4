use crate::log_info;
use crate::modules::jobs::collectors::ingest_feed;
use crate::modules::jobs::domain::collector::Collector;
use crate::modules::jobs::domain::entities::{JobKind, JobReport};
use crate::modules::manga::domain::repository::{ChapterRepository, MangaRepository};
use crate::modules::provider::traits::CatalogClient;
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Collector that refreshes the chapter feed of an already-ingested manga.
pub struct ChapterCollector {
    catalog: Arc<dyn CatalogClient>,
    manga_repo: Arc<dyn MangaRepository>,
    chapter_repo: Arc<dyn ChapterRepository>,
}

impl ChapterCollector {
    pub fn new(
        catalog: Arc<dyn CatalogClient>,
        manga_repo: Arc<dyn MangaRepository>,
        chapter_repo: Arc<dyn ChapterRepository>,
    ) -> Self {
        Self {
            catalog,
            manga_repo,
            chapter_repo,
        }
    }
}

#[async_trait]
impl Collector for ChapterCollector {
    fn kind(&self) -> JobKind {
        JobKind::ChapterIngest
    }

    async fn execute(&self, target: &str) -> AppResult<JobReport> {
        let manga = self
            .manga_repo
            .find_by_title(target)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No manga found with the title: {}", target))
            })?;

        let matches = self.catalog.search_manga(target, 1).await?;
        let matched = matches.first().ok_or_else(|| {
            AppError::NotFound(format!("No catalog match for target '{}'", target))
        })?;

        let ingested = ingest_feed(
            &self.catalog,
            &self.chapter_repo,
            manga.id,
            &matched.work_id,
            target,
        )
        .await?;

        log_info!(
            "Chapter collector refreshed {} chapters for '{}'",
            ingested,
            target
        );

        Ok(JobReport {
            kind: JobKind::ChapterIngest,
            target: target.to_string(),
            work_id: Some(matched.work_id.clone()),
            items_ingested: ingested,
            detail: format!("Refreshed {} chapters for '{}'", ingested, manga.title),
        })
    }
}
