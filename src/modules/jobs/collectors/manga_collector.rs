use crate::log_info;
use crate::modules::jobs::collectors::ingest_feed;
use crate::modules::jobs::domain::collector::Collector;
use crate::modules::jobs::domain::entities::{JobKind, JobReport};
use crate::modules::manga::domain::entities::{Manga, MangaStatus};
use crate::modules::manga::domain::repository::{ChapterRepository, MangaRepository};
use crate::modules::provider::traits::CatalogClient;
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Collector that ingests a manga and its chapter feed for a target title.
///
/// Resolves the target against the remote catalog, stores the matched work
/// as a manga record, then walks the chapter feed storing every entry.
pub struct MangaCollector {
    catalog: Arc<dyn CatalogClient>,
    manga_repo: Arc<dyn MangaRepository>,
    chapter_repo: Arc<dyn ChapterRepository>,
}

impl MangaCollector {
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
impl Collector for MangaCollector {
    fn kind(&self) -> JobKind {
        JobKind::MangaIngest
    }

    async fn execute(&self, target: &str) -> AppResult<JobReport> {
        let matches = self.catalog.search_manga(target, 1).await?;
        let matched = matches.first().ok_or_else(|| {
            AppError::NotFound(format!("No catalog match for target '{}'", target))
        })?;

        // Reuse an already-ingested record for the same title
        let manga = match self.manga_repo.find_by_title(target).await? {
            Some(existing) => existing,
            None => {
                let manga = Manga {
                    id: Uuid::new_v4(),
                    title: matched.title.clone().unwrap_or_else(|| target.to_string()),
                    description: None,
                    size: None,
                    creation_date: None,
                    closing_date: None,
                    status: MangaStatus::Ongoing,
                    gender: None,
                    author: None,
                    image: None,
                };
                self.manga_repo.save(&manga).await?
            }
        };

        let ingested = ingest_feed(
            &self.catalog,
            &self.chapter_repo,
            manga.id,
            &matched.work_id,
            target,
        )
        .await?;

        log_info!(
            "Manga collector ingested {} chapters for '{}' ({})",
            ingested,
            target,
            matched.work_id
        );

        Ok(JobReport {
            kind: JobKind::MangaIngest,
            target: target.to_string(),
            work_id: Some(matched.work_id.clone()),
            items_ingested: ingested,
            detail: format!("Ingested '{}' with {} chapters", manga.title, ingested),
        })
    }
}
