use crate::modules::manga::application::dto::CreateChapterRequest;
use crate::modules::manga::domain::entities::Chapter;
use crate::modules::manga::domain::repository::{ChapterRepository, MangaRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::log_info;
use std::sync::Arc;
use uuid::Uuid;

pub struct ChapterService {
    chapter_repo: Arc<dyn ChapterRepository>,
    manga_repo: Arc<dyn MangaRepository>,
}

impl ChapterService {
    pub fn new(
        chapter_repo: Arc<dyn ChapterRepository>,
        manga_repo: Arc<dyn MangaRepository>,
    ) -> Self {
        Self {
            chapter_repo,
            manga_repo,
        }
    }

    /// Create a chapter under the parent manga named in the request
    pub async fn create_chapter(&self, request: CreateChapterRequest) -> AppResult<Chapter> {
        let manga = self
            .manga_repo
            .find_by_id(&request.manga_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No manga found with the id: {}",
                    request.manga_id
                ))
            })?;

        let chapter = Chapter {
            id: Uuid::new_v4(),
            manga_id: manga.id,
            title: request.title,
            description: request.description,
            number_pages: request.number_pages,
        };

        let saved = self
            .chapter_repo
            .save(&chapter)
            .await
            .map_err(|e| AppError::CreationFailed(format!("Error creating Chapter: {}", e)))?;

        log_info!("Created chapter '{}' for manga {}", saved.title, manga.id);
        Ok(saved)
    }

    pub async fn list_chapters(&self) -> AppResult<Vec<Chapter>> {
        self.chapter_repo.find_all().await
    }
}
