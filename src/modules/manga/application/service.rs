use crate::modules::manga::application::covers;
use crate::modules::manga::application::dto::{
    apply_field, apply_optional_field, CreateMangaRequest, FeaturedCover, UpdateMangaRequest,
};
use crate::modules::manga::domain::entities::{Chapter, Manga};
use crate::modules::manga::domain::repository::{ChapterRepository, MangaRepository};
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};
use std::sync::Arc;
use uuid::Uuid;

pub struct MangaService {
    manga_repo: Arc<dyn MangaRepository>,
    chapter_repo: Arc<dyn ChapterRepository>,
}

impl MangaService {
    pub fn new(
        manga_repo: Arc<dyn MangaRepository>,
        chapter_repo: Arc<dyn ChapterRepository>,
    ) -> Self {
        Self {
            manga_repo,
            chapter_repo,
        }
    }

    pub async fn create_manga(&self, request: CreateMangaRequest) -> AppResult<Manga> {
        if request.title.trim().is_empty() {
            return Err(AppError::CreationFailed(
                "Error creating Manga: title must not be empty".to_string(),
            ));
        }

        let manga = Manga {
            id: Uuid::new_v4(),
            title: request.title,
            description: request.description,
            size: request.size,
            creation_date: request.creation_date,
            closing_date: request.closing_date,
            status: request.status,
            gender: request.gender,
            author: request.author,
            image: request.image,
        };

        let saved = self
            .manga_repo
            .save(&manga)
            .await
            .map_err(|e| AppError::CreationFailed(format!("Error creating Manga: {}", e)))?;

        log_info!("Created manga '{}' ({})", saved.title, saved.id);
        Ok(saved)
    }

    pub async fn delete_manga(&self, id: &Uuid) -> AppResult<()> {
        if self.manga_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "No manga found with the id: {}",
                id
            )));
        }
        self.manga_repo.delete(id).await
    }

    /// Bulk read when no pagination is given, page read otherwise
    pub async fn list_mangas(&self, params: Option<PaginationParams>) -> AppResult<Vec<Manga>> {
        match params {
            Some(params) => self.manga_repo.find_page(&params).await,
            None => self.manga_repo.find_all().await,
        }
    }

    /// Page read with result metadata (total count and page count)
    pub async fn page_mangas(
        &self,
        params: PaginationParams,
    ) -> AppResult<PaginatedResult<Manga>> {
        let items = self.manga_repo.find_page(&params).await?;
        let total_count = self.manga_repo.count().await?;
        Ok(PaginatedResult::new(items, total_count, &params))
    }

    /// Field-by-field conditional patch: only `Some` fields overwrite the
    /// loaded record. Single-record operation, no extra synchronization.
    pub async fn update_manga(&self, id: &Uuid, patch: UpdateMangaRequest) -> AppResult<Manga> {
        let mut manga = self
            .manga_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No manga found with the id: {}", id)))?;

        apply_field(patch.title, &mut manga.title);
        apply_optional_field(patch.description, &mut manga.description);
        apply_optional_field(patch.size, &mut manga.size);
        apply_optional_field(patch.creation_date, &mut manga.creation_date);
        apply_optional_field(patch.closing_date, &mut manga.closing_date);
        apply_field(patch.status, &mut manga.status);
        apply_optional_field(patch.gender, &mut manga.gender);
        apply_optional_field(patch.author, &mut manga.author);
        apply_optional_field(patch.image, &mut manga.image);

        let updated = self.manga_repo.update(&manga).await?;
        log_debug!("Updated manga {}", id);
        Ok(updated)
    }

    pub async fn find_by_id(&self, id: &Uuid) -> AppResult<Manga> {
        self.manga_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No manga found with the id: {}", id)))
    }

    pub async fn chapters_by_manga(&self, id: &Uuid) -> AppResult<Vec<Chapter>> {
        // Missing manga is NotFound; a manga without chapters is an empty list
        if self.manga_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "No manga found with the id: {}",
                id
            )));
        }
        self.chapter_repo.find_by_manga(id).await
    }

    /// Random sample from the static featured-covers table
    pub fn random_covers(&self, max: usize) -> Vec<FeaturedCover> {
        covers::random_covers(max)
    }
}
