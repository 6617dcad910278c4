/// In-memory repository implementations
///
/// Backing store for tests and for running the backend without an external
/// database. Reads return records in insertion order so page queries are
/// deterministic.
use crate::modules::manga::domain::entities::{Chapter, Manga, UserMangaRating};
use crate::modules::manga::domain::repository::{
    ChapterRepository, MangaRepository, UserRatingRepository,
};
use crate::shared::application::PaginationParams;
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

struct Stored<T> {
    seq: u64,
    value: T,
}

fn sorted_values<T: Clone>(map: &DashMap<Uuid, Stored<T>>) -> Vec<T> {
    let mut entries: Vec<(u64, T)> = map
        .iter()
        .map(|e| (e.value().seq, e.value().value.clone()))
        .collect();
    entries.sort_by_key(|(seq, _)| *seq);
    entries.into_iter().map(|(_, v)| v).collect()
}

#[derive(Default)]
pub struct InMemoryMangaRepository {
    store: DashMap<Uuid, Stored<Manga>>,
    next_seq: AtomicU64,
}

impl InMemoryMangaRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MangaRepository for InMemoryMangaRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Manga>> {
        Ok(self.store.get(id).map(|e| e.value().value.clone()))
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Manga>> {
        Ok(sorted_values(&self.store)
            .into_iter()
            .find(|m| m.title.eq_ignore_ascii_case(title)))
    }

    async fn find_all(&self) -> AppResult<Vec<Manga>> {
        Ok(sorted_values(&self.store))
    }

    async fn find_page(&self, params: &PaginationParams) -> AppResult<Vec<Manga>> {
        Ok(sorted_values(&self.store)
            .into_iter()
            .skip(params.offset())
            .take(params.limit())
            .collect())
    }

    async fn save(&self, manga: &Manga) -> AppResult<Manga> {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.store.insert(
            manga.id,
            Stored {
                seq,
                value: manga.clone(),
            },
        );
        Ok(manga.clone())
    }

    async fn update(&self, manga: &Manga) -> AppResult<Manga> {
        let mut entry = self.store.get_mut(&manga.id).ok_or_else(|| {
            AppError::NotFound(format!("No manga found with the id: {}", manga.id))
        })?;
        entry.value_mut().value = manga.clone();
        Ok(manga.clone())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.store
            .remove(id)
            .ok_or_else(|| AppError::NotFound(format!("No manga found with the id: {}", id)))?;
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.store.len() as u64)
    }
}

#[derive(Default)]
pub struct InMemoryChapterRepository {
    store: DashMap<Uuid, Stored<Chapter>>,
    next_seq: AtomicU64,
}

impl InMemoryChapterRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChapterRepository for InMemoryChapterRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Chapter>> {
        Ok(self.store.get(id).map(|e| e.value().value.clone()))
    }

    async fn find_all(&self) -> AppResult<Vec<Chapter>> {
        Ok(sorted_values(&self.store))
    }

    async fn find_by_manga(&self, manga_id: &Uuid) -> AppResult<Vec<Chapter>> {
        Ok(sorted_values(&self.store)
            .into_iter()
            .filter(|c| c.manga_id == *manga_id)
            .collect())
    }

    async fn save(&self, chapter: &Chapter) -> AppResult<Chapter> {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.store.insert(
            chapter.id,
            Stored {
                seq,
                value: chapter.clone(),
            },
        );
        Ok(chapter.clone())
    }
}

#[derive(Default)]
pub struct InMemoryUserRatingRepository {
    store: DashMap<Uuid, Stored<UserMangaRating>>,
    next_seq: AtomicU64,
}

impl InMemoryUserRatingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRatingRepository for InMemoryUserRatingRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<UserMangaRating>> {
        Ok(self.store.get(id).map(|e| e.value().value.clone()))
    }

    async fn find_by_user(&self, user_id: &Uuid) -> AppResult<Vec<UserMangaRating>> {
        Ok(sorted_values(&self.store)
            .into_iter()
            .filter(|r| r.user_id == *user_id)
            .collect())
    }

    async fn save(&self, rating: &UserMangaRating) -> AppResult<UserMangaRating> {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.store.insert(
            rating.id,
            Stored {
                seq,
                value: rating.clone(),
            },
        );
        Ok(rating.clone())
    }

    async fn update(&self, rating: &UserMangaRating) -> AppResult<UserMangaRating> {
        let mut entry = self.store.get_mut(&rating.id).ok_or_else(|| {
            AppError::NotFound(format!("No rating found with the id: {}", rating.id))
        })?;
        entry.value_mut().value = rating.clone();
        Ok(rating.clone())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.store
            .remove(id)
            .ok_or_else(|| AppError::NotFound(format!("No rating found with the id: {}", id)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::manga::domain::entities::MangaStatus;

    #[tokio::test]
    async fn test_find_page_respects_insertion_order() {
        let repo = InMemoryMangaRepository::new();
        for i in 0..5 {
            repo.save(&Manga::new(format!("title-{}", i), MangaStatus::Ongoing))
                .await
                .unwrap();
        }

        let page = repo
            .find_page(&PaginationParams::new(2, 2))
            .await
            .unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].title, "title-2");
        assert_eq!(page[1].title, "title-3");
    }

    #[tokio::test]
    async fn test_delete_missing_manga_is_not_found() {
        let repo = InMemoryMangaRepository::new();
        let err = repo.delete(&Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
