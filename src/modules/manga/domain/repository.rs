/// Repository traits for the persistence collaborator
///
/// The backend treats the store as an external collaborator reachable by
/// primary key and page queries; these traits are that contract.
use crate::modules::manga::domain::entities::{Chapter, Manga, UserMangaRating};
use crate::shared::application::PaginationParams;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait MangaRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Manga>>;
    async fn find_by_title(&self, title: &str) -> AppResult<Option<Manga>>;
    async fn find_all(&self) -> AppResult<Vec<Manga>>;
    /// Page-based read; ordering is stable across calls within one process
    async fn find_page(&self, params: &PaginationParams) -> AppResult<Vec<Manga>>;
    async fn save(&self, manga: &Manga) -> AppResult<Manga>;
    async fn update(&self, manga: &Manga) -> AppResult<Manga>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
    async fn count(&self) -> AppResult<u64>;
}

#[async_trait]
pub trait ChapterRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Chapter>>;
    async fn find_all(&self) -> AppResult<Vec<Chapter>>;
    async fn find_by_manga(&self, manga_id: &Uuid) -> AppResult<Vec<Chapter>>;
    async fn save(&self, chapter: &Chapter) -> AppResult<Chapter>;
}

#[async_trait]
pub trait UserRatingRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<UserMangaRating>>;
    async fn find_by_user(&self, user_id: &Uuid) -> AppResult<Vec<UserMangaRating>>;
    async fn save(&self, rating: &UserMangaRating) -> AppResult<UserMangaRating>;
    async fn update(&self, rating: &UserMangaRating) -> AppResult<UserMangaRating>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}
