/// Manga bounded context
///
/// CRUD collaborator layer for the catalog: manga, chapter and user-rating
/// records behind repository traits, plus the static featured-covers table.
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::{
    covers, dto::*, ChapterService, MangaService, RatingService,
};
pub use domain::{
    entities::{Chapter, Manga, MangaStatus, UserMangaRating},
    repository::{ChapterRepository, MangaRepository, UserRatingRepository},
};
pub use infrastructure::persistence::{
    InMemoryChapterRepository, InMemoryMangaRepository, InMemoryUserRatingRepository,
};
