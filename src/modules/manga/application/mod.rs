pub mod chapter_service;
pub mod covers;
pub mod dto;
pub mod rating_service;
pub mod service;

pub use chapter_service::ChapterService;
pub use rating_service::RatingService;
pub use service::MangaService;
