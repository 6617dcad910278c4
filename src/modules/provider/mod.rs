/// Remote catalog provider module
///
/// Talks to the MangaDex catalog: title search, cover lookup and the chapter
/// feed used by collector jobs. The `CatalogClient` trait is the seam between
/// application logic and the HTTP infrastructure.
pub mod application;
pub mod infrastructure;
pub mod traits;

// Re-exports for easy access
pub use application::cover_resolver::{CoverResolver, MangaCover, COVERS_BASE_URL};
pub use infrastructure::external::mangadex::MangaDexClient;
pub use traits::{CatalogClient, CatalogMatch, ChapterEntry, ChapterFeedPage, CoverAsset};
