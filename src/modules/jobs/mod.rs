/// Background collector job system
///
/// A closed catalog of collector kinds, the collectors themselves
/// (catalog scrapers/ingesters), and the runner that bridges their
/// asynchronous execution into a synchronous call result.
pub mod application;
pub mod collectors;
pub mod domain;
pub mod registry;
pub mod runner;

// Re-exports for easy access
pub use application::JobsService;
pub use collectors::{ChapterCollector, MangaCollector};
pub use domain::{
    collector::Collector,
    entities::{JobKind, JobReport},
};
pub use registry::CollectorRegistry;
pub use runner::JobRunner;
