pub mod modules;
pub mod shared;

use modules::{
    jobs::{
        collectors::{ChapterCollector, MangaCollector},
        registry::CollectorRegistry,
        runner::JobRunner,
        JobsService,
    },
    manga::{
        application::{ChapterService, MangaService, RatingService},
        domain::repository::{ChapterRepository, MangaRepository, UserRatingRepository},
        infrastructure::persistence::{
            InMemoryChapterRepository, InMemoryMangaRepository, InMemoryUserRatingRepository,
        },
    },
    provider::{
        application::cover_resolver::CoverResolver, infrastructure::external::MangaDexClient,
        traits::CatalogClient,
    },
};
use shared::errors::AppResult;
use shared::utils::logger::init_logger;
use std::sync::Arc;
use std::time::Duration;

/// Runtime configuration for the composition root
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Overrides the MangaDex base URL (otherwise env/default applies)
    pub catalog_base_url: Option<String>,
    /// Optional deadline applied to triggered collector jobs
    pub job_deadline: Option<Duration>,
}

/// Fully wired application services.
///
/// Built once at process start; the collector registry and the featured
/// covers table are read-only afterwards.
pub struct AppServices {
    pub manga_service: Arc<MangaService>,
    pub chapter_service: Arc<ChapterService>,
    pub rating_service: Arc<RatingService>,
    pub cover_resolver: Arc<CoverResolver>,
    pub jobs_service: Arc<JobsService>,
    pub collector_registry: Arc<CollectorRegistry>,
}

impl AppServices {
    pub fn bootstrap(config: AppConfig) -> AppResult<Self> {
        dotenvy::dotenv().ok();
        init_logger();

        let catalog: Arc<dyn CatalogClient> = match &config.catalog_base_url {
            Some(base_url) => Arc::new(MangaDexClient::with_base_url(base_url.clone())?),
            None => Arc::new(MangaDexClient::new()?),
        };

        Self::with_catalog(config, catalog)
    }

    /// Wiring seam used by tests to inject a stub catalog client
    pub fn with_catalog(config: AppConfig, catalog: Arc<dyn CatalogClient>) -> AppResult<Self> {
        let manga_repo: Arc<dyn MangaRepository> = Arc::new(InMemoryMangaRepository::new());
        let chapter_repo: Arc<dyn ChapterRepository> = Arc::new(InMemoryChapterRepository::new());
        let rating_repo: Arc<dyn UserRatingRepository> =
            Arc::new(InMemoryUserRatingRepository::new());

        let manga_service = Arc::new(MangaService::new(
            Arc::clone(&manga_repo),
            Arc::clone(&chapter_repo),
        ));
        let chapter_service = Arc::new(ChapterService::new(
            Arc::clone(&chapter_repo),
            Arc::clone(&manga_repo),
        ));
        let rating_service = Arc::new(RatingService::new(
            Arc::clone(&rating_repo),
            Arc::clone(&manga_repo),
        ));

        let cover_resolver = Arc::new(CoverResolver::new(Arc::clone(&catalog)));

        let manga_collector = Arc::new(MangaCollector::new(
            Arc::clone(&catalog),
            Arc::clone(&manga_repo),
            Arc::clone(&chapter_repo),
        ));
        let chapter_collector = Arc::new(ChapterCollector::new(
            Arc::clone(&catalog),
            Arc::clone(&manga_repo),
            Arc::clone(&chapter_repo),
        ));

        let collector_registry = Arc::new(CollectorRegistry::new(
            manga_collector.clone(),
            chapter_collector,
        ));

        // The trigger path is bound to the manga collector; the registry is
        // the extension point for per-kind dispatch.
        let runner = match config.job_deadline {
            Some(deadline) => JobRunner::with_deadline(manga_collector, deadline),
            None => JobRunner::new(manga_collector),
        };
        let jobs_service = Arc::new(JobsService::new(runner, Arc::clone(&collector_registry)));

        Ok(Self {
            manga_service,
            chapter_service,
            rating_service,
            cover_resolver,
            jobs_service,
            collector_registry,
        })
    }
}
