/// Tests for the job trigger bridge and the job-kind catalog
///
/// Covers the blocking guarantee, deadline handling, failure propagation
/// and the stable kind enumeration.
mod utils;

use mangareader::modules::jobs::domain::entities::JobKind;
use mangareader::shared::errors::AppError;
use mangareader::{AppConfig, AppServices};
use std::sync::Arc;
use std::time::{Duration, Instant};
use utils::StubCatalogClient;

fn services_with(catalog: StubCatalogClient, deadline: Option<Duration>) -> AppServices {
    AppServices::with_catalog(
        AppConfig {
            catalog_base_url: None,
            job_deadline: deadline,
        },
        Arc::new(catalog),
    )
    .unwrap()
}

// ================================================================================================
// TRIGGER SURFACE
// ================================================================================================

#[tokio::test]
async fn trigger_runs_the_manga_collector_to_completion() {
    let catalog = StubCatalogClient::new()
        .with_work("One Piece", "op-1")
        .with_chapters("op-1", 250);
    let services = services_with(catalog, None);

    let report = services
        .jobs_service
        .execute_manga_job("One Piece")
        .await
        .unwrap();

    assert_eq!(report.kind, JobKind::MangaIngest);
    assert_eq!(report.work_id.as_deref(), Some("op-1"));
    assert_eq!(report.items_ingested, 250);

    // The collector's side effects are visible once the call returns
    let mangas = services.manga_service.list_mangas(None).await.unwrap();
    assert_eq!(mangas.len(), 1);
    let chapters = services
        .manga_service
        .chapters_by_manga(&mangas[0].id)
        .await
        .unwrap();
    assert_eq!(chapters.len(), 250);
}

#[tokio::test]
async fn trigger_blocks_at_least_as_long_as_the_job() {
    let delay = Duration::from_millis(100);
    let catalog = StubCatalogClient::new()
        .with_work("Naruto", "n-1")
        .with_chapters("n-1", 1)
        .with_delay(delay);
    let services = services_with(catalog, None);

    let start = Instant::now();
    services
        .jobs_service
        .execute_manga_job("Naruto")
        .await
        .unwrap();

    assert!(
        start.elapsed() >= delay,
        "trigger returned before the collector finished"
    );
}

#[tokio::test]
async fn unknown_target_fails_the_job() {
    let services = services_with(StubCatalogClient::new(), None);

    let err = services
        .jobs_service
        .execute_manga_job("Does Not Exist")
        .await
        .unwrap_err();

    match err {
        AppError::JobFailed(msg) => assert!(msg.contains("Does Not Exist")),
        other => panic!("expected JobFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn deadline_bounds_a_slow_job() {
    let catalog = StubCatalogClient::new()
        .with_work("One Piece", "op-1")
        .with_chapters("op-1", 1)
        .with_delay(Duration::from_secs(10));
    let services = services_with(catalog, Some(Duration::from_millis(50)));

    let start = Instant::now();
    let err = services
        .jobs_service
        .execute_manga_job("One Piece")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::JobFailed(_)));
    assert!(start.elapsed() < Duration::from_secs(10));
}

// ================================================================================================
// CATALOG SURFACE
// ================================================================================================

#[tokio::test]
async fn job_catalog_is_stable_and_ordered() {
    let services = services_with(StubCatalogClient::new(), None);

    let first = services.jobs_service.list_jobs();
    let second = services.jobs_service.list_jobs();

    assert_eq!(first, vec![JobKind::MangaIngest, JobKind::ChapterIngest]);
    assert_eq!(first, second);
}

#[tokio::test]
async fn registry_resolves_each_kind_to_its_collector() {
    let services = services_with(StubCatalogClient::new(), None);

    for kind in services.collector_registry.list_kinds() {
        assert_eq!(services.collector_registry.resolve(kind).kind(), kind);
    }
}
