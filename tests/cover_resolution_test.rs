/// End-to-end tests for the title -> work id -> cover URL pipeline
///
/// Uses a deterministic stub catalog so the two-stage short-circuiting and
/// per-call isolation can be asserted precisely.
mod utils;

use mangareader::modules::provider::application::cover_resolver::CoverResolver;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use utils::StubCatalogClient;

// ================================================================================================
// SHORT-CIRCUIT BEHAVIOR
// ================================================================================================

#[tokio::test]
async fn resolve_without_match_never_queries_covers() {
    let catalog = Arc::new(StubCatalogClient::new());
    let resolver = CoverResolver::new(catalog.clone());

    let result = resolver.resolve("Completely Unknown Title").await.unwrap();

    assert!(result.is_none());
    assert_eq!(catalog.search_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        catalog.cover_calls.load(Ordering::SeqCst),
        0,
        "cover endpoint must not be hit without a match"
    );
}

#[tokio::test]
async fn resolve_with_match_but_no_cover_is_empty() {
    let catalog = Arc::new(StubCatalogClient::new().with_work("One Piece", "abc123"));
    let resolver = CoverResolver::new(catalog.clone());

    let result = resolver.resolve("One Piece").await.unwrap();

    assert!(result.is_none());
    assert_eq!(catalog.cover_calls.load(Ordering::SeqCst), 1);
}

// ================================================================================================
// URL CONSTRUCTION
// ================================================================================================

#[tokio::test]
async fn resolve_builds_the_exact_asset_url() {
    let catalog = Arc::new(
        StubCatalogClient::new()
            .with_work("One Piece", "abc123")
            .with_cover("abc123", "x.jpg"),
    );
    let resolver = CoverResolver::new(catalog);

    let cover = resolver.resolve("One Piece").await.unwrap().unwrap();

    assert_eq!(cover.work_id, "abc123");
    assert_eq!(
        cover.image_url,
        "https://uploads.mangadex.org/covers/abc123/x.jpg"
    );
}

#[tokio::test]
async fn resolve_twice_returns_identical_results() {
    let catalog = Arc::new(
        StubCatalogClient::new()
            .with_work("Naruto", "n-1")
            .with_cover("n-1", "naruto.png"),
    );
    let resolver = CoverResolver::new(catalog);

    let first = resolver.resolve("Naruto").await.unwrap();
    let second = resolver.resolve("Naruto").await.unwrap();

    assert_eq!(first, second);
}

// ================================================================================================
// CONCURRENT RESOLUTIONS
// ================================================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_resolutions_do_not_cross_contaminate() {
    let mut catalog = StubCatalogClient::new().with_delay(std::time::Duration::from_millis(5));
    for i in 0..16 {
        let title = format!("title-{}", i);
        let work_id = format!("work-{}", i);
        catalog = catalog
            .with_work(&title, &work_id)
            .with_cover(&work_id, &format!("cover-{}.jpg", i));
    }
    let resolver = Arc::new(CoverResolver::new(Arc::new(catalog)));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let resolver = Arc::clone(&resolver);
            tokio::spawn(async move {
                let cover = resolver
                    .resolve(&format!("title-{}", i))
                    .await
                    .unwrap()
                    .unwrap();
                (i, cover)
            })
        })
        .collect();

    for handle in handles {
        let (i, cover) = handle.await.unwrap();
        assert_eq!(cover.work_id, format!("work-{}", i));
        assert_eq!(
            cover.image_url,
            format!(
                "https://uploads.mangadex.org/covers/work-{}/cover-{}.jpg",
                i, i
            )
        );
    }
}

// ================================================================================================
// FAILURE PROPAGATION
// ================================================================================================

#[tokio::test]
async fn transport_failure_is_an_error_not_an_empty_result() {
    let catalog = Arc::new(StubCatalogClient::new().failing_search());
    let resolver = CoverResolver::new(catalog);

    let result = resolver.resolve("One Piece").await;
    assert!(result.is_err());
}
