pub mod chapter_collector;
pub mod manga_collector;

pub use chapter_collector::ChapterCollector;
pub use manga_collector::MangaCollector;

use crate::modules::manga::domain::entities::Chapter;
use crate::modules::manga::domain::repository::ChapterRepository;
use crate::log_warn;
use crate::modules::provider::traits::{CatalogClient, ChapterFeedPage};
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;
use futures::{StreamExt, TryStreamExt};
use std::sync::Arc;
use uuid::Uuid;

const FEED_PAGE_SIZE: u32 = 100;
/// Upper bound on feed pages fetched per run; the remote `total` is not
/// trusted beyond this
const MAX_FEED_PAGES: usize = 200;
const FEED_FETCH_CONCURRENCY: usize = 4;

/// Walk the remote chapter feed page by page and store every entry.
///
/// The first page reports the feed total; the remaining pages are fetched
/// with bounded concurrency since each offset is known up front. The page
/// count is capped so a bogus remote total cannot fan out unbounded work.
pub(crate) async fn ingest_feed(
    catalog: &Arc<dyn CatalogClient>,
    chapter_repo: &Arc<dyn ChapterRepository>,
    manga_id: Uuid,
    work_id: &str,
    target: &str,
) -> AppResult<usize> {
    let first_page = catalog.chapter_feed(work_id, FEED_PAGE_SIZE, 0).await?;
    let total = first_page.total;

    let mut entries = first_page.entries;

    let remaining_offsets: Vec<u32> = (FEED_PAGE_SIZE..total)
        .step_by(FEED_PAGE_SIZE as usize)
        .take(MAX_FEED_PAGES - 1)
        .collect();
    if total as usize > MAX_FEED_PAGES * FEED_PAGE_SIZE as usize {
        log_warn!(
            "Feed for '{}' reports {} entries, capping at {} pages",
            target,
            total,
            MAX_FEED_PAGES
        );
    }

    let pages: Vec<ChapterFeedPage> = futures::stream::iter(remaining_offsets)
        .map(|offset| catalog.chapter_feed(work_id, FEED_PAGE_SIZE, offset))
        .buffered(FEED_FETCH_CONCURRENCY)
        .try_collect()
        .await?;
    for page in pages {
        entries.extend(page.entries);
    }

    let total_entries = entries.len();
    for (index, entry) in entries.into_iter().enumerate() {
        let chapter = Chapter {
            id: Uuid::new_v4(),
            manga_id,
            title: entry
                .title
                .unwrap_or_else(|| format!("Chapter {}", index + 1)),
            description: None,
            number_pages: entry.pages,
        };
        chapter_repo.save(&chapter).await?;
        LogContext::job_progress(index + 1, total_entries, target);
    }

    Ok(total_entries)
}
