use crate::modules::provider::traits::CatalogClient;
use crate::shared::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Base path of the remote asset host. The derived URL template
/// `{COVERS_BASE_URL}/{workId}/{fileName}` must be preserved exactly.
pub const COVERS_BASE_URL: &str = "https://uploads.mangadex.org/covers";

/// Output of a successful resolution; only ever built from a non-empty
/// catalog match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MangaCover {
    pub work_id: String,
    pub image_url: String,
}

/// Two-stage resolution pipeline: title -> work id -> cover URL.
///
/// Stage two never runs without a stage-one match, and a missing value at
/// either stage short-circuits to `Ok(None)`; only transport/decoding
/// failures are errors.
pub struct CoverResolver {
    catalog: Arc<dyn CatalogClient>,
}

impl CoverResolver {
    pub fn new(catalog: Arc<dyn CatalogClient>) -> Self {
        Self { catalog }
    }

    pub async fn resolve(&self, title: &str) -> AppResult<Option<MangaCover>> {
        let matches = self.catalog.search_manga(title, 1).await?;

        let Some(matched) = matches.first() else {
            // Normal "no such title" outcome, not a failure
            debug!("No catalog match for title '{}'", title);
            return Ok(None);
        };

        let Some(asset) = self.catalog.fetch_cover(&matched.work_id).await? else {
            debug!(
                "Catalog match {} for '{}' has no cover entry",
                matched.work_id, title
            );
            return Ok(None);
        };

        Ok(Some(MangaCover {
            work_id: matched.work_id.clone(),
            image_url: format!(
                "{}/{}/{}",
                COVERS_BASE_URL, matched.work_id, asset.file_name
            ),
        }))
    }
}
