use crate::modules::jobs::domain::entities::{JobKind, JobReport};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// A background job that ingests or scrapes catalog/chapter data for a
/// free-form target (e.g. a manga title).
///
/// Collectors execute asynchronously and may fan out internally (paginated
/// fetches); the runner is what turns a run into a synchronous call result.
#[async_trait]
pub trait Collector: Send + Sync {
    fn kind(&self) -> JobKind;

    async fn execute(&self, target: &str) -> AppResult<JobReport>;
}
