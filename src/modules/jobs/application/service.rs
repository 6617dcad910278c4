use crate::modules::jobs::domain::entities::{JobKind, JobReport};
use crate::modules::jobs::registry::CollectorRegistry;
use crate::modules::jobs::runner::JobRunner;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;
use std::sync::Arc;

/// Job trigger and catalog surfaces.
///
/// The trigger path is bound to the manga collector through the runner and
/// takes a free-form target string; the registry backs the kind catalog and
/// is the extension point for future per-kind dispatch.
pub struct JobsService {
    runner: JobRunner,
    registry: Arc<CollectorRegistry>,
}

impl JobsService {
    pub fn new(runner: JobRunner, registry: Arc<CollectorRegistry>) -> Self {
        Self { runner, registry }
    }

    /// Trigger the manga collector for `target` and wait for its outcome
    pub async fn execute_manga_job(&self, target: &str) -> AppResult<JobReport> {
        self.runner.run(target).await.map_err(|e| {
            LogContext::error_with_context(&e, &format!("Manga job for '{}'", target));
            e
        })
    }

    /// The static ordered list of known job kinds
    pub fn list_jobs(&self) -> Vec<JobKind> {
        self.registry.list_kinds()
    }
}
