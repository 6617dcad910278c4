use crate::{log_error, log_warn};
use crate::modules::jobs::domain::collector::Collector;
use crate::modules::jobs::domain::entities::JobReport;
use crate::shared::errors::{AppError, AppResult};
use std::sync::Arc;
use std::time::Duration;

/// Async-to-sync bridge over the bound collector.
///
/// `run` submits the collector's execution to the runtime and suspends on
/// its completion signal, so callers see ordinary call semantics while the
/// collector may fan out internally. A started job cannot be aborted; the
/// bridge only waits, bounded by the optional deadline.
pub struct JobRunner {
    collector: Arc<dyn Collector>,
    deadline: Option<Duration>,
}

impl JobRunner {
    /// Runner without a deadline: a hung collector hangs the caller
    pub fn new(collector: Arc<dyn Collector>) -> Self {
        Self {
            collector,
            deadline: None,
        }
    }

    pub fn with_deadline(collector: Arc<dyn Collector>, deadline: Duration) -> Self {
        Self {
            collector,
            deadline: Some(deadline),
        }
    }

    /// Trigger the bound collector for `target` and wait for its outcome.
    ///
    /// Does not return until the collector signals completion (or the
    /// deadline expires). Any failure surfaces as `AppError::JobFailed`;
    /// no partial outcome is returned.
    pub async fn run(&self, target: &str) -> AppResult<JobReport> {
        let collector = Arc::clone(&self.collector);
        let kind = collector.kind();
        let owned_target = target.to_string();

        let handle =
            tokio::spawn(async move { collector.execute(&owned_target).await });

        let joined = match self.deadline {
            Some(deadline) => match tokio::time::timeout(deadline, handle).await {
                Ok(joined) => joined,
                Err(_) => {
                    log_warn!(
                        "{} job for '{}' exceeded deadline of {:?}",
                        kind,
                        target,
                        deadline
                    );
                    return Err(AppError::JobFailed(format!(
                        "{} job for '{}' exceeded deadline of {:?}",
                        kind, target, deadline
                    )));
                }
            },
            None => handle.await,
        };

        let outcome = joined.map_err(|e| {
            log_error!("{} job for '{}' panicked: {}", kind, target, e);
            AppError::JobFailed(format!("{} job for '{}' panicked: {}", kind, target, e))
        })?;

        outcome.map_err(|e| {
            AppError::JobFailed(format!("{} job for '{}' failed: {}", kind, target, e))
        })
    }

    /// Thread-blocking variant for synchronous call sites; requires the
    /// multi-thread runtime since the worker thread parks until completion
    pub fn run_blocking(&self, target: &str) -> AppResult<JobReport> {
        let handle = tokio::runtime::Handle::current();
        tokio::task::block_in_place(|| handle.block_on(self.run(target)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::jobs::domain::entities::JobKind;
    use async_trait::async_trait;
    use std::time::Instant;

    struct SlowCollector {
        delay: Duration,
    }

    #[async_trait]
    impl Collector for SlowCollector {
        fn kind(&self) -> JobKind {
            JobKind::MangaIngest
        }

        async fn execute(&self, target: &str) -> AppResult<JobReport> {
            tokio::time::sleep(self.delay).await;
            Ok(JobReport {
                kind: JobKind::MangaIngest,
                target: target.to_string(),
                work_id: None,
                items_ingested: 1,
                detail: "done".to_string(),
            })
        }
    }

    struct FailingCollector;

    #[async_trait]
    impl Collector for FailingCollector {
        fn kind(&self) -> JobKind {
            JobKind::MangaIngest
        }

        async fn execute(&self, _target: &str) -> AppResult<JobReport> {
            Err(AppError::ExternalServiceError("feed unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_run_waits_for_collector_completion() {
        let delay = Duration::from_millis(100);
        let runner = JobRunner::new(Arc::new(SlowCollector { delay }));

        let start = Instant::now();
        let report = runner.run("One Piece").await.unwrap();

        assert!(start.elapsed() >= delay, "run returned before completion");
        assert_eq!(report.target, "One Piece");
        assert_eq!(report.items_ingested, 1);
    }

    #[tokio::test]
    async fn test_collector_failure_surfaces_as_job_failed() {
        let runner = JobRunner::new(Arc::new(FailingCollector));
        let err = runner.run("One Piece").await.unwrap_err();

        match err {
            AppError::JobFailed(msg) => {
                assert!(msg.contains("One Piece"));
                assert!(msg.contains("feed unavailable"));
            }
            other => panic!("expected JobFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_deadline_expiry_fails_the_run() {
        let runner = JobRunner::with_deadline(
            Arc::new(SlowCollector {
                delay: Duration::from_secs(5),
            }),
            Duration::from_millis(50),
        );

        let start = Instant::now();
        let err = runner.run("One Piece").await.unwrap_err();

        assert!(matches!(err, AppError::JobFailed(_)));
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_run_blocking_bridges_to_sync_callers() {
        let runner = JobRunner::new(Arc::new(SlowCollector {
            delay: Duration::from_millis(20),
        }));

        let report = runner.run_blocking("Naruto").unwrap();
        assert_eq!(report.target, "Naruto");
    }
}
