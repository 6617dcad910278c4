use crate::modules::jobs::domain::collector::Collector;
use crate::modules::jobs::domain::entities::JobKind;
use std::sync::Arc;

/// Process-wide catalog of collectors, built once at startup and read-only
/// afterwards. `resolve` is total over the closed kind enum; an unknown kind
/// cannot reach it.
pub struct CollectorRegistry {
    manga: Arc<dyn Collector>,
    chapter: Arc<dyn Collector>,
}

impl CollectorRegistry {
    pub fn new(manga: Arc<dyn Collector>, chapter: Arc<dyn Collector>) -> Self {
        Self { manga, chapter }
    }

    /// Every known job kind, in declaration order
    pub fn list_kinds(&self) -> Vec<JobKind> {
        JobKind::ALL.to_vec()
    }

    pub fn resolve(&self, kind: JobKind) -> Arc<dyn Collector> {
        match kind {
            JobKind::MangaIngest => Arc::clone(&self.manga),
            JobKind::ChapterIngest => Arc::clone(&self.chapter),
        }
    }
}
