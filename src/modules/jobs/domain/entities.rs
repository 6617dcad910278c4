/// Domain entities for the collector job system
use serde::{Deserialize, Serialize};

/// The closed set of collector job kinds, fixed at process start.
///
/// `ALL` is the declaration order and is what the job catalog surface
/// returns; it never changes within one process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    MangaIngest,
    ChapterIngest,
}

impl JobKind {
    pub const ALL: [JobKind; 2] = [JobKind::MangaIngest, JobKind::ChapterIngest];
}

impl std::fmt::Display for JobKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobKind::MangaIngest => write!(f, "manga_ingest"),
            JobKind::ChapterIngest => write!(f, "chapter_ingest"),
        }
    }
}

impl std::str::FromStr for JobKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manga_ingest" => Ok(JobKind::MangaIngest),
            "chapter_ingest" => Ok(JobKind::ChapterIngest),
            _ => Err(format!("Invalid job kind: {}", s)),
        }
    }
}

/// Result payload of a completed collector run. Transient, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobReport {
    pub kind: JobKind,
    pub target: String,
    /// Remote work id the collector resolved for the target, when any
    pub work_id: Option<String>,
    pub items_ingested: usize,
    pub detail: String,
}
