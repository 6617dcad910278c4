/// Domain entities for the manga catalog
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Publication status of a manga
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MangaStatus {
    Ongoing,
    Completed,
    Hiatus,
    Cancelled,
}

impl std::fmt::Display for MangaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MangaStatus::Ongoing => write!(f, "ongoing"),
            MangaStatus::Completed => write!(f, "completed"),
            MangaStatus::Hiatus => write!(f, "hiatus"),
            MangaStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for MangaStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ongoing" => Ok(MangaStatus::Ongoing),
            "completed" => Ok(MangaStatus::Completed),
            "hiatus" => Ok(MangaStatus::Hiatus),
            "cancelled" => Ok(MangaStatus::Cancelled),
            _ => Err(format!("Invalid manga status: {}", s)),
        }
    }
}

/// A tracked manga record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manga {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Number of volumes/chapters published
    pub size: Option<i32>,
    pub creation_date: Option<NaiveDate>,
    pub closing_date: Option<NaiveDate>,
    pub status: MangaStatus,
    pub gender: Option<String>,
    pub author: Option<String>,
    pub image: Option<String>,
}

impl Manga {
    pub fn new(title: impl Into<String>, status: MangaStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            size: None,
            creation_date: None,
            closing_date: None,
            status,
            gender: None,
            author: None,
            image: None,
        }
    }
}

/// A chapter belonging to a manga
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub id: Uuid,
    pub manga_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub number_pages: Option<i32>,
}

/// A user's rating/annotation of a manga they follow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserMangaRating {
    pub id: Uuid,
    pub manga_id: Uuid,
    pub user_id: Uuid,
    pub signature_date: Option<NaiveDate>,
    pub status: Option<MangaStatus>,
    pub score: Option<i32>,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manga_status_display() {
        assert_eq!(MangaStatus::Ongoing.to_string(), "ongoing");
        assert_eq!(MangaStatus::Completed.to_string(), "completed");
        assert_eq!(MangaStatus::Hiatus.to_string(), "hiatus");
        assert_eq!(MangaStatus::Cancelled.to_string(), "cancelled");
    }

    #[test]
    fn test_manga_status_from_str() {
        assert_eq!(
            "ongoing".parse::<MangaStatus>().unwrap(),
            MangaStatus::Ongoing
        );
        assert_eq!(
            "COMPLETED".parse::<MangaStatus>().unwrap(),
            MangaStatus::Completed
        );
        assert!("unknown".parse::<MangaStatus>().is_err());
    }

    #[test]
    fn test_new_manga_gets_fresh_id() {
        let a = Manga::new("One Piece", MangaStatus::Ongoing);
        let b = Manga::new("One Piece", MangaStatus::Ongoing);
        assert_ne!(a.id, b.id);
        assert_eq!(a.title, "One Piece");
    }
}
