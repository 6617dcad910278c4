/// Request/response DTOs for the manga application services
use crate::modules::manga::domain::entities::MangaStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMangaRequest {
    pub title: String,
    pub description: Option<String>,
    pub size: Option<i32>,
    pub creation_date: Option<NaiveDate>,
    pub closing_date: Option<NaiveDate>,
    pub status: MangaStatus,
    pub gender: Option<String>,
    pub author: Option<String>,
    pub image: Option<String>,
}

/// Patch-style update: every field is optional, only `Some` values are
/// applied to the loaded record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMangaRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub size: Option<i32>,
    pub creation_date: Option<NaiveDate>,
    pub closing_date: Option<NaiveDate>,
    pub status: Option<MangaStatus>,
    pub gender: Option<String>,
    pub author: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChapterRequest {
    pub manga_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub number_pages: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateMangaRequest {
    pub manga_id: Uuid,
    pub user_id: Uuid,
    pub signature_date: Option<NaiveDate>,
    pub status: Option<MangaStatus>,
    pub score: Option<i32>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRatingRequest {
    pub status: Option<MangaStatus>,
    pub score: Option<i32>,
    pub comment: Option<String>,
}

/// A (title, image URL) pair from the featured-covers table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedCover {
    pub title: String,
    pub image_url: String,
}

/// Apply a non-empty override to a single field of a loaded record.
///
/// `None` leaves the stored value untouched.
pub fn apply_field<T>(value: Option<T>, slot: &mut T) {
    if let Some(v) = value {
        *slot = v;
    }
}

/// Same as [`apply_field`] but for fields that are themselves optional.
pub fn apply_optional_field<T>(value: Option<T>, slot: &mut Option<T>) {
    if let Some(v) = value {
        *slot = Some(v);
    }
}
