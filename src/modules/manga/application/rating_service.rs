use crate::modules::manga::application::dto::{
    apply_optional_field, RateMangaRequest, UpdateRatingRequest,
};
use crate::modules::manga::domain::entities::UserMangaRating;
use crate::modules::manga::domain::repository::{MangaRepository, UserRatingRepository};
use crate::shared::errors::{AppError, AppResult};
use std::sync::Arc;
use uuid::Uuid;

pub struct RatingService {
    rating_repo: Arc<dyn UserRatingRepository>,
    manga_repo: Arc<dyn MangaRepository>,
}

impl RatingService {
    pub fn new(
        rating_repo: Arc<dyn UserRatingRepository>,
        manga_repo: Arc<dyn MangaRepository>,
    ) -> Self {
        Self {
            rating_repo,
            manga_repo,
        }
    }

    pub async fn rate_manga(&self, request: RateMangaRequest) -> AppResult<UserMangaRating> {
        if self
            .manga_repo
            .find_by_id(&request.manga_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "No manga found with the id: {}",
                request.manga_id
            )));
        }

        let rating = UserMangaRating {
            id: Uuid::new_v4(),
            manga_id: request.manga_id,
            user_id: request.user_id,
            signature_date: request.signature_date,
            status: request.status,
            score: request.score,
            comment: request.comment,
        };

        self.rating_repo
            .save(&rating)
            .await
            .map_err(|e| AppError::CreationFailed(format!("Error creating rating: {}", e)))
    }

    /// Patch semantics: only `Some` fields overwrite the stored rating
    pub async fn update_rating(
        &self,
        id: &Uuid,
        patch: UpdateRatingRequest,
    ) -> AppResult<UserMangaRating> {
        let mut rating = self
            .rating_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No rating found with the id: {}", id)))?;

        apply_optional_field(patch.status, &mut rating.status);
        apply_optional_field(patch.score, &mut rating.score);
        apply_optional_field(patch.comment, &mut rating.comment);

        self.rating_repo.update(&rating).await
    }

    pub async fn ratings_for_user(&self, user_id: &Uuid) -> AppResult<Vec<UserMangaRating>> {
        self.rating_repo.find_by_user(user_id).await
    }

    pub async fn delete_rating(&self, id: &Uuid) -> AppResult<()> {
        self.rating_repo.delete(id).await
    }
}
