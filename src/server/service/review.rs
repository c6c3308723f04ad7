use sea_orm::DatabaseConnection;

use crate::server::{
    data::{campground::CampgroundRepository, review::ReviewRepository},
    error::AppError,
    model::review::{CreateReviewParams, Review, ReviewPage},
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a review to an existing campground.
    ///
    /// # Returns
    /// - `Ok(Review)` - Created review
    /// - `Err(AppError::NotFound)` - Campground does not exist
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, AppError> {
        if !CampgroundRepository::new(self.db)
            .exists(params.campground_id)
            .await?
        {
            return Err(AppError::NotFound("Campground not found".to_string()));
        }

        let review = ReviewRepository::new(self.db).create(params).await?;

        Ok(Review::from_entity(review))
    }

    /// Gets one page of a campground's reviews, newest first.
    ///
    /// # Arguments
    /// - `campground_id` - Campground the reviews belong to
    /// - `page` - One-indexed page number
    /// - `per_page` - Page size
    pub async fn get_page(
        &self,
        campground_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<ReviewPage, AppError> {
        let page = page.max(1);

        let (reviews, total) = ReviewRepository::new(self.db)
            .get_page_for_campground(campground_id, page - 1, per_page)
            .await?;

        Ok(ReviewPage {
            reviews,
            page,
            per_page,
            total,
            total_pages: total.div_ceil(per_page.max(1)),
        })
    }

    /// Deletes a review. Ownership is checked by the caller.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(ReviewRepository::new(self.db).delete(id).await?)
    }
}
