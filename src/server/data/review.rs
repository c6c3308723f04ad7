use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::review::{CreateReviewParams, ReviewWithAuthor};

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateReviewParams) -> Result<entity::review::Model, DbErr> {
        let now = Utc::now();

        entity::review::ActiveModel {
            campground_id: ActiveValue::Set(params.campground_id),
            author_id: ActiveValue::Set(params.author_id),
            rating: ActiveValue::Set(params.rating),
            body: ActiveValue::Set(params.body),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::review::Model>, DbErr> {
        entity::prelude::Review::find_by_id(id).one(self.db).await
    }

    /// Gets one page of a campground's reviews with their authors, newest first.
    ///
    /// # Arguments
    /// - `campground_id` - Campground to list reviews for
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Page size
    ///
    /// # Returns
    /// - `Ok((reviews, total))` - Page of reviews and the total review count
    /// - `Err(DbErr)` - Database error
    pub async fn get_page_for_campground(
        &self,
        campground_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ReviewWithAuthor>, u64), DbErr> {
        let total = entity::prelude::Review::find()
            .filter(entity::review::Column::CampgroundId.eq(campground_id))
            .count(self.db)
            .await?;

        let offset = page.saturating_mul(per_page);
        if offset >= total {
            return Ok((Vec::new(), total));
        }

        let reviews = entity::prelude::Review::find()
            .filter(entity::review::Column::CampgroundId.eq(campground_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .offset(offset)
            .limit(per_page)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(review, author)| ReviewWithAuthor::from_entity(review, author))
            .collect();

        Ok((reviews, total))
    }

    /// Deletes a review.
    ///
    /// # Returns
    /// - `Ok(true)` - Review deleted
    /// - `Ok(false)` - No review with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
