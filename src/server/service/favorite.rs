use sea_orm::DatabaseConnection;

use crate::server::{
    data::{campground::CampgroundRepository, favorite::FavoriteRepository},
    error::AppError,
    model::campground::{Campground, FavoriteStatus},
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds the campground to the user's favorites, or removes it if present.
    ///
    /// # Returns
    /// - `Ok(FavoriteStatus)` - What the toggle did
    /// - `Err(AppError::NotFound)` - Campground does not exist
    pub async fn toggle(&self, user_id: i32, campground_id: i32) -> Result<FavoriteStatus, AppError> {
        if !CampgroundRepository::new(self.db).exists(campground_id).await? {
            return Err(AppError::NotFound("Campground not found".to_string()));
        }

        let favorite_repo = FavoriteRepository::new(self.db);

        if favorite_repo.exists(user_id, campground_id).await? {
            favorite_repo.remove(user_id, campground_id).await?;
            return Ok(FavoriteStatus::Removed);
        }

        favorite_repo.add(user_id, campground_id).await?;

        Ok(FavoriteStatus::Added)
    }

    /// Favorite campground ids, most recently added first.
    pub async fn get_ids(&self, user_id: i32) -> Result<Vec<i32>, AppError> {
        Ok(FavoriteRepository::new(self.db)
            .get_campground_ids(user_id)
            .await?)
    }

    /// Favorite campgrounds, most recently added first.
    pub async fn list(&self, user_id: i32) -> Result<Vec<Campground>, AppError> {
        let ids = self.get_ids(user_id).await?;

        Ok(CampgroundRepository::new(self.db).get_by_ids(&ids).await?)
    }
}
