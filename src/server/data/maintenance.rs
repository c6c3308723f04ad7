use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, JoinType, QueryFilter, QuerySelect, RelationTrait,
};

/// Integrity queries used by the maintenance jobs.
///
/// Orphans only appear when rows were written with foreign key enforcement off, e.g.
/// by imports or manual edits.
pub struct MaintenanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ids of reviews whose author row is missing.
    pub async fn reviews_missing_author(&self) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::Id)
            .join(JoinType::LeftJoin, entity::review::Relation::User.def())
            .filter(entity::user::Column::Id.is_null())
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Ids of reviews whose campground row is missing.
    pub async fn reviews_missing_campground(&self) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::Id)
            .join(JoinType::LeftJoin, entity::review::Relation::Campground.def())
            .filter(entity::campground::Column::Id.is_null())
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Ids of campgrounds whose author row is missing.
    pub async fn campgrounds_missing_author(&self) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Campground::find()
            .select_only()
            .column(entity::campground::Column::Id)
            .join(JoinType::LeftJoin, entity::campground::Relation::User.def())
            .filter(entity::user::Column::Id.is_null())
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Ids of campgrounds whose coordinates are outside the valid ranges.
    pub async fn campgrounds_with_invalid_geometry(&self) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Campground::find()
            .select_only()
            .column(entity::campground::Column::Id)
            .filter(
                Condition::any()
                    .add(entity::campground::Column::Longitude.lt(-180.0))
                    .add(entity::campground::Column::Longitude.gt(180.0))
                    .add(entity::campground::Column::Latitude.lt(-90.0))
                    .add(entity::campground::Column::Latitude.gt(90.0)),
            )
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Deletes reviews by id, returning the number removed.
    pub async fn delete_reviews(&self, ids: Vec<i32>) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Review::delete_many()
            .filter(entity::review::Column::Id.is_in(ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// `(id, title)` of campgrounds stored without a slug.
    pub async fn campgrounds_without_slug(&self) -> Result<Vec<(i32, String)>, DbErr> {
        entity::prelude::Campground::find()
            .select_only()
            .column(entity::campground::Column::Id)
            .column(entity::campground::Column::Title)
            .filter(
                Condition::any()
                    .add(entity::campground::Column::Slug.is_null())
                    .add(entity::campground::Column::Slug.eq("")),
            )
            .into_tuple::<(i32, String)>()
            .all(self.db)
            .await
    }

    pub async fn set_slug(&self, id: i32, slug: String) -> Result<(), DbErr> {
        entity::campground::ActiveModel {
            id: ActiveValue::Unchanged(id),
            slug: ActiveValue::Set(Some(slug)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }
}
