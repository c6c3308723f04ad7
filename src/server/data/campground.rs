use chrono::Utc;
use sea_orm::{
    sea_query::LikeExpr,
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
    TransactionTrait,
};
use std::collections::HashMap;

use crate::server::model::{
    campground::{
        Campground, CampgroundFilter, CreateCampgroundParams, NewImage, SitemapEntry,
        UpdateCampgroundParams,
    },
    geo::BoundingBox,
};

pub struct CampgroundRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CampgroundRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a campground and its images in one transaction.
    ///
    /// # Arguments
    /// - `params` - Validated fields, geocoded position, author and uploaded images
    /// - `slug` - Unique slug, see `CampgroundService::unique_slug`
    ///
    /// # Returns
    /// - `Ok(Campground)` - Created campground with images
    /// - `Err(DbErr)` - Insert failed, e.g. slug collision or missing author
    pub async fn create(
        &self,
        params: CreateCampgroundParams,
        slug: String,
    ) -> Result<Campground, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let campground = entity::campground::ActiveModel {
            slug: ActiveValue::Set(Some(slug)),
            title: ActiveValue::Set(params.fields.title),
            price: ActiveValue::Set(params.fields.price),
            description: ActiveValue::Set(params.fields.description),
            location: ActiveValue::Set(params.fields.location),
            longitude: ActiveValue::Set(params.geometry.longitude),
            latitude: ActiveValue::Set(params.geometry.latitude),
            author_id: ActiveValue::Set(params.author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let images = insert_images(&txn, campground.id, 0, params.images).await?;

        txn.commit().await?;

        Ok(Campground::from_entity(campground, images))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Campground>, DbErr> {
        let Some(campground) = entity::prelude::Campground::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_images(vec![campground]).await?.pop())
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Campground>, DbErr> {
        let Some(campground) = entity::prelude::Campground::find()
            .filter(entity::campground::Column::Slug.eq(slug))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_images(vec![campground]).await?.pop())
    }

    /// Gets the owning user id without loading images.
    ///
    /// # Returns
    /// - `Ok(Some(author_id))` - Campground exists
    /// - `Ok(None)` - No campground with that id
    pub async fn get_author_id(&self, id: i32) -> Result<Option<i32>, DbErr> {
        entity::prelude::Campground::find_by_id(id)
            .select_only()
            .column(entity::campground::Column::AuthorId)
            .into_tuple::<i32>()
            .one(self.db)
            .await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(self.get_author_id(id).await?.is_some())
    }

    /// Checks whether a slug is taken by any campground other than `exclude_id`.
    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Campground::find()
            .filter(entity::campground::Column::Slug.eq(slug));

        if let Some(id) = exclude_id {
            query = query.filter(entity::campground::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets a page of campgrounds matching `filter`, newest first.
    ///
    /// # Arguments
    /// - `filter` - Text and price filters
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Page size
    ///
    /// # Returns
    /// - `Ok((campgrounds, total))` - Page of campgrounds and total matching count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        filter: &CampgroundFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Campground>, u64), DbErr> {
        let paginator = newest_first(apply_filter(entity::prelude::Campground::find(), filter))
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        if page.saturating_mul(per_page) >= total {
            return Ok((Vec::new(), total));
        }
        let campgrounds = paginator.fetch_page(page).await?;

        Ok((self.with_images(campgrounds).await?, total))
    }

    /// Gets every campground matching `filter` inside `bounds`, newest first.
    ///
    /// The bounding box is a prefilter; callers apply the exact distance check.
    pub async fn find_in_bounds(
        &self,
        filter: &CampgroundFilter,
        bounds: BoundingBox,
    ) -> Result<Vec<Campground>, DbErr> {
        let campgrounds = newest_first(apply_filter(entity::prelude::Campground::find(), filter))
            .filter(entity::campground::Column::Latitude.between(bounds.min_lat, bounds.max_lat))
            .filter(entity::campground::Column::Longitude.between(bounds.min_lng, bounds.max_lng))
            .all(self.db)
            .await?;

        self.with_images(campgrounds).await
    }

    /// Gets campgrounds by id, preserving the order of `ids` and skipping missing ones.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Campground>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let campgrounds = entity::prelude::Campground::find()
            .filter(entity::campground::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        let mut by_id: HashMap<i32, Campground> = self
            .with_images(campgrounds)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
    }

    /// Replaces a campground's fields and adjusts its images in one transaction.
    ///
    /// New images are appended after the highest existing position. Images listed in
    /// `delete_images` are detached by filename.
    ///
    /// # Returns
    /// - `Ok(Some(Campground))` - Updated campground
    /// - `Ok(None)` - No campground with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        params: UpdateCampgroundParams,
        slug: String,
    ) -> Result<Option<Campground>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Campground::find_by_id(params.id)
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        let mut campground: entity::campground::ActiveModel = existing.into();
        campground.slug = ActiveValue::Set(Some(slug));
        campground.title = ActiveValue::Set(params.fields.title);
        campground.price = ActiveValue::Set(params.fields.price);
        campground.description = ActiveValue::Set(params.fields.description);
        campground.location = ActiveValue::Set(params.fields.location);
        if let Some(geometry) = params.geometry {
            campground.longitude = ActiveValue::Set(geometry.longitude);
            campground.latitude = ActiveValue::Set(geometry.latitude);
        }
        campground.updated_at = ActiveValue::Set(Utc::now());
        let campground = campground.update(&txn).await?;

        if !params.delete_images.is_empty() {
            entity::prelude::CampgroundImage::delete_many()
                .filter(entity::campground_image::Column::CampgroundId.eq(params.id))
                .filter(entity::campground_image::Column::Filename.is_in(params.delete_images))
                .exec(&txn)
                .await?;
        }

        let next_position = entity::prelude::CampgroundImage::find()
            .filter(entity::campground_image::Column::CampgroundId.eq(params.id))
            .order_by_desc(entity::campground_image::Column::Position)
            .one(&txn)
            .await?
            .map(|image| image.position + 1)
            .unwrap_or(0);
        insert_images(&txn, params.id, next_position, params.new_images).await?;

        let images = entity::prelude::CampgroundImage::find()
            .filter(entity::campground_image::Column::CampgroundId.eq(params.id))
            .all(&txn)
            .await?;

        txn.commit().await?;

        Ok(Some(Campground::from_entity(campground, images)))
    }

    /// Deletes a campground together with its reviews, images and favorite references.
    ///
    /// Dependent rows are removed explicitly so the cascade holds even on connections
    /// where SQLite foreign key enforcement is off.
    ///
    /// # Returns
    /// - `Ok(true)` - Campground deleted
    /// - `Ok(false)` - No campground with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Review::delete_many()
            .filter(entity::review::Column::CampgroundId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::CampgroundImage::delete_many()
            .filter(entity::campground_image::Column::CampgroundId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::UserFavorite::delete_many()
            .filter(entity::user_favorite::Column::CampgroundId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Campground::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Slug and last modification time of every campground, most recently updated first.
    pub async fn get_sitemap_entries(&self) -> Result<Vec<SitemapEntry>, DbErr> {
        let rows = entity::prelude::Campground::find()
            .select_only()
            .column(entity::campground::Column::Slug)
            .column(entity::campground::Column::UpdatedAt)
            .filter(entity::campground::Column::Slug.is_not_null())
            .order_by_desc(entity::campground::Column::UpdatedAt)
            .order_by_desc(entity::campground::Column::Id)
            .into_tuple::<(String, chrono::DateTime<Utc>)>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(slug, updated_at)| SitemapEntry { slug, updated_at })
            .collect())
    }

    /// Loads images for a batch of campground rows with a single query.
    async fn with_images(
        &self,
        campgrounds: Vec<entity::campground::Model>,
    ) -> Result<Vec<Campground>, DbErr> {
        if campgrounds.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = campgrounds.iter().map(|c| c.id).collect();
        let mut images: HashMap<i32, Vec<entity::campground_image::Model>> = HashMap::new();
        for image in entity::prelude::CampgroundImage::find()
            .filter(entity::campground_image::Column::CampgroundId.is_in(ids))
            .all(self.db)
            .await?
        {
            images.entry(image.campground_id).or_default().push(image);
        }

        Ok(campgrounds
            .into_iter()
            .map(|campground| {
                let images = images.remove(&campground.id).unwrap_or_default();
                Campground::from_entity(campground, images)
            })
            .collect())
    }
}

/// Inserts images starting at `first_position`, returning the created rows.
async fn insert_images<C: ConnectionTrait>(
    db: &C,
    campground_id: i32,
    first_position: i32,
    images: Vec<NewImage>,
) -> Result<Vec<entity::campground_image::Model>, DbErr> {
    let mut created = Vec::with_capacity(images.len());

    for (offset, image) in images.into_iter().enumerate() {
        let model = entity::campground_image::ActiveModel {
            campground_id: ActiveValue::Set(campground_id),
            url: ActiveValue::Set(image.url),
            filename: ActiveValue::Set(image.filename),
            alt: ActiveValue::Set(image.alt),
            position: ActiveValue::Set(first_position + offset as i32),
            ..Default::default()
        }
        .insert(db)
        .await?;
        created.push(model);
    }

    Ok(created)
}

fn newest_first(
    query: Select<entity::prelude::Campground>,
) -> Select<entity::prelude::Campground> {
    query
        .order_by_desc(entity::campground::Column::CreatedAt)
        .order_by_desc(entity::campground::Column::Id)
}

/// Applies text and price filters.
///
/// Terms are matched literally: `%`, `_` and `\` are escaped before building the
/// LIKE pattern. SQLite's LIKE is case-insensitive for ASCII.
fn apply_filter(
    mut query: Select<entity::prelude::Campground>,
    filter: &CampgroundFilter,
) -> Select<entity::prelude::Campground> {
    if !filter.terms.is_empty() {
        let mut any = Condition::any();
        for term in &filter.terms {
            let pattern = format!("%{}%", escape_like(term));
            for column in [
                entity::campground::Column::Title,
                entity::campground::Column::Description,
                entity::campground::Column::Location,
            ] {
                any = any.add(column.like(LikeExpr::new(pattern.clone()).escape('\\')));
            }
        }
        query = query.filter(any);
    }

    if let Some(min_price) = filter.min_price {
        query = query.filter(entity::campground::Column::Price.gte(min_price));
    }
    if let Some(max_price) = filter.max_price {
        query = query.filter(entity::campground::Column::Price.lte(max_price));
    }

    query
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
