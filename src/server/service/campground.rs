use sea_orm::DatabaseConnection;
use std::time::Duration;

use crate::server::{
    data::{campground::CampgroundRepository, user::UserRepository},
    error::AppError,
    model::{
        campground::{
            Campground, CampgroundDetail, CampgroundLookup, CreateCampgroundParams, IndexPage,
            IndexQuery, NearbyCampground, NearbyPage, NearbyQuery, NearbySort, SitemapEntry,
            UpdateCampgroundParams,
        },
        user::User,
    },
    service::{cache::Cache, review::ReviewService},
    util::{
        geo::{bounding_box, distance_km},
        slug::{candidate, is_reserved, slugify},
    },
};

/// Prefix shared by every cached index page; cleared on any campground write.
pub const INDEX_CACHE_PREFIX: &str = "cg:index:";

const INDEX_CACHE_TTL: Duration = Duration::from_secs(60);

pub const REVIEWS_PER_PAGE: u64 = 5;

pub const NEARBY_PAGE_SIZE: u64 = 12;

pub struct CampgroundService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a Cache,
}

impl<'a> CampgroundService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a Cache) -> Self {
        Self { db, cache }
    }

    /// Creates a campground with a unique slug derived from its title.
    pub async fn create(&self, params: CreateCampgroundParams) -> Result<Campground, AppError> {
        let slug = self.unique_slug(&params.fields.title, None).await?;

        let campground = CampgroundRepository::new(self.db)
            .create(params, slug)
            .await?;

        self.cache.clear_prefix(INDEX_CACHE_PREFIX).await;
        tracing::info!(
            "Created campground {} ({}) for user {}",
            campground.id,
            campground.slug,
            campground.author_id
        );

        Ok(campground)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Campground>, AppError> {
        Ok(CampgroundRepository::new(self.db).find_by_id(id).await?)
    }

    /// Replaces a campground's fields and images.
    ///
    /// The slug is regenerated only when the title changed, or when the row has
    /// none yet.
    ///
    /// # Returns
    /// - `Ok(Some(Campground))` - Updated campground
    /// - `Ok(None)` - Campground does not exist
    pub async fn update(
        &self,
        params: UpdateCampgroundParams,
    ) -> Result<Option<Campground>, AppError> {
        let repo = CampgroundRepository::new(self.db);

        let Some(existing) = repo.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let slug = if existing.title != params.fields.title || existing.slug.is_empty() {
            self.unique_slug(&params.fields.title, Some(existing.id))
                .await?
        } else {
            existing.slug
        };

        let updated = repo.update(params, slug).await?;
        self.cache.clear_prefix(INDEX_CACHE_PREFIX).await;

        Ok(updated)
    }

    /// Deletes a campground with its reviews, images and favorite references.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = CampgroundRepository::new(self.db).delete(id).await?;

        if deleted {
            self.cache.clear_prefix(INDEX_CACHE_PREFIX).await;
            tracing::info!("Deleted campground {}", id);
        }

        Ok(deleted)
    }

    /// Gets one page of the index listing.
    ///
    /// Without a geo filter the database paginates. With one, the bounding box
    /// candidates are narrowed to the exact great-circle radius and paginated in
    /// memory, keeping newest-first order. Results are cached per query.
    pub async fn get_index(&self, query: IndexQuery) -> Result<IndexPage, AppError> {
        let key = query.cache_key();

        self.cache
            .get_or_set(&key, INDEX_CACHE_TTL, || self.load_index(query))
            .await
    }

    async fn load_index(&self, query: IndexQuery) -> Result<IndexPage, AppError> {
        let repo = CampgroundRepository::new(self.db);
        let page = query.page.max(1);
        let limit = query.limit.max(1);

        let (campgrounds, total) = match query.geo {
            None => {
                repo.get_paginated(&query.filter, page - 1, limit)
                    .await?
            }
            Some(geo) => {
                let within: Vec<Campground> = repo
                    .find_in_bounds(&query.filter, bounding_box(geo.center, geo.radius_km))
                    .await?
                    .into_iter()
                    .filter(|c| distance_km(geo.center, c.geometry) <= geo.radius_km)
                    .collect();
                let total = within.len() as u64;

                let campgrounds = within
                    .into_iter()
                    .skip(page_offset(page, limit))
                    .take(limit as usize)
                    .collect();

                (campgrounds, total)
            }
        };

        Ok(IndexPage {
            campgrounds,
            total,
            total_pages: total.div_ceil(limit),
        })
    }

    /// Finds campgrounds within the query radius, with distances in meters.
    ///
    /// Always reports at least one page, even with no results.
    pub async fn get_nearby(&self, query: NearbyQuery) -> Result<NearbyPage, AppError> {
        let center = query.geo.center;
        let radius_km = query.geo.radius_km;

        let mut matches: Vec<NearbyCampground> = CampgroundRepository::new(self.db)
            .find_in_bounds(&query.filter, bounding_box(center, radius_km))
            .await?
            .into_iter()
            .filter_map(|campground| {
                let distance = distance_km(center, campground.geometry);
                (distance <= radius_km).then(|| NearbyCampground {
                    campground,
                    distance_m: distance * 1000.0,
                })
            })
            .collect();

        match query.sort {
            NearbySort::Distance => {
                matches.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));
            }
            NearbySort::PriceAsc => matches.sort_by(|a, b| {
                a.campground
                    .price
                    .total_cmp(&b.campground.price)
                    .then(a.distance_m.total_cmp(&b.distance_m))
            }),
            NearbySort::PriceDesc => matches.sort_by(|a, b| {
                b.campground
                    .price
                    .total_cmp(&a.campground.price)
                    .then(a.distance_m.total_cmp(&b.distance_m))
            }),
        }

        let total = matches.len() as u64;
        let page = query.page.max(1);
        let campgrounds = matches
            .into_iter()
            .skip(page_offset(page, NEARBY_PAGE_SIZE))
            .take(NEARBY_PAGE_SIZE as usize)
            .collect();

        Ok(NearbyPage {
            campgrounds,
            total,
            total_pages: total.div_ceil(NEARBY_PAGE_SIZE).max(1),
        })
    }

    /// Resolves a detail URL segment.
    ///
    /// The segment is tried as a slug first. A numeric segment that is not a slug
    /// is tried as an id and resolves to `Moved` so the client can follow the
    /// canonical slug URL; rows without a slug are served directly.
    ///
    /// # Arguments
    /// - `id_or_slug` - Path segment
    /// - `reviews_page` - One-indexed page of reviews to include
    pub async fn get_detail(
        &self,
        id_or_slug: &str,
        reviews_page: u64,
    ) -> Result<CampgroundLookup, AppError> {
        let repo = CampgroundRepository::new(self.db);

        let campground = match repo.find_by_slug(id_or_slug).await? {
            Some(campground) => campground,
            None => {
                let Ok(id) = id_or_slug.parse::<i32>() else {
                    return Ok(CampgroundLookup::NotFound);
                };
                match repo.find_by_id(id).await? {
                    Some(campground) if !campground.slug.is_empty() => {
                        return Ok(CampgroundLookup::Moved(campground));
                    }
                    Some(campground) => campground,
                    None => return Ok(CampgroundLookup::NotFound),
                }
            }
        };

        let author = UserRepository::new(self.db)
            .find_by_id(campground.author_id)
            .await?
            .map(User::from_entity);

        let reviews = ReviewService::new(self.db)
            .get_page(campground.id, reviews_page, REVIEWS_PER_PAGE)
            .await?;

        Ok(CampgroundLookup::Found(Box::new(CampgroundDetail {
            campground,
            author,
            reviews,
        })))
    }

    /// Slugifies `title` and appends `-2`, `-3`... until no other campground uses it.
    ///
    /// Candidates that another route would shadow are skipped the same way.
    pub async fn unique_slug(&self, title: &str, exclude_id: Option<i32>) -> Result<String, AppError> {
        let repo = CampgroundRepository::new(self.db);
        let base = slugify(title);

        let mut attempt = 1;
        loop {
            let slug = candidate(&base, attempt);
            if !is_reserved(&slug) && !repo.slug_exists(&slug, exclude_id).await? {
                return Ok(slug);
            }
            attempt += 1;
        }
    }

    pub async fn get_sitemap_entries(&self) -> Result<Vec<SitemapEntry>, AppError> {
        Ok(CampgroundRepository::new(self.db)
            .get_sitemap_entries()
            .await?)
    }
}

/// Items preceding one-indexed `page`, saturating for pages far past the end.
fn page_offset(page: u64, per_page: u64) -> usize {
    usize::try_from(page.saturating_sub(1).saturating_mul(per_page)).unwrap_or(usize::MAX)
}
