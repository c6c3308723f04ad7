//! Data integrity checks and repairs run by the scheduler and at startup.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::maintenance::MaintenanceRepository,
    error::AppError,
    service::{
        cache::Cache,
        campground::{CampgroundService, INDEX_CACHE_PREFIX},
    },
};

/// Number of example ids included in each log line.
const EXAMPLE_IDS: usize = 10;

/// Rows violating referential or geometry invariants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrphanReport {
    pub reviews_missing_author: Vec<i32>,
    pub reviews_missing_campground: Vec<i32>,
    pub campgrounds_missing_author: Vec<i32>,
    pub campgrounds_with_invalid_geometry: Vec<i32>,
}

impl OrphanReport {
    pub fn is_clean(&self) -> bool {
        self.reviews_missing_author.is_empty()
            && self.reviews_missing_campground.is_empty()
            && self.campgrounds_missing_author.is_empty()
            && self.campgrounds_with_invalid_geometry.is_empty()
    }

    /// Logs counts, with example ids for every non-empty category.
    pub fn log(&self) {
        if self.is_clean() {
            tracing::info!("Orphan check passed");
            return;
        }

        for (label, ids) in [
            ("Reviews with missing author", &self.reviews_missing_author),
            ("Reviews with missing campground", &self.reviews_missing_campground),
            ("Campgrounds with missing author", &self.campgrounds_missing_author),
            ("Campgrounds with invalid geometry", &self.campgrounds_with_invalid_geometry),
        ] {
            if ids.is_empty() {
                continue;
            }
            let examples: Vec<i32> = ids.iter().take(EXAMPLE_IDS).copied().collect();
            tracing::warn!("{}: {} (e.g. {:?})", label, ids.len(), examples);
        }
    }
}

pub struct MaintenanceService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a Cache,
}

impl<'a> MaintenanceService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a Cache) -> Self {
        Self { db, cache }
    }

    pub async fn check_orphans(&self) -> Result<OrphanReport, AppError> {
        let repo = MaintenanceRepository::new(self.db);

        Ok(OrphanReport {
            reviews_missing_author: repo.reviews_missing_author().await?,
            reviews_missing_campground: repo.reviews_missing_campground().await?,
            campgrounds_missing_author: repo.campgrounds_missing_author().await?,
            campgrounds_with_invalid_geometry: repo.campgrounds_with_invalid_geometry().await?,
        })
    }

    /// Deletes reviews whose author or campground is gone.
    ///
    /// Campgrounds are only reported, never removed automatically.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of reviews deleted
    pub async fn cleanup_orphans(&self, report: &OrphanReport) -> Result<u64, AppError> {
        let mut ids: Vec<i32> = report
            .reviews_missing_author
            .iter()
            .chain(&report.reviews_missing_campground)
            .copied()
            .collect();
        ids.sort_unstable();
        ids.dedup();

        let deleted = MaintenanceRepository::new(self.db)
            .delete_reviews(ids)
            .await?;

        if deleted > 0 {
            tracing::info!("Deleted {} orphaned review(s)", deleted);
        }

        Ok(deleted)
    }

    /// Gives every campground without a slug a unique one.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of campgrounds updated
    pub async fn backfill_slugs(&self) -> Result<usize, AppError> {
        let repo = MaintenanceRepository::new(self.db);
        let campground_service = CampgroundService::new(self.db, self.cache);

        let missing = repo.campgrounds_without_slug().await?;
        for (id, title) in &missing {
            let slug = campground_service.unique_slug(title, Some(*id)).await?;
            tracing::info!("Assigned slug {} to campground {}", slug, id);
            repo.set_slug(*id, slug).await?;
        }

        if !missing.is_empty() {
            self.cache.clear_prefix(INDEX_CACHE_PREFIX).await;
        }

        Ok(missing.len())
    }

    /// Checks integrity, logs the report and removes orphaned reviews.
    pub async fn run(&self) -> Result<OrphanReport, AppError> {
        let report = self.check_orphans().await?;
        report.log();
        self.cleanup_orphans(&report).await?;

        Ok(report)
    }
}
