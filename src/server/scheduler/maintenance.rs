use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::{cache::Cache, maintenance::MaintenanceService},
};

/// Daily at 03:00 UTC.
const MAINTENANCE_SCHEDULE: &str = "0 0 3 * * *";

/// Starts the data maintenance scheduler
///
/// Once a day the job checks for reviews and campgrounds that reference missing
/// rows, logs what it finds and deletes the orphaned reviews.
///
/// # Arguments
/// - `db`: Database connection
/// - `cache`: Response cache, cleared when slugs are backfilled
pub async fn start_scheduler(db: DatabaseConnection, cache: Cache) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(MAINTENANCE_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();
        let cache = cache.clone();

        Box::pin(async move {
            if let Err(e) = MaintenanceService::new(&db, &cache).run().await {
                tracing::error!("Error running data maintenance: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Maintenance scheduler started");

    Ok(())
}

/// Runs the startup pass: slug backfill followed by an integrity check.
///
/// Failures are logged; the server starts regardless.
pub async fn run_on_startup(db: &DatabaseConnection, cache: &Cache) {
    let service = MaintenanceService::new(db, cache);

    match service.backfill_slugs().await {
        Ok(0) => {}
        Ok(count) => tracing::info!("Backfilled slugs for {} campground(s)", count),
        Err(e) => tracing::error!("Slug backfill failed: {}", e),
    }

    if let Err(e) = service.run().await {
        tracing::error!("Startup integrity check failed: {}", e);
    }
}
