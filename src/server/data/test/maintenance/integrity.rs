use super::*;

/// Tests that no orphans are reported for consistent data.
///
/// Expected: Ok with every integrity query empty
#[tokio::test]
async fn reports_nothing_for_consistent_data() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_review_with_dependencies(db).await?;

    let repo = MaintenanceRepository::new(db);

    assert!(repo.reviews_missing_author().await?.is_empty());
    assert!(repo.reviews_missing_campground().await?.is_empty());
    assert!(repo.campgrounds_missing_author().await?.is_empty());
    assert!(repo.campgrounds_with_invalid_geometry().await?.is_empty());

    Ok(())
}

/// Tests detecting rows left behind after their author was removed with
/// foreign key enforcement off.
///
/// Expected: Ok with the review and campground reported as missing an author
#[tokio::test]
async fn detects_missing_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, campground, review) = factory::helpers::create_review_with_dependencies(db).await?;

    db.execute_unprepared("PRAGMA foreign_keys = OFF").await?;
    User::delete_by_id(user.id).exec(db).await?;

    let repo = MaintenanceRepository::new(db);

    assert_eq!(repo.reviews_missing_author().await?, vec![review.id]);
    assert_eq!(repo.campgrounds_missing_author().await?, vec![campground.id]);
    assert!(repo.reviews_missing_campground().await?.is_empty());

    Ok(())
}

/// Tests detecting and removing reviews whose campground is gone.
///
/// Expected: Ok with the orphaned review reported then deleted
#[tokio::test]
async fn detects_and_deletes_reviews_missing_campground() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, campground, review) = factory::helpers::create_review_with_dependencies(db).await?;

    db.execute_unprepared("PRAGMA foreign_keys = OFF").await?;
    Campground::delete_by_id(campground.id).exec(db).await?;

    let repo = MaintenanceRepository::new(db);

    let orphaned = repo.reviews_missing_campground().await?;
    assert_eq!(orphaned, vec![review.id]);

    assert_eq!(repo.delete_reviews(orphaned).await?, 1);
    assert!(Review::find_by_id(review.id).one(db).await?.is_none());
    assert_eq!(repo.delete_reviews(Vec::new()).await?, 0);

    Ok(())
}

/// Tests detecting coordinates outside the valid ranges.
///
/// Expected: Ok with only the out-of-range campground
#[tokio::test]
async fn detects_invalid_geometry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::campground::CampgroundFactory::new(db, user.id)
        .coordinates(180.0, -90.0)
        .build()
        .await?;
    let broken = factory::campground::CampgroundFactory::new(db, user.id)
        .coordinates(-200.0, 10.0)
        .build()
        .await?;

    let repo = MaintenanceRepository::new(db);

    assert_eq!(repo.campgrounds_with_invalid_geometry().await?, vec![broken.id]);

    Ok(())
}
