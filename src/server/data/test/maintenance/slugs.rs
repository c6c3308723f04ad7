use super::*;

/// Tests finding campgrounds without a slug and assigning one.
///
/// Expected: Ok with the slugless campground listed before and absent after
#[tokio::test]
async fn finds_and_sets_missing_slugs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let slugless = factory::campground::CampgroundFactory::new(db, user.id)
        .title("Quiet Cove")
        .without_slug()
        .build()
        .await?;
    factory::campground::create_campground(db, user.id).await?;

    let repo = MaintenanceRepository::new(db);

    let missing = repo.campgrounds_without_slug().await?;
    assert_eq!(missing, vec![(slugless.id, "Quiet Cove".to_string())]);

    repo.set_slug(slugless.id, "quiet-cove".to_string()).await?;

    assert!(repo.campgrounds_without_slug().await?.is_empty());
    let stored = Campground::find_by_id(slugless.id).one(db).await?.unwrap();
    assert_eq!(stored.slug.as_deref(), Some("quiet-cove"));

    Ok(())
}
