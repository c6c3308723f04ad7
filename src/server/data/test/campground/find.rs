use super::*;

/// Tests lookup by slug and id, including images.
///
/// Expected: Ok(Some) for both lookups with the image attached
#[tokio::test]
async fn finds_by_slug_and_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, campground) = factory::helpers::create_campground_with_author(db).await?;
    factory::campground_image::create_image(db, campground.id).await?;

    let repo = CampgroundRepository::new(db);

    let by_slug = repo.find_by_slug(campground.slug.as_deref().unwrap()).await?.unwrap();
    assert_eq!(by_slug.id, campground.id);
    assert_eq!(by_slug.images.len(), 1);

    let by_id = repo.find_by_id(campground.id).await?.unwrap();
    assert_eq!(Some(by_id.slug), campground.slug);

    Ok(())
}

/// Tests lookups for missing campgrounds.
///
/// Expected: Ok(None) for slug, id and author lookups
#[tokio::test]
async fn returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CampgroundRepository::new(db);

    assert!(repo.find_by_slug("nowhere").await?.is_none());
    assert!(repo.find_by_id(7).await?.is_none());
    assert!(repo.get_author_id(7).await?.is_none());
    assert!(!repo.exists(7).await?);

    Ok(())
}

/// Tests slug existence checks with and without an excluded id.
///
/// Expected: slug counts as taken except when excluding its own campground
#[tokio::test]
async fn slug_exists_respects_exclusion() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let campground = factory::campground::CampgroundFactory::new(db, user.id)
        .slug("lakeside")
        .build()
        .await?;

    let repo = CampgroundRepository::new(db);

    assert!(repo.slug_exists("lakeside", None).await?);
    assert!(!repo.slug_exists("lakeside", Some(campground.id)).await?);
    assert!(!repo.slug_exists("riverside", None).await?);
    assert_eq!(repo.get_author_id(campground.id).await?, Some(user.id));

    Ok(())
}
