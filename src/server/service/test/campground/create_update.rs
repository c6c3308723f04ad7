use super::*;

/// Tests that campgrounds with the same title receive distinct slugs.
///
/// Expected: second slug carries a `-2` suffix
#[tokio::test]
async fn create_generates_unique_slugs() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = Cache::new(false);

    let user = factory::user::create_user(db).await?;
    let service = CampgroundService::new(db, &cache);

    let mut created = Vec::new();
    for _ in 0..2 {
        created.push(
            service
                .create(CreateCampgroundParams {
                    fields: fields("Pine Hollow!"),
                    geometry: GeoPoint::new(-121.3, 44.05),
                    author_id: user.id,
                    images: vec![],
                })
                .await?,
        );
    }

    assert_eq!(created[0].slug, "pine-hollow");
    assert_eq!(created[1].slug, "pine-hollow-2");

    Ok(())
}

/// Tests titles whose slug would collide with a fixed route or a numeric id.
///
/// Expected: reserved candidates skipped, leaving `-2` suffixed slugs
#[tokio::test]
async fn unique_slug_skips_reserved_segments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = Cache::new(false);
    let service = CampgroundService::new(db, &cache);

    assert_eq!(service.unique_slug("Nearby", None).await?, "nearby-2");
    assert_eq!(service.unique_slug("Favorites!", None).await?, "favorites-2");
    assert_eq!(service.unique_slug("1999", None).await?, "1999-2");
    assert_eq!(service.unique_slug("Nearby Lake", None).await?, "nearby-lake");

    Ok(())
}

/// Tests that an unchanged title keeps the slug and a new title regenerates it.
///
/// Expected: slug kept on first update, replaced on second
#[tokio::test]
async fn update_regenerates_slug_only_on_title_change() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = Cache::new(false);

    let user = factory::user::create_user(db).await?;
    let campground = factory::campground::CampgroundFactory::new(db, user.id)
        .title("Pine Hollow")
        .slug("pine-hollow")
        .build()
        .await?;
    let service = CampgroundService::new(db, &cache);

    let update = |title: &str| UpdateCampgroundParams {
        id: campground.id,
        fields: fields(title),
        geometry: None,
        new_images: vec![],
        delete_images: vec![],
    };

    let kept = service.update(update("Pine Hollow")).await?.unwrap();
    assert_eq!(kept.slug, "pine-hollow");
    assert_eq!(kept.price, 25.0);

    let renamed = service.update(update("Cedar Flats")).await?.unwrap();
    assert_eq!(renamed.slug, "cedar-flats");

    Ok(())
}

/// Tests updating a missing campground.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_missing_returns_none() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = Cache::new(false);

    let result = CampgroundService::new(db, &cache)
        .update(UpdateCampgroundParams {
            id: 12,
            fields: fields("Ghost Camp"),
            geometry: None,
            new_images: vec![],
            delete_images: vec![],
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that writes invalidate cached index pages.
///
/// Expected: index total reflects a campground created after the first read
#[tokio::test]
async fn create_clears_cached_index() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = Cache::new(true);

    let user = factory::user::create_user(db).await?;
    let service = CampgroundService::new(db, &cache);

    assert_eq!(service.get_index(index_query(1, 20)).await?.total, 0);

    service
        .create(CreateCampgroundParams {
            fields: fields("Fresh Camp"),
            geometry: GeoPoint::new(0.0, 0.0),
            author_id: user.id,
            images: vec![],
        })
        .await?;

    assert_eq!(service.get_index(index_query(1, 20)).await?.total, 1);

    Ok(())
}

/// Tests deleting a campground and deleting it again.
///
/// Expected: true then false
#[tokio::test]
async fn delete_reports_whether_removed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = Cache::new(false);

    let (_, campground) = factory::helpers::create_campground_with_author(db).await?;
    let service = CampgroundService::new(db, &cache);

    assert!(service.delete(campground.id).await?);
    assert!(!service.delete(campground.id).await?);
    assert!(service.get_by_id(campground.id).await?.is_none());

    Ok(())
}
