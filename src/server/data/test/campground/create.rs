use super::*;

/// Tests creating a campground with images.
///
/// Verifies the row, slug, coordinates and image positions are stored.
///
/// Expected: Ok with campground and two ordered images
#[tokio::test]
async fn creates_campground_with_images() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = CampgroundRepository::new(db);
    let campground = repo
        .create(
            CreateCampgroundParams {
                fields: fields("Red Rock"),
                geometry: GeoPoint::new(-109.55, 38.57),
                author_id: user.id,
                images: vec![image("outdoorsy/a"), image("outdoorsy/b")],
            },
            "red-rock".to_string(),
        )
        .await?;

    assert_eq!(campground.slug, "red-rock");
    assert_eq!(campground.author_id, user.id);
    assert_eq!(campground.geometry, GeoPoint::new(-109.55, 38.57));
    assert_eq!(campground.images.len(), 2);
    assert_eq!(campground.images[0].filename, "outdoorsy/a");
    assert_eq!(campground.images[1].position, 1);

    let count = CampgroundImage::find()
        .filter(entity::campground_image::Column::CampgroundId.eq(campground.id))
        .count(db)
        .await?;
    assert_eq!(count, 2);

    Ok(())
}

/// Tests that a duplicate slug is rejected by the unique index.
///
/// Expected: Err on second insert with same slug
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::campground::CampgroundFactory::new(db, user.id)
        .slug("taken")
        .build()
        .await?;

    let repo = CampgroundRepository::new(db);
    let result = repo
        .create(
            CreateCampgroundParams {
                fields: fields("Taken"),
                geometry: GeoPoint::new(0.0, 0.0),
                author_id: user.id,
                images: vec![],
            },
            "taken".to_string(),
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
