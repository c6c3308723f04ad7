use super::*;

/// Tests replacing fields while keeping the stored geometry.
///
/// Expected: Ok(Some) with new fields, new slug and unchanged coordinates
#[tokio::test]
async fn updates_fields_and_keeps_geometry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let campground = factory::campground::CampgroundFactory::new(db, user.id)
        .coordinates(-120.0, 40.0)
        .build()
        .await?;

    let repo = CampgroundRepository::new(db);
    let updated = repo
        .update(
            UpdateCampgroundParams {
                id: campground.id,
                fields: fields("Renamed Camp"),
                geometry: None,
                new_images: vec![],
                delete_images: vec![],
            },
            "renamed-camp".to_string(),
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed Camp");
    assert_eq!(updated.slug, "renamed-camp");
    assert_eq!(updated.price, 15.0);
    assert_eq!(updated.geometry, GeoPoint::new(-120.0, 40.0));
    assert!(updated.updated_at >= campground.updated_at);

    Ok(())
}

/// Tests appending and detaching images in one update.
///
/// Expected: Ok(Some) with the kept image first and the new image after it
#[tokio::test]
async fn appends_and_removes_images() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, campground) = factory::helpers::create_campground_with_author(db).await?;
    factory::campground_image::CampgroundImageFactory::new(db, campground.id)
        .filename("outdoorsy/keep")
        .position(0)
        .build()
        .await?;
    factory::campground_image::CampgroundImageFactory::new(db, campground.id)
        .filename("outdoorsy/drop")
        .position(1)
        .build()
        .await?;

    let repo = CampgroundRepository::new(db);
    let updated = repo
        .update(
            UpdateCampgroundParams {
                id: campground.id,
                fields: fields(&campground.title),
                geometry: Some(GeoPoint::new(1.0, 2.0)),
                new_images: vec![image("outdoorsy/new")],
                delete_images: vec!["outdoorsy/drop".to_string()],
            },
            campground.slug.clone().unwrap(),
        )
        .await?
        .unwrap();

    let filenames: Vec<&str> = updated.images.iter().map(|i| i.filename.as_str()).collect();
    assert_eq!(filenames, vec!["outdoorsy/keep", "outdoorsy/new"]);
    assert_eq!(updated.images[1].position, 1);
    assert_eq!(updated.geometry, GeoPoint::new(1.0, 2.0));

    Ok(())
}

/// Tests updating a campground that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_campground() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CampgroundRepository::new(db);
    let result = repo
        .update(
            UpdateCampgroundParams {
                id: 404,
                fields: fields("Ghost"),
                geometry: None,
                new_images: vec![],
                delete_images: vec![],
            },
            "ghost".to_string(),
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
