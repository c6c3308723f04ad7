use super::*;

/// Tests page math for the index listing.
///
/// Expected: 5 campgrounds at limit 2 give 3 pages with 1 item on the last
#[tokio::test]
async fn paginates_with_total_pages() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = Cache::new(false);

    let user = factory::user::create_user(db).await?;
    for _ in 0..5 {
        factory::campground::create_campground(db, user.id).await?;
    }

    let service = CampgroundService::new(db, &cache);
    let page = service.get_index(index_query(3, 2)).await?;

    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.campgrounds.len(), 1);

    Ok(())
}

/// Tests the geo filter uses exact great-circle distance, not just the bounding box.
///
/// Expected: only the campground within 50 km of the center
#[tokio::test]
async fn geo_filter_keeps_points_within_radius() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = Cache::new(false);

    let user = factory::user::create_user(db).await?;
    let near = factory::campground::CampgroundFactory::new(db, user.id)
        .coordinates(-119.6, 37.75)
        .build()
        .await?;
    // Inside the bounding box corner but outside the circle
    factory::campground::CampgroundFactory::new(db, user.id)
        .coordinates(-119.05, 38.15)
        .build()
        .await?;
    factory::campground::CampgroundFactory::new(db, user.id)
        .coordinates(-105.0, 40.0)
        .build()
        .await?;

    let service = CampgroundService::new(db, &cache);
    let page = service
        .get_index(IndexQuery {
            geo: Some(GeoFilter {
                center: GeoPoint::new(-119.54, 37.74),
                radius_km: 50.0,
            }),
            ..index_query(1, 20)
        })
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.campgrounds[0].id, near.id);

    Ok(())
}

/// Tests that results are newest first.
///
/// Expected: campground created later comes first
#[tokio::test]
async fn orders_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = Cache::new(false);

    let user = factory::user::create_user(db).await?;
    factory::campground::CampgroundFactory::new(db, user.id)
        .title("Old")
        .created_at(Utc::now() - Duration::days(1))
        .build()
        .await?;
    factory::campground::CampgroundFactory::new(db, user.id)
        .title("New")
        .build()
        .await?;

    let page = CampgroundService::new(db, &cache)
        .get_index(index_query(1, 20))
        .await?;

    assert_eq!(page.campgrounds[0].title, "New");
    assert_eq!(page.campgrounds[1].title, "Old");

    Ok(())
}
