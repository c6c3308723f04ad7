use super::*;

fn nearby_query(sort: NearbySort, page: u64) -> NearbyQuery {
    NearbyQuery {
        geo: GeoFilter {
            center: GeoPoint::new(0.0, 0.0),
            radius_km: 100.0,
        },
        filter: CampgroundFilter::default(),
        sort,
        page,
    }
}

/// Tests distance ordering and meter distances.
///
/// Expected: closest first, distances ascending and in meters
#[tokio::test]
async fn sorts_by_distance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = Cache::new(false);

    let user = factory::user::create_user(db).await?;
    for (title, lng) in [("Far", 0.5), ("Close", 0.1), ("Outside", 2.0)] {
        factory::campground::CampgroundFactory::new(db, user.id)
            .title(title)
            .coordinates(lng, 0.0)
            .build()
            .await?;
    }

    let page = CampgroundService::new(db, &cache)
        .get_nearby(nearby_query(NearbySort::Distance, 1))
        .await?;

    assert_eq!(page.total, 2);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.campgrounds[0].campground.title, "Close");
    assert_eq!(page.campgrounds[1].campground.title, "Far");
    // 0.1 degrees of longitude at the equator is about 11.1 km
    let distance = page.campgrounds[0].distance_m;
    assert!((11_000.0..11_300.0).contains(&distance), "distance {}", distance);

    Ok(())
}

/// Tests price ordering in both directions.
///
/// Expected: ascending and descending price order
#[tokio::test]
async fn sorts_by_price() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = Cache::new(false);

    let user = factory::user::create_user(db).await?;
    for (price, lng) in [(30.0, 0.1), (10.0, 0.3), (20.0, 0.2)] {
        factory::campground::CampgroundFactory::new(db, user.id)
            .price(price)
            .coordinates(lng, 0.0)
            .build()
            .await?;
    }

    let service = CampgroundService::new(db, &cache);

    let asc = service.get_nearby(nearby_query(NearbySort::PriceAsc, 1)).await?;
    let prices: Vec<f64> = asc.campgrounds.iter().map(|c| c.campground.price).collect();
    assert_eq!(prices, vec![10.0, 20.0, 30.0]);

    let desc = service.get_nearby(nearby_query(NearbySort::PriceDesc, 1)).await?;
    let prices: Vec<f64> = desc.campgrounds.iter().map(|c| c.campground.price).collect();
    assert_eq!(prices, vec![30.0, 20.0, 10.0]);

    Ok(())
}

/// Tests pages of twelve and at least one reported page.
///
/// Expected: 13 results give 2 pages with 1 on the second; no results give 1 page
#[tokio::test]
async fn pages_by_twelve() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = Cache::new(false);

    let service = CampgroundService::new(db, &cache);
    let empty = service.get_nearby(nearby_query(NearbySort::Distance, 1)).await?;
    assert_eq!(empty.total, 0);
    assert_eq!(empty.total_pages, 1);

    let user = factory::user::create_user(db).await?;
    for i in 0..13 {
        factory::campground::CampgroundFactory::new(db, user.id)
            .coordinates(0.01 * f64::from(i), 0.0)
            .build()
            .await?;
    }

    let second = service.get_nearby(nearby_query(NearbySort::Distance, 2)).await?;
    assert_eq!(second.total, 13);
    assert_eq!(second.total_pages, 2);
    assert_eq!(second.campgrounds.len(), 1);

    Ok(())
}

/// Tests that any of several terms matches.
///
/// Expected: campgrounds matching either term, excluding the other
#[tokio::test]
async fn matches_any_term() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = Cache::new(false);

    let user = factory::user::create_user(db).await?;
    for title in ["Lakeside", "Riverbend", "Desert Flat"] {
        factory::campground::CampgroundFactory::new(db, user.id)
            .title(title)
            .description("Sites.")
            .location("Somewhere")
            .coordinates(0.1, 0.1)
            .build()
            .await?;
    }

    let page = CampgroundService::new(db, &cache)
        .get_nearby(NearbyQuery {
            filter: CampgroundFilter {
                terms: vec!["lake".to_string(), "river".to_string()],
                ..Default::default()
            },
            ..nearby_query(NearbySort::Distance, 1)
        })
        .await?;

    assert_eq!(page.total, 2);
    assert!(page
        .campgrounds
        .iter()
        .all(|c| c.campground.title != "Desert Flat"));

    Ok(())
}
