use super::*;

/// Tests the bounding box prefilter combined with a text filter.
///
/// Expected: Ok with only the in-bounds campground matching the term
#[tokio::test]
async fn returns_campgrounds_inside_bounds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::campground::CampgroundFactory::new(db, user.id)
        .title("Inside River")
        .coordinates(-110.0, 45.0)
        .build()
        .await?;
    factory::campground::CampgroundFactory::new(db, user.id)
        .title("Inside Meadow")
        .coordinates(-110.2, 45.1)
        .build()
        .await?;
    factory::campground::CampgroundFactory::new(db, user.id)
        .title("Outside River")
        .coordinates(-100.0, 40.0)
        .build()
        .await?;

    let bounds = BoundingBox {
        min_lat: 44.0,
        max_lat: 46.0,
        min_lng: -111.0,
        max_lng: -109.0,
    };
    let filter = CampgroundFilter {
        terms: vec!["river".to_string()],
        ..Default::default()
    };

    let repo = CampgroundRepository::new(db);
    let found = repo.find_in_bounds(&filter, bounds).await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Inside River");

    Ok(())
}

/// Tests that any of several terms matches.
///
/// Expected: Ok with both campgrounds matched by different terms
#[tokio::test]
async fn matches_any_term() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    for title in ["Pine Grove", "Aspen Flat", "Birch Hollow"] {
        factory::campground::CampgroundFactory::new(db, user.id)
            .title(title)
            .description("Sites near water.")
            .location("Somewhere")
            .coordinates(10.0, 10.0)
            .build()
            .await?;
    }

    let bounds = BoundingBox {
        min_lat: 9.0,
        max_lat: 11.0,
        min_lng: 9.0,
        max_lng: 11.0,
    };
    let filter = CampgroundFilter {
        terms: vec!["pine".to_string(), "aspen".to_string()],
        ..Default::default()
    };

    let repo = CampgroundRepository::new(db);
    let found = repo.find_in_bounds(&filter, bounds).await?;

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|c| c.title != "Birch Hollow"));

    Ok(())
}
