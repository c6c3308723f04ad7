use super::*;

/// Tests that the listing is ordered newest first and paginated.
///
/// Expected: Ok with 2 items on page 0, total 3, newest first
#[tokio::test]
async fn paginates_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let now = Utc::now();
    for (days_ago, title) in [(2, "Older"), (0, "Newest"), (5, "Oldest")] {
        factory::campground::CampgroundFactory::new(db, user.id)
            .title(title)
            .created_at(now - Duration::days(days_ago))
            .build()
            .await?;
    }

    let repo = CampgroundRepository::new(db);
    let (page, total) = repo
        .get_paginated(&CampgroundFilter::default(), 0, 2)
        .await?;

    assert_eq!(total, 3);
    let titles: Vec<&str> = page.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Newest", "Older"]);

    let (last, _) = repo
        .get_paginated(&CampgroundFilter::default(), 1, 2)
        .await?;
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].title, "Oldest");

    Ok(())
}

/// Tests case-insensitive text matching over title, description and location.
///
/// Expected: Ok with the two matching campgrounds
#[tokio::test]
async fn filters_by_text_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::campground::CampgroundFactory::new(db, user.id)
        .title("Lakeview")
        .build()
        .await?;
    factory::campground::CampgroundFactory::new(db, user.id)
        .title("Forest Hideout")
        .location("Lake Tahoe, California")
        .build()
        .await?;
    factory::campground::CampgroundFactory::new(db, user.id)
        .title("Desert Flats")
        .description("Dry and sunny.")
        .location("Mojave")
        .build()
        .await?;

    let repo = CampgroundRepository::new(db);
    let filter = CampgroundFilter {
        terms: vec!["LAKE".to_string()],
        ..Default::default()
    };
    let (page, total) = repo.get_paginated(&filter, 0, 20).await?;

    assert_eq!(total, 2);
    assert!(page.iter().all(|c| c.title != "Desert Flats"));

    Ok(())
}

/// Tests that LIKE wildcards in the search text are matched literally.
///
/// Expected: Ok with only the campground containing a literal `%`
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::campground::CampgroundFactory::new(db, user.id)
        .title("100% Shade")
        .build()
        .await?;
    factory::campground::CampgroundFactory::new(db, user.id)
        .title("Full Sun")
        .build()
        .await?;

    let repo = CampgroundRepository::new(db);
    let filter = CampgroundFilter {
        terms: vec!["%".to_string()],
        ..Default::default()
    };
    let (page, total) = repo.get_paginated(&filter, 0, 20).await?;

    assert_eq!(total, 1);
    assert_eq!(page[0].title, "100% Shade");

    Ok(())
}

/// Tests inclusive price bounds.
///
/// Expected: Ok with campgrounds priced 10 and 20, excluding 5 and 30
#[tokio::test]
async fn filters_by_inclusive_price_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    for price in [5.0, 10.0, 20.0, 30.0] {
        factory::campground::CampgroundFactory::new(db, user.id)
            .price(price)
            .build()
            .await?;
    }

    let repo = CampgroundRepository::new(db);
    let filter = CampgroundFilter {
        min_price: Some(10.0),
        max_price: Some(20.0),
        ..Default::default()
    };
    let (page, total) = repo.get_paginated(&filter, 0, 20).await?;

    assert_eq!(total, 2);
    let mut prices: Vec<f64> = page.iter().map(|c| c.price).collect();
    prices.sort_by(|a, b| a.total_cmp(b));
    assert_eq!(prices, vec![10.0, 20.0]);

    Ok(())
}
