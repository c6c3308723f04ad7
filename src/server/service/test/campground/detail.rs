use super::*;

/// Tests a slug lookup with its author and first review page.
///
/// Expected: Found with author and at most five reviews, newest first
#[tokio::test]
async fn finds_by_slug_with_reviews() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = Cache::new(false);

    let (author, campground) = factory::helpers::create_campground_with_author(db).await?;
    let now = Utc::now();
    for i in 0..7 {
        factory::review::ReviewFactory::new(db, campground.id, author.id)
            .body(format!("Review {}", i))
            .created_at(now - Duration::minutes(i))
            .build()
            .await?;
    }

    let lookup = CampgroundService::new(db, &cache)
        .get_detail(campground.slug.as_deref().unwrap(), 1)
        .await?;

    let CampgroundLookup::Found(detail) = lookup else {
        panic!("Expected Found");
    };
    assert_eq!(detail.campground.id, campground.id);
    assert_eq!(detail.author.map(|a| a.id), Some(author.id));
    assert_eq!(detail.reviews.reviews.len(), 5);
    assert_eq!(detail.reviews.total, 7);
    assert_eq!(detail.reviews.total_pages, 2);
    assert_eq!(detail.reviews.reviews[0].review.body, "Review 0");

    Ok(())
}

/// Tests that a numeric id resolves to the canonical slug.
///
/// Expected: Moved with the campground
#[tokio::test]
async fn numeric_id_is_moved() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = Cache::new(false);

    let (_, campground) = factory::helpers::create_campground_with_author(db).await?;

    let lookup = CampgroundService::new(db, &cache)
        .get_detail(&campground.id.to_string(), 1)
        .await?;

    match lookup {
        CampgroundLookup::Moved(moved) => assert_eq!(Some(moved.slug), campground.slug),
        other => panic!("Expected Moved, got {:?}", other),
    }

    Ok(())
}

/// Tests unknown slugs and ids.
///
/// Expected: NotFound for both
#[tokio::test]
async fn unknown_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = Cache::new(false);

    let service = CampgroundService::new(db, &cache);

    assert!(matches!(
        service.get_detail("no-such-camp", 1).await?,
        CampgroundLookup::NotFound
    ));
    assert!(matches!(
        service.get_detail("31337", 1).await?,
        CampgroundLookup::NotFound
    ));

    Ok(())
}
