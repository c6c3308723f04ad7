use super::*;

/// Tests that reviews are returned newest first with their authors.
///
/// Expected: Ok with reviews ordered by created_at descending and total count
#[tokio::test]
async fn returns_newest_first_with_authors() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, campground) = factory::helpers::create_campground_with_author(db).await?;
    let now = Utc::now();

    for (days_ago, body) in [(3, "oldest"), (1, "newest"), (2, "middle")] {
        factory::review::ReviewFactory::new(db, campground.id, user.id)
            .body(body)
            .created_at(now - Duration::days(days_ago))
            .build()
            .await?;
    }

    let repo = ReviewRepository::new(db);
    let (reviews, total) = repo.get_page_for_campground(campground.id, 0, 5).await?;

    assert_eq!(total, 3);
    let bodies: Vec<&str> = reviews.iter().map(|r| r.review.body.as_str()).collect();
    assert_eq!(bodies, vec!["newest", "middle", "oldest"]);
    assert_eq!(
        reviews[0].author.as_ref().map(|a| a.id),
        Some(user.id)
    );

    Ok(())
}

/// Tests paging through reviews.
///
/// Verifies the second page holds the remainder and other campgrounds' reviews are
/// excluded from the count.
///
/// Expected: Ok with 2 reviews on page 1 (zero-indexed) and total 7
#[tokio::test]
async fn paginates_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, campground) = factory::helpers::create_campground_with_author(db).await?;
    let other = factory::campground::create_campground(db, user.id).await?;

    for _ in 0..7 {
        factory::review::create_review(db, campground.id, user.id).await?;
    }
    factory::review::create_review(db, other.id, user.id).await?;

    let repo = ReviewRepository::new(db);
    let (reviews, total) = repo.get_page_for_campground(campground.id, 1, 5).await?;

    assert_eq!(total, 7);
    assert_eq!(reviews.len(), 2);
    assert!(reviews.iter().all(|r| r.review.campground_id == campground.id));

    Ok(())
}
