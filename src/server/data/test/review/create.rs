use super::*;

/// Tests creating a review for an existing campground.
///
/// Expected: Ok with review stored against campground and author
#[tokio::test]
async fn creates_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, campground) = factory::helpers::create_campground_with_author(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(CreateReviewParams {
            campground_id: campground.id,
            author_id: user.id,
            rating: 4,
            body: "Nice and quiet".to_string(),
        })
        .await?;

    assert_eq!(review.campground_id, campground.id);
    assert_eq!(review.author_id, user.id);
    assert_eq!(review.rating, 4);

    let stored = Review::find_by_id(review.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that a review cannot reference a missing campground.
///
/// Expected: Err from foreign key constraint
#[tokio::test]
async fn fails_for_missing_campground() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = ReviewRepository::new(db);
    let result = repo
        .create(CreateReviewParams {
            campground_id: 9999,
            author_id: user.id,
            rating: 3,
            body: "Where is it?".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
