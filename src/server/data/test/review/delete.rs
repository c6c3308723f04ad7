use super::*;

/// Tests deleting an existing review.
///
/// Expected: Ok(true) and review removed
#[tokio::test]
async fn deletes_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, review) = factory::helpers::create_review_with_dependencies(db).await?;

    let repo = ReviewRepository::new(db);

    assert!(repo.delete(review.id).await?);
    assert!(repo.find_by_id(review.id).await?.is_none());

    Ok(())
}

/// Tests deleting a review that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);

    assert!(!repo.delete(42).await?);

    Ok(())
}
