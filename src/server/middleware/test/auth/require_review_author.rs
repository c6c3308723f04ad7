use super::*;

/// Tests that the review author passes the ownership check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_review_author() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (author, campground, review) =
        factory::helpers::create_review_with_dependencies(db).await?;
    AuthSession::new(session).login(author.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::ReviewAuthor {
            campground_id: campground.id,
            review_id: review.id,
        }])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a review attached to a different campground is treated as missing.
///
/// Expected: Err(AppError::NotFound("Review not found"))
#[tokio::test]
async fn reports_review_from_other_campground_as_missing() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (author, _, review) = factory::helpers::create_review_with_dependencies(db).await?;
    let other_campground = factory::campground::create_campground(db, author.id).await?;
    AuthSession::new(session).login(author.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::ReviewAuthor {
            campground_id: other_campground.id,
            review_id: review.id,
        }])
        .await;

    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, "Review not found"),
        other => panic!("Expected NotFound, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests that a user cannot act on someone else's review.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_other_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, campground, review) = factory::helpers::create_review_with_dependencies(db).await?;
    let other = factory::user::create_user(db).await?;
    AuthSession::new(session).login(other.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::ReviewAuthor {
            campground_id: campground.id,
            review_id: review.id,
        }])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
