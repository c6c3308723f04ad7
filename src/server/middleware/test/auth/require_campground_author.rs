use super::*;

/// Tests that the campground author passes the ownership check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_author() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (author, campground) = factory::helpers::create_campground_with_author(db).await?;
    AuthSession::new(session).login(author.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::CampgroundAuthor(campground.id)])
        .await;

    assert_eq!(result.unwrap().id, author.id);

    Ok(())
}

/// Tests that another user is denied.
///
/// Expected: Err(AuthError::AccessDenied) naming the user
#[tokio::test]
async fn denies_other_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, campground) = factory::helpers::create_campground_with_author(db).await?;
    let other = factory::user::create_user(db).await?;
    AuthSession::new(session).login(other.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::CampgroundAuthor(campground.id)])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, other.id);
            assert!(message.contains("campground"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests that a missing campground is reported before ownership.
///
/// Expected: Err(AppError::NotFound("Campground not found"))
#[tokio::test]
async fn reports_missing_campground() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).login(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::CampgroundAuthor(999)])
        .await;

    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, "Campground not found"),
        other => panic!("Expected NotFound, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}
