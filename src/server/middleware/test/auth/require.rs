use super::*;

/// Tests that a signed in user passes an empty permission list.
///
/// Expected: Ok(User) matching the session user
#[tokio::test]
async fn grants_access_to_signed_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("ranger")
        .build()
        .await?;
    AuthSession::new(session).login(user.id).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(result.is_ok());
    let returned = result.unwrap();
    assert_eq!(returned.id, user.id);
    assert_eq!(returned.username, "ranger");

    Ok(())
}

/// Tests that an anonymous request fails and saves the requested URL.
///
/// Expected: Err(AuthError::UserNotInSession) with the return URL stored
#[tokio::test]
async fn rejects_anonymous_and_saves_return_url() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session)
        .with_return_to("/outdoorsy/campgrounds/new")
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
    assert_eq!(
        ReturnToSession::new(session).take().await?,
        Some("/outdoorsy/campgrounds/new".to_string())
    );

    Ok(())
}

/// Tests that a session pointing at a deleted account is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_user_missing_from_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).login(404).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}
