use super::*;

/// Tests reading the optional session user.
///
/// Expected: Ok(None) before login and Ok(Some) after
#[tokio::test]
async fn returns_user_only_when_signed_in() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    let guard = AuthGuard::new(db, session);

    assert!(guard.current_user().await?.is_none());

    AuthSession::new(session).login(user.id).await?;

    assert_eq!(guard.current_user().await?.map(|u| u.id), Some(user.id));

    Ok(())
}
