use super::*;

/// Tests finding an existing user by email.
///
/// Expected: Ok(Some) with matching user
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("ranger@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("ranger@example.com").await?;

    assert_eq!(found.map(|u| u.id), Some(created.id));
    assert!(repo.email_exists("ranger@example.com").await?);

    Ok(())
}

/// Tests lookup of an unknown email.
///
/// Expected: Ok(None) and email_exists false
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_email("nobody@example.com").await?.is_none());
    assert!(!repo.email_exists("nobody@example.com").await?);

    Ok(())
}
