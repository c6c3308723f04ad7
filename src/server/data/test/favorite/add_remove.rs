use super::*;

/// Tests adding then removing a favorite.
///
/// Expected: exists true after add, false after remove
#[tokio::test]
async fn adds_and_removes_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, campground) = factory::helpers::create_campground_with_author(db).await?;

    let repo = FavoriteRepository::new(db);
    assert!(!repo.exists(user.id, campground.id).await?);

    repo.add(user.id, campground.id).await?;
    assert!(repo.exists(user.id, campground.id).await?);

    assert!(repo.remove(user.id, campground.id).await?);
    assert!(!repo.exists(user.id, campground.id).await?);

    Ok(())
}

/// Tests removing a favorite that was never added.
///
/// Expected: Ok(false)
#[tokio::test]
async fn remove_returns_false_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, campground) = factory::helpers::create_campground_with_author(db).await?;

    let repo = FavoriteRepository::new(db);

    assert!(!repo.remove(user.id, campground.id).await?);

    Ok(())
}
