use super::*;

/// Tests that only the requesting user's favorites are returned.
///
/// Expected: Ok with exactly the user's campground ids
#[tokio::test]
async fn returns_only_users_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, first) = factory::helpers::create_campground_with_author(db).await?;
    let second = factory::campground::create_campground(db, user.id).await?;
    let other = factory::user::create_user(db).await?;

    factory::user_favorite::create_favorite(db, user.id, first.id).await?;
    factory::user_favorite::create_favorite(db, user.id, second.id).await?;
    factory::user_favorite::create_favorite(db, other.id, first.id).await?;

    let repo = FavoriteRepository::new(db);
    let mut ids = repo.get_campground_ids(user.id).await?;
    ids.sort();

    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(repo.get_campground_ids(other.id).await?, vec![first.id]);

    Ok(())
}
