use super::*;

/// Tests that results follow the order of the requested ids and skip unknown ids.
///
/// Expected: Ok with campgrounds in requested order
#[tokio::test]
async fn preserves_requested_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, first) = factory::helpers::create_campground_with_author(db).await?;
    let second = factory::campground::create_campground(db, user.id).await?;

    let repo = CampgroundRepository::new(db);
    let found = repo.get_by_ids(&[second.id, 9999, first.id]).await?;

    let ids: Vec<i32> = found.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    assert!(repo.get_by_ids(&[]).await?.is_empty());

    Ok(())
}
