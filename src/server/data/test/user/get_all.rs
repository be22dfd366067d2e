use super::*;

/// Tests users are ordered alphabetically by username.
///
/// Verifies that the repository returns users sorted by username in ascending
/// order regardless of creation order.
///
/// Expected: Ok with users sorted by username
#[tokio::test]
async fn orders_users_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("rogersop")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("butter_bridge")
        .name("jonny")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("lurker")
        .build()
        .await?;

    let users = UserRepository::new(db).get_all().await?;

    assert_eq!(users.len(), 3);
    assert_eq!(users[0].username, "butter_bridge");
    assert_eq!(users[0].name, "jonny");
    assert_eq!(users[1].username, "lurker");
    assert_eq!(users[2].username, "rogersop");

    Ok(())
}

/// Tests listing with no users.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserRepository::new(db).get_all().await?;

    assert!(users.is_empty());

    Ok(())
}
