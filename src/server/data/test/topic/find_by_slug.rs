use super::*;

#[tokio::test]
async fn finds_existing_topic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Topic)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::topic::TopicFactory::new(db)
        .slug("cats")
        .description("Not dogs")
        .build()
        .await?;

    let topic = TopicRepository::new(db).find_by_slug("cats").await?;

    let topic = topic.expect("topic should exist");
    assert_eq!(topic.slug, "cats");
    assert_eq!(topic.description, "Not dogs");

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Topic)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_topic(db).await?;

    let topic = TopicRepository::new(db).find_by_slug("dogs").await?;

    assert!(topic.is_none());

    Ok(())
}
