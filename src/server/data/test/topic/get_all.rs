use super::*;

/// Tests topics are returned ordered by slug.
///
/// Expected: Ok with every topic sorted alphabetically
#[tokio::test]
async fn returns_all_topics_ordered_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Topic)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::topic::TopicFactory::new(db).slug("paper").build().await?;
    factory::topic::TopicFactory::new(db).slug("cats").build().await?;
    factory::topic::TopicFactory::new(db)
        .slug("mitch")
        .description("The man, the Mitch, the legend")
        .build()
        .await?;

    let topics = TopicRepository::new(db).get_all().await?;

    let slugs: Vec<_> = topics.iter().map(|t| t.slug.as_str()).collect();
    assert_eq!(slugs, vec!["cats", "mitch", "paper"]);
    assert_eq!(topics[1].description, "The man, the Mitch, the legend");

    Ok(())
}

/// Tests listing an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_topics() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Topic)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let topics = TopicRepository::new(db).get_all().await?;

    assert!(topics.is_empty());

    Ok(())
}
