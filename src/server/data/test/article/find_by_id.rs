use super::*;

/// Tests fetching a seeded article returns the exact row.
///
/// Expected: Ok(Some(Article)) matching the seed data
#[tokio::test]
async fn finds_existing_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    fixture::seed::seed(db).await?;

    let article = ArticleRepository::new(db)
        .find_by_id(1)
        .await?
        .expect("article 1 should exist");

    let expected = &fixture::seed::ARTICLES[0];
    assert_eq!(article.article_id, 1);
    assert_eq!(article.title, expected.title);
    assert_eq!(article.topic, expected.topic);
    assert_eq!(article.author, expected.author);
    assert_eq!(article.body, expected.body);
    assert_eq!(
        article.created_at,
        fixture::seed::timestamp(expected.created_at)?
    );
    assert_eq!(article.votes, 100);

    Ok(())
}

/// Tests querying an id outside the seeded range.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    fixture::seed::seed(db).await?;

    let article = ArticleRepository::new(db).find_by_id(9999).await?;

    assert!(article.is_none());

    Ok(())
}
