use super::*;

/// Tests comments are returned in insertion order for the requested article only.
///
/// Expected: Ok with the article's comments ordered by ascending comment_id
#[tokio::test]
async fn returns_comments_for_article_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (topic, user, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let other = factory::create_article(db, &topic.slug, &user.username).await?;

    let first = factory::comment::CommentFactory::new(db, article.article_id, &user.username)
        .body("first")
        .build()
        .await?;
    factory::create_comment(db, other.article_id, &user.username).await?;
    let second = factory::comment::CommentFactory::new(db, article.article_id, &user.username)
        .body("second")
        .votes(-3)
        .build()
        .await?;

    let comments = CommentRepository::new(db)
        .get_by_article_id(article.article_id)
        .await?;

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].comment_id, first.comment_id);
    assert_eq!(comments[0].body, "first");
    assert_eq!(comments[1].comment_id, second.comment_id);
    assert_eq!(comments[1].votes, -3);
    assert!(comments
        .iter()
        .all(|c| c.article_id == article.article_id));

    Ok(())
}

/// Tests an article without comments.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_article_without_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let comments = CommentRepository::new(db)
        .get_by_article_id(article.article_id)
        .await?;

    assert!(comments.is_empty());

    Ok(())
}
