use super::*;

/// Tests default listing order and derived comment counts.
///
/// Verifies every seeded article is returned newest first and that each
/// comment_count equals the number of seeded comments, including zero.
///
/// Expected: Ok with all articles sorted by created_at descending
#[tokio::test]
async fn lists_all_articles_newest_first_with_comment_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    fixture::seed::seed(db).await?;

    let articles = ArticleRepository::new(db)
        .get_all_with_comment_count(&GetArticlesParam::default())
        .await?;

    assert_eq!(articles.len(), fixture::seed::ARTICLES.len());

    let ids: Vec<i32> = articles.iter().map(|a| a.article.article_id).collect();
    assert_eq!(ids, vec![3, 2, 5, 1, 4]);

    for item in &articles {
        assert_eq!(
            item.comment_count as usize,
            fixture::seed::comment_count(item.article.article_id),
            "comment_count mismatch for article {}",
            item.article.article_id
        );
    }

    Ok(())
}

/// Tests filtering by topic slug.
///
/// Expected: Ok with only the matching topic's articles
#[tokio::test]
async fn filters_by_topic() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    fixture::seed::seed(db).await?;

    let repo = ArticleRepository::new(db);

    let cats = repo
        .get_all_with_comment_count(&GetArticlesParam {
            topic: Some("cats".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(cats.len(), 1);
    assert_eq!(cats[0].article.topic, "cats");
    assert_eq!(cats[0].comment_count, 1);

    let paper = repo
        .get_all_with_comment_count(&GetArticlesParam {
            topic: Some("paper".to_string()),
            ..Default::default()
        })
        .await?;
    assert!(paper.is_empty());

    Ok(())
}

/// Tests sorting by the derived comment count.
///
/// Ties on comment_count fall back to ascending article_id.
///
/// Expected: Ok with articles ordered by comment_count descending
#[tokio::test]
async fn sorts_by_comment_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    fixture::seed::seed(db).await?;

    let articles = ArticleRepository::new(db)
        .get_all_with_comment_count(&GetArticlesParam {
            topic: None,
            sort_by: ArticleSortColumn::CommentCount,
            order: SortOrder::Desc,
        })
        .await?;

    let ids: Vec<i32> = articles.iter().map(|a| a.article.article_id).collect();
    assert_eq!(ids, vec![1, 3, 5, 2, 4]);

    Ok(())
}

/// Tests ascending sort on a regular column.
///
/// Expected: Ok with articles ordered by votes ascending, ties by article_id
#[tokio::test]
async fn sorts_by_votes_ascending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    fixture::seed::seed(db).await?;

    let articles = ArticleRepository::new(db)
        .get_all_with_comment_count(&GetArticlesParam {
            topic: None,
            sort_by: ArticleSortColumn::Votes,
            order: SortOrder::Asc,
        })
        .await?;

    let ids: Vec<i32> = articles.iter().map(|a| a.article.article_id).collect();
    assert_eq!(ids, vec![2, 3, 4, 5, 1]);

    Ok(())
}

/// Tests listing with no articles.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_articles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let articles = ArticleRepository::new(db)
        .get_all_with_comment_count(&GetArticlesParam::default())
        .await?;

    assert!(articles.is_empty());

    Ok(())
}
