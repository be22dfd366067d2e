use super::*;

/// Tests positive, negative, and zero deltas.
///
/// Each delta is applied on top of the previous result so the final count
/// proves no increment was lost or applied twice.
///
/// Expected: Ok(Some(Article)) with votes changed by exactly the delta
#[tokio::test]
async fn applies_signed_deltas() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    fixture::seed::seed(db).await?;

    let repo = ArticleRepository::new(db);

    let article = repo.increment_votes(1, 5).await?.unwrap();
    assert_eq!(article.votes, 105);

    let article = repo.increment_votes(1, -110).await?.unwrap();
    assert_eq!(article.votes, -5);

    let article = repo.increment_votes(1, 0).await?.unwrap();
    assert_eq!(article.votes, -5);

    let stored = repo.find_by_id(1).await?.unwrap();
    assert_eq!(stored.votes, -5);

    Ok(())
}

/// Tests that only the targeted article changes.
///
/// Expected: Other articles keep their vote counts
#[tokio::test]
async fn leaves_other_articles_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    fixture::seed::seed(db).await?;

    let repo = ArticleRepository::new(db);
    repo.increment_votes(2, 7).await?;

    assert_eq!(repo.find_by_id(1).await?.unwrap().votes, 100);
    assert_eq!(repo.find_by_id(2).await?.unwrap().votes, 7);

    Ok(())
}

/// Tests updating an id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    fixture::seed::seed(db).await?;

    let article = ArticleRepository::new(db).increment_votes(9999, 1).await?;

    assert!(article.is_none());

    Ok(())
}

/// Tests a delta that would push the count past `i32::MAX`.
///
/// Expected: Ok(None) with the stored vote count unchanged
#[tokio::test]
async fn skips_update_when_count_would_overflow() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    fixture::seed::seed(db).await?;

    let repo = ArticleRepository::new(db);

    assert!(repo.increment_votes(1, i32::MAX).await?.is_none());
    assert_eq!(repo.find_by_id(1).await?.unwrap().votes, 100);

    // Exactly reaching the bounds is allowed.
    let article = repo.increment_votes(1, i32::MAX - 100).await?.unwrap();
    assert_eq!(article.votes, i32::MAX);

    let article = repo.increment_votes(2, i32::MIN).await?.unwrap();
    assert_eq!(article.votes, i32::MIN);
    assert!(repo.increment_votes(2, -1).await?.is_none());

    Ok(())
}

/// Tests increments issued concurrently from separate tasks.
///
/// Expected: Every increment lands exactly once
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_increments_are_not_lost() -> Result<(), DbErr> {
    const TASKS: i32 = 50;

    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    fixture::seed::seed(db).await?;

    let handles: Vec<_> = (0..TASKS)
        .map(|_| {
            let db = db.clone();
            tokio::spawn(async move { ArticleRepository::new(&db).increment_votes(1, 1).await })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap()?.is_some());
    }

    let article = ArticleRepository::new(db).find_by_id(1).await?.unwrap();
    assert_eq!(article.votes, 100 + TASKS);

    Ok(())
}
