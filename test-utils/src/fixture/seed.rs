//! Deterministic seed dataset mirroring the data a deployed instance is loaded with.
//!
//! Inserted into a fresh database, articles receive ids `1..=ARTICLES.len()` in the
//! order they are listed and comments receive ids `1..=COMMENTS.len()`.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct SeedTopic {
    pub slug: &'static str,
    pub description: &'static str,
}

pub struct SeedUser {
    pub username: &'static str,
    pub name: &'static str,
    pub avatar_url: &'static str,
}

pub struct SeedArticle {
    pub title: &'static str,
    pub topic: &'static str,
    pub author: &'static str,
    pub body: &'static str,
    pub created_at: &'static str,
    pub votes: i32,
}

pub struct SeedComment {
    pub article_id: i32,
    pub author: &'static str,
    pub body: &'static str,
    pub votes: i32,
    pub created_at: &'static str,
}

pub const TOPICS: &[SeedTopic] = &[
    SeedTopic {
        slug: "mitch",
        description: "The man, the Mitch, the legend",
    },
    SeedTopic {
        slug: "cats",
        description: "Not dogs",
    },
    SeedTopic {
        slug: "paper",
        description: "what books are made of",
    },
];

pub const USERS: &[SeedUser] = &[
    SeedUser {
        username: "butter_bridge",
        name: "jonny",
        avatar_url: "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg",
    },
    SeedUser {
        username: "icellusedkars",
        name: "sam",
        avatar_url: "https://avatars2.githubusercontent.com/u/24604688?s=460&v=4",
    },
    SeedUser {
        username: "rogersop",
        name: "paul",
        avatar_url: "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4",
    },
    SeedUser {
        username: "lurker",
        name: "do_nothing",
        avatar_url: "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png",
    },
];

pub const ARTICLES: &[SeedArticle] = &[
    SeedArticle {
        title: "Living in the shadow of a great man",
        topic: "mitch",
        author: "butter_bridge",
        body: "I find this existence challenging",
        created_at: "2020-07-09T20:11:00Z",
        votes: 100,
    },
    SeedArticle {
        title: "Sony Vaio; or, The Laptop",
        topic: "mitch",
        author: "icellusedkars",
        body: "Call me Mitchell. Some years ago I thought I would buy a laptop.",
        created_at: "2020-10-16T05:03:00Z",
        votes: 0,
    },
    SeedArticle {
        title: "Eight pug gifs that remind me of mitch",
        topic: "mitch",
        author: "icellusedkars",
        body: "some gifs",
        created_at: "2020-11-03T09:12:00Z",
        votes: 0,
    },
    SeedArticle {
        title: "Student SUES Mitch!",
        topic: "mitch",
        author: "rogersop",
        body: "We all love Mitch and his wonderful, unique typing style.",
        created_at: "2020-05-06T01:14:00Z",
        votes: 0,
    },
    SeedArticle {
        title: "UNCOVERED: catspiracy to bring down democracy",
        topic: "cats",
        author: "rogersop",
        body: "Bastet walks amongst us, and the cats are taking arms!",
        created_at: "2020-08-03T13:14:00Z",
        votes: 0,
    },
];

pub const COMMENTS: &[SeedComment] = &[
    SeedComment {
        article_id: 1,
        author: "butter_bridge",
        body: "Oh, I've got compassion running out of my nose, pal!",
        votes: 16,
        created_at: "2020-04-06T12:17:00Z",
    },
    SeedComment {
        article_id: 1,
        author: "icellusedkars",
        body: "Replacing the quiet elegance of the dark suit and tie with the casual indifference of these muted earth tones is a form of fashion suicide.",
        votes: 14,
        created_at: "2020-10-31T03:03:00Z",
    },
    SeedComment {
        article_id: 3,
        author: "icellusedkars",
        body: "git push origin master",
        votes: 0,
        created_at: "2020-06-20T07:24:00Z",
    },
    SeedComment {
        article_id: 1,
        author: "icellusedkars",
        body: " I carry a log, yes. Is it funny to you? It is not to me.",
        votes: -100,
        created_at: "2020-02-23T12:01:00Z",
    },
    SeedComment {
        article_id: 3,
        author: "butter_bridge",
        body: "Ambidextrous marsupial",
        votes: 0,
        created_at: "2020-09-19T23:10:00Z",
    },
    SeedComment {
        article_id: 5,
        author: "rogersop",
        body: "What do you see? I have no idea where this will lead us.",
        votes: 16,
        created_at: "2020-06-09T05:00:00Z",
    },
];

/// Number of seeded comments referencing `article_id`.
pub fn comment_count(article_id: i32) -> usize {
    COMMENTS
        .iter()
        .filter(|c| c.article_id == article_id)
        .count()
}

/// Parses a seed timestamp, surfacing malformed literals as a database error.
pub fn timestamp(value: &str) -> Result<DateTime<Utc>, DbErr> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DbErr::Custom(format!("Invalid seed timestamp '{}': {}", value, e)))
}

/// Inserts the full seed dataset in dependency order.
///
/// Expects the news tables to exist and be empty.
///
/// # Returns
/// - `Ok(())` - Every topic, user, article, and comment inserted
/// - `Err(DbErr)` - Database error during insert
pub async fn seed(db: &DatabaseConnection) -> Result<(), DbErr> {
    for topic in TOPICS {
        entity::topic::ActiveModel {
            slug: ActiveValue::Set(topic.slug.to_string()),
            description: ActiveValue::Set(topic.description.to_string()),
        }
        .insert(db)
        .await?;
    }

    for user in USERS {
        entity::user::ActiveModel {
            username: ActiveValue::Set(user.username.to_string()),
            name: ActiveValue::Set(user.name.to_string()),
            avatar_url: ActiveValue::Set(user.avatar_url.to_string()),
        }
        .insert(db)
        .await?;
    }

    for article in ARTICLES {
        entity::article::ActiveModel {
            title: ActiveValue::Set(article.title.to_string()),
            topic: ActiveValue::Set(article.topic.to_string()),
            author: ActiveValue::Set(article.author.to_string()),
            body: ActiveValue::Set(article.body.to_string()),
            created_at: ActiveValue::Set(timestamp(article.created_at)?),
            votes: ActiveValue::Set(article.votes),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    for comment in COMMENTS {
        entity::comment::ActiveModel {
            article_id: ActiveValue::Set(comment.article_id),
            author: ActiveValue::Set(comment.author.to_string()),
            body: ActiveValue::Set(comment.body.to_string()),
            votes: ActiveValue::Set(comment.votes),
            created_at: ActiveValue::Set(timestamp(comment.created_at)?),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(())
}
