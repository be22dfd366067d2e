use crate::server::data::comment::CommentRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_article_id;
