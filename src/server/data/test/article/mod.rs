use crate::server::{
    data::article::ArticleRepository,
    model::article::{ArticleSortColumn, GetArticlesParam, SortOrder},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, fixture};

mod exists;
mod find_by_id;
mod get_all_with_comment_count;
mod increment_votes;
