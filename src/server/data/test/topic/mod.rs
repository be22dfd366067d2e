use crate::server::data::topic::TopicRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_slug;
mod get_all;
