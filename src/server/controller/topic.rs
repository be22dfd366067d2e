use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        topic::{TopicDto, TopicListDto},
    },
    server::{error::AppError, service::topic::TopicService, state::AppState},
};

pub static TOPIC_TAG: &str = "topic";

#[utoipa::path(
    get,
    path = "/api/topics",
    tag = TOPIC_TAG,
    responses(
        (status = 200, description = "Successfully retrieved topics", body = TopicListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_topics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let topics = TopicService::new(&state.db).get_all().await?;

    let topics: Vec<TopicDto> = topics.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(TopicListDto { topics })))
}
