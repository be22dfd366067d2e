use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, user::UserListDto},
    server::{error::AppError, service::user::UserService, state::AppState},
};

pub static USER_TAG: &str = "user";

/// GET /api/users - List every user
///
/// # Returns
/// - `200 OK`: `{ users: [...] }` ordered by username
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = UserListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    let dto = UserListDto {
        users: users.into_iter().map(|u| u.into_dto()).collect(),
    };

    Ok((StatusCode::OK, Json(dto)))
}
