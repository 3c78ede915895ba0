use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::profile::ProfileView,
    error::AppResult,
    response::ApiResponse,
    services::profile_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(profile))
}

#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "My listings and my orders", body = ApiResponse<ProfileView>),
        (status = 401, description = "Login required"),
    ),
    tag = "Profile"
)]
pub async fn profile(State(state): State<AppState>) -> AppResult<Json<ApiResponse<ProfileView>>> {
    let resp = profile_service::get_profile(&state).await?;
    Ok(Json(resp))
}
