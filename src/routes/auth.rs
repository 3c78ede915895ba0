use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::auth::{AuthMode, LoginRequest, SessionView},
    error::AppResult,
    models::User,
    response::ApiResponse,
    services::auth_service::{current_user, login_user, logout_user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Register a demo user", body = ApiResponse<User>),
        (status = 400, description = "Invalid form")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = login_user(&state, AuthMode::Register, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Log in a demo user", body = ApiResponse<User>),
        (status = 400, description = "Invalid form")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = login_user(&state, AuthMode::Login, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "End the session", body = ApiResponse<SessionView>)
    ),
    tag = "Auth"
)]
pub async fn logout(State(state): State<AppState>) -> AppResult<Json<ApiResponse<SessionView>>> {
    let resp = logout_user(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current session user, if any", body = ApiResponse<SessionView>)
    ),
    tag = "Auth"
)]
pub async fn me(State(state): State<AppState>) -> AppResult<Json<ApiResponse<SessionView>>> {
    let resp = current_user(&state).await?;
    Ok(Json(resp))
}
