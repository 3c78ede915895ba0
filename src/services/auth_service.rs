use crate::{
    audit::log_audit,
    dto::auth::{AuthMode, LoginRequest, SessionView},
    error::{AppError, AppResult},
    models::{Role, User},
    response::{ApiResponse, Meta},
    services::fail_soft,
    state::AppState,
};

/// Builds the session user straight from the form. There is no credential
/// check and the role is always buyer; admins only exist in pre-seeded state.
pub fn demo_user(mode: AuthMode, payload: LoginRequest) -> AppResult<User> {
    let LoginRequest {
        name,
        email,
        password,
    } = payload;

    let email = email.trim().to_string();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::BadRequest("a valid email is required".into()));
    }
    if password.trim().is_empty() {
        return Err(AppError::BadRequest("password is required".into()));
    }

    let default_name = match mode {
        AuthMode::Login => "Pengguna",
        AuthMode::Register => "Pengguna Baru",
    };
    let name = name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| default_name.to_string());

    Ok(User {
        name,
        email,
        role: Role::Buyer,
    })
}

pub async fn login_user(
    state: &AppState,
    mode: AuthMode,
    payload: LoginRequest,
) -> AppResult<ApiResponse<User>> {
    let user = demo_user(mode, payload)?;

    let mut session = state.session().await;
    fail_soft("user", session.login(user.clone()));

    let (action, message) = match mode {
        AuthMode::Login => ("user_login", "Logged in"),
        AuthMode::Register => ("user_register", "User created"),
    };
    log_audit(Some(&user.email), action, Some("user"), None);
    tracing::debug!(email = %user.email, ?mode, "demo session started");

    Ok(ApiResponse::success(message, user, Some(Meta::empty())))
}

pub async fn logout_user(state: &AppState) -> AppResult<ApiResponse<SessionView>> {
    let mut session = state.session().await;
    let previous = session.user().map(|u| u.email.clone());
    fail_soft("user", session.logout());

    if let Some(email) = previous.as_deref() {
        log_audit(Some(email), "user_logout", Some("user"), None);
    }

    Ok(ApiResponse::success(
        "Logged out",
        SessionView { user: None },
        Some(Meta::empty()),
    ))
}

pub async fn current_user(state: &AppState) -> AppResult<ApiResponse<SessionView>> {
    let session = state.session().await;
    Ok(ApiResponse::success(
        "OK",
        SessionView {
            user: session.user().cloned(),
        },
        None,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: Option<&str>, email: &str) -> LoginRequest {
        LoginRequest {
            name: name.map(str::to_string),
            email: email.to_string(),
            password: "rahasia".to_string(),
        }
    }

    #[test]
    fn blank_names_get_mode_defaults() {
        let user = demo_user(AuthMode::Login, form(None, "a@example.com")).expect("user");
        assert_eq!(user.name, "Pengguna");
        let user = demo_user(AuthMode::Register, form(Some("  "), "a@example.com")).expect("user");
        assert_eq!(user.name, "Pengguna Baru");
        assert_eq!(user.role, Role::Buyer);
    }

    #[test]
    fn rejects_forms_the_browser_would_not_submit() {
        assert!(demo_user(AuthMode::Login, form(None, "not-an-email")).is_err());
        let mut blank_password = form(None, "a@example.com");
        blank_password.password = String::new();
        assert!(demo_user(AuthMode::Login, blank_password).is_err());
    }
}
