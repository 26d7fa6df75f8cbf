use axum::{
    extract::State,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

use super::common::{created_response, map_service_error, success_response, validate_input};
use crate::entities::users;
use crate::errors::ApiError;
use crate::services::accounts::Signup;
use crate::AppState;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "This field is required."))]
    pub username: String,
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters."))]
    pub password: String,
    pub password2: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Username or email address
    #[validate(length(min = 1, message = "This field is required."))]
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
    pub token_type: &'static str,
    pub expires_in: u64,
    pub user: users::Model,
}

async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let user = state
        .services
        .accounts
        .signup(Signup {
            username: payload.username,
            email: payload.email,
            password: payload.password,
            password2: payload.password2,
        })
        .await
        .map_err(map_service_error)?;

    let (token, expires_in) = state
        .auth
        .issue_token(&user, false)
        .map_err(map_service_error)?;

    info!(user_id = %user.id, "signup complete");

    Ok(created_response(TokenResponse {
        token,
        token_type: "Bearer",
        expires_in,
        user,
    }))
}

async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let user = state
        .services
        .accounts
        .login(&payload.username, &payload.password)
        .await
        .map_err(map_service_error)?;

    let (token, expires_in) = state
        .auth
        .issue_token(&user, payload.remember_me)
        .map_err(map_service_error)?;

    Ok(success_response(TokenResponse {
        token,
        token_type: "Bearer",
        expires_in,
        user,
    }))
}

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}
