use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::common::{map_service_error, success_response, validate_input, SearchQuery};
use crate::auth::AuthenticatedUser;
use crate::errors::ApiError;
use crate::services::accounts::ProfileUpdate;
use crate::validators;
use crate::AppState;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ProfileRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[validate(custom = "validators::validate_phone")]
    pub phone: Option<String>,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub address: Option<String>,
}

async fn get_profile(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let profile = state
        .services
        .accounts
        .get(user.id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(profile))
}

async fn save_profile(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<ProfileRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let profile = state
        .services
        .accounts
        .save_profile(
            user.id,
            ProfileUpdate {
                first_name: payload.first_name,
                last_name: payload.last_name,
                email: payload.email,
                phone: payload.phone,
                designation: payload.designation,
                department: payload.department,
                address: payload.address,
            },
        )
        .await
        .map_err(map_service_error)?;

    Ok(success_response(profile))
}

async fn list_users(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let users = state
        .services
        .accounts
        .list(query.q.as_deref())
        .await
        .map_err(map_service_error)?;
    Ok(success_response(users))
}

async fn user_stats(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let stats = state
        .services
        .accounts
        .stats()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(stats))
}

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/", get(get_profile).put(save_profile))
}

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/stats", get(user_stats))
}
