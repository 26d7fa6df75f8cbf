use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::common::{
    is_embed, map_service_error, mutation_ack, success_response, validate_input, SearchQuery,
};
use crate::auth::AuthenticatedUser;
use crate::errors::ApiError;
use crate::services::jobbers::JobberInput;
use crate::validators;
use crate::AppState;

const LIST_URL: &str = "/api/v1/master/jobbers";
const TYPES_URL: &str = "/api/v1/master/jobber-types";

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct JobberRequest {
    #[validate(length(min = 1, message = "This field is required."))]
    pub name: String,
    #[validate(custom = "validators::validate_phone")]
    pub phone: Option<String>,
    #[validate(custom = "validators::validate_email_opt")]
    pub email: Option<String>,
    pub role: Option<String>,
    pub jobber_type_id: Option<i64>,
    pub address: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct JobberTypeRequest {
    #[validate(length(min = 1, message = "This field is required."))]
    pub name: String,
}

impl From<JobberRequest> for JobberInput {
    fn from(payload: JobberRequest) -> Self {
        JobberInput {
            name: payload.name,
            phone: payload.phone,
            email: payload.email,
            role: payload.role,
            jobber_type_id: payload.jobber_type_id,
            address: payload.address,
            is_active: payload.is_active,
        }
    }
}

async fn list_jobbers(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let jobbers = state
        .services
        .jobbers
        .list(user.id, query.q.as_deref())
        .await
        .map_err(map_service_error)?;
    Ok(success_response(jobbers))
}

async fn get_jobber(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let jobber = state
        .services
        .jobbers
        .get(user.id, id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(jobber))
}

async fn create_jobber(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
    Json(payload): Json<JobberRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let jobber = state
        .services
        .jobbers
        .create(user.id, payload.into())
        .await
        .map_err(map_service_error)?;

    let embed = is_embed(&headers, query.embed.as_deref(), None);
    Ok(mutation_ack(embed, LIST_URL, Some(jobber.id)))
}

async fn update_jobber(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
    Json(payload): Json<JobberRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let jobber = state
        .services
        .jobbers
        .update(user.id, id, payload.into())
        .await
        .map_err(map_service_error)?;

    let embed = is_embed(&headers, query.embed.as_deref(), None);
    Ok(mutation_ack(embed, LIST_URL, Some(jobber.id)))
}

async fn delete_jobber(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .jobbers
        .delete(user.id, id)
        .await
        .map_err(map_service_error)?;

    let embed = is_embed(&headers, query.embed.as_deref(), None);
    Ok(mutation_ack(embed, LIST_URL, None))
}

async fn list_jobber_types(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let types = state
        .services
        .jobbers
        .list_types(user.id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(types))
}

async fn create_jobber_type(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
    Json(payload): Json<JobberTypeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let jobber_type = state
        .services
        .jobbers
        .create_type(user.id, &payload.name)
        .await
        .map_err(map_service_error)?;

    let embed = is_embed(&headers, query.embed.as_deref(), None);
    Ok(mutation_ack(embed, TYPES_URL, Some(jobber_type.id)))
}

async fn update_jobber_type(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
    Json(payload): Json<JobberTypeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let jobber_type = state
        .services
        .jobbers
        .update_type(user.id, id, &payload.name)
        .await
        .map_err(map_service_error)?;

    let embed = is_embed(&headers, query.embed.as_deref(), None);
    Ok(mutation_ack(embed, TYPES_URL, Some(jobber_type.id)))
}

async fn delete_jobber_type(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .jobbers
        .delete_type(user.id, id)
        .await
        .map_err(map_service_error)?;

    let embed = is_embed(&headers, query.embed.as_deref(), None);
    Ok(mutation_ack(embed, TYPES_URL, None))
}

pub fn jobber_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_jobbers).post(create_jobber))
        .route(
            "/:id",
            get(get_jobber)
                .put(update_jobber)
                .post(update_jobber)
                .delete(delete_jobber),
        )
}

pub fn jobber_type_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_jobber_types).post(create_jobber_type))
        .route(
            "/:id",
            axum::routing::put(update_jobber_type)
                .post(update_jobber_type)
                .delete(delete_jobber_type),
        )
}
