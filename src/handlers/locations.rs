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
use crate::services::locations::LocationInput;
use crate::validators;
use crate::AppState;

const LIST_URL: &str = "/api/v1/master/locations";

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LocationRequest {
    #[validate(length(min = 1, message = "This field is required."))]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    #[validate(custom = "validators::validate_pincode")]
    pub pincode: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl From<LocationRequest> for LocationInput {
    fn from(payload: LocationRequest) -> Self {
        LocationInput {
            name: payload.name,
            city: payload.city,
            state: payload.state,
            address: payload.address,
            pincode: payload.pincode,
            is_active: payload.is_active,
        }
    }
}

async fn list_locations(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let locations = state
        .services
        .locations
        .list(user.id, query.q.as_deref())
        .await
        .map_err(map_service_error)?;
    Ok(success_response(locations))
}

async fn get_location(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let location = state
        .services
        .locations
        .get(user.id, id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(location))
}

async fn create_location(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
    Json(payload): Json<LocationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let location = state
        .services
        .locations
        .create(user.id, payload.into())
        .await
        .map_err(map_service_error)?;

    let embed = is_embed(&headers, query.embed.as_deref(), None);
    Ok(mutation_ack(embed, LIST_URL, Some(location.id)))
}

async fn update_location(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
    Json(payload): Json<LocationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let location = state
        .services
        .locations
        .update(user.id, id, payload.into())
        .await
        .map_err(map_service_error)?;

    let embed = is_embed(&headers, query.embed.as_deref(), None);
    Ok(mutation_ack(embed, LIST_URL, Some(location.id)))
}

async fn delete_location(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .locations
        .delete(user.id, id)
        .await
        .map_err(map_service_error)?;

    let embed = is_embed(&headers, query.embed.as_deref(), None);
    Ok(mutation_ack(embed, LIST_URL, None))
}

pub fn location_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_locations).post(create_location))
        .route(
            "/:id",
            get(get_location)
                .put(update_location)
                .post(update_location)
                .delete(delete_location),
        )
}
