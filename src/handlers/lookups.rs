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
use crate::services::lookups::{MaterialShadeInput, MaterialTypeInput};
use crate::AppState;

const TYPES_URL: &str = "/api/v1/utilities/material-types";
const SHADES_URL: &str = "/api/v1/utilities/material-shades";

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct MaterialTypeRequest {
    pub material_kind: Option<String>,
    #[validate(length(min = 1, message = "This field is required."))]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct MaterialShadeRequest {
    pub material_kind: Option<String>,
    #[validate(length(min = 1, message = "This field is required."))]
    pub name: String,
    pub code: Option<String>,
    pub notes: Option<String>,
}

async fn list_material_types(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let types = state
        .services
        .lookups
        .list_types(user.id, query.q.as_deref())
        .await
        .map_err(map_service_error)?;
    Ok(success_response(types))
}

async fn create_material_type(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
    Json(payload): Json<MaterialTypeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let material_type = state
        .services
        .lookups
        .create_type(
            user.id,
            MaterialTypeInput {
                material_kind: payload.material_kind,
                name: payload.name,
                description: payload.description,
            },
        )
        .await
        .map_err(map_service_error)?;

    let embed = is_embed(&headers, query.embed.as_deref(), None);
    Ok(mutation_ack(embed, TYPES_URL, Some(material_type.id)))
}

async fn update_material_type(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
    Json(payload): Json<MaterialTypeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let material_type = state
        .services
        .lookups
        .update_type(
            user.id,
            id,
            MaterialTypeInput {
                material_kind: payload.material_kind,
                name: payload.name,
                description: payload.description,
            },
        )
        .await
        .map_err(map_service_error)?;

    let embed = is_embed(&headers, query.embed.as_deref(), None);
    Ok(mutation_ack(embed, TYPES_URL, Some(material_type.id)))
}

async fn delete_material_type(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .lookups
        .delete_type(user.id, id)
        .await
        .map_err(map_service_error)?;

    let embed = is_embed(&headers, query.embed.as_deref(), None);
    Ok(mutation_ack(embed, TYPES_URL, None))
}

async fn list_material_shades(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let shades = state
        .services
        .lookups
        .list_shades(user.id, query.q.as_deref())
        .await
        .map_err(map_service_error)?;
    Ok(success_response(shades))
}

async fn create_material_shade(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
    Json(payload): Json<MaterialShadeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let shade = state
        .services
        .lookups
        .create_shade(
            user.id,
            MaterialShadeInput {
                material_kind: payload.material_kind,
                name: payload.name,
                code: payload.code,
                notes: payload.notes,
            },
        )
        .await
        .map_err(map_service_error)?;

    let embed = is_embed(&headers, query.embed.as_deref(), None);
    Ok(mutation_ack(embed, SHADES_URL, Some(shade.id)))
}

async fn update_material_shade(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
    Json(payload): Json<MaterialShadeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let shade = state
        .services
        .lookups
        .update_shade(
            user.id,
            id,
            MaterialShadeInput {
                material_kind: payload.material_kind,
                name: payload.name,
                code: payload.code,
                notes: payload.notes,
            },
        )
        .await
        .map_err(map_service_error)?;

    let embed = is_embed(&headers, query.embed.as_deref(), None);
    Ok(mutation_ack(embed, SHADES_URL, Some(shade.id)))
}

async fn delete_material_shade(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .lookups
        .delete_shade(user.id, id)
        .await
        .map_err(map_service_error)?;

    let embed = is_embed(&headers, query.embed.as_deref(), None);
    Ok(mutation_ack(embed, SHADES_URL, None))
}

pub fn material_type_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_material_types).post(create_material_type))
        .route(
            "/:id",
            axum::routing::put(update_material_type)
                .post(update_material_type)
                .delete(delete_material_type),
        )
}

pub fn material_shade_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_material_shades).post(create_material_shade))
        .route(
            "/:id",
            axum::routing::put(update_material_shade)
                .post(update_material_shade)
                .delete(delete_material_shade),
        )
}
