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
use crate::services::parties::PartyInput;
use crate::validators;
use crate::AppState;

const LIST_URL: &str = "/api/v1/master/parties";

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PartyRequest {
    #[validate(length(min = 1, message = "This field is required."))]
    pub party_name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    #[validate(custom = "validators::validate_pan")]
    pub pan_number: String,
    #[serde(default)]
    #[validate(custom = "validators::validate_gstin")]
    pub gst_number: String,
    #[serde(default)]
    #[validate(custom = "validators::validate_tan")]
    pub tan_number: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    #[validate(custom = "validators::validate_phone")]
    pub phone_number: String,
    #[serde(default)]
    #[validate(custom = "validators::validate_email_opt")]
    pub email: String,
}

impl From<PartyRequest> for PartyInput {
    fn from(payload: PartyRequest) -> Self {
        PartyInput {
            party_name: payload.party_name,
            full_name: payload.full_name,
            address: payload.address,
            pan_number: payload.pan_number,
            gst_number: payload.gst_number,
            tan_number: payload.tan_number,
            state: payload.state,
            phone_number: payload.phone_number,
            email: payload.email,
        }
    }
}

async fn list_parties(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let parties = state
        .services
        .parties
        .list(query.q.as_deref())
        .await
        .map_err(map_service_error)?;
    Ok(success_response(parties))
}

async fn get_party(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let party = state
        .services
        .parties
        .get(id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(party))
}

async fn create_party(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
    Json(payload): Json<PartyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let party = state
        .services
        .parties
        .create(payload.into())
        .await
        .map_err(map_service_error)?;

    let embed = is_embed(&headers, query.embed.as_deref(), None);
    Ok(mutation_ack(embed, LIST_URL, Some(party.id)))
}

async fn update_party(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
    Json(payload): Json<PartyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let party = state
        .services
        .parties
        .update(id, payload.into())
        .await
        .map_err(map_service_error)?;

    let embed = is_embed(&headers, query.embed.as_deref(), None);
    Ok(mutation_ack(embed, LIST_URL, Some(party.id)))
}

async fn delete_party(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .parties
        .delete(id)
        .await
        .map_err(map_service_error)?;

    let embed = is_embed(&headers, query.embed.as_deref(), None);
    Ok(mutation_ack(embed, LIST_URL, None))
}

pub fn party_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_parties).post(create_party))
        .route(
            "/:id",
            get(get_party)
                .put(update_party)
                .post(update_party)
                .delete(delete_party),
        )
}
