use axum::{
    extract::{Query, State},
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
use crate::services::firms::FirmInput;
use crate::validators;
use crate::AppState;

const FIRM_URL: &str = "/api/v1/master/firm";

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct FirmRequest {
    #[validate(length(min = 1, message = "This field is required."))]
    pub firm_name: String,
    #[validate(length(min = 1, message = "This field is required."))]
    pub firm_type: String,
    #[serde(default)]
    pub address_line: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    #[validate(custom = "validators::validate_pincode")]
    pub pincode: String,
    #[serde(default)]
    #[validate(custom = "validators::validate_phone")]
    pub phone: String,
    #[serde(default)]
    #[validate(custom = "validators::validate_email_opt")]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    #[validate(custom = "validators::validate_gstin")]
    pub gst_number: String,
    #[serde(default)]
    #[validate(custom = "validators::validate_pan")]
    pub pan_number: String,
    #[serde(default)]
    #[validate(custom = "validators::validate_tan")]
    pub tan_number: String,
    #[serde(default)]
    #[validate(custom = "validators::validate_cin")]
    pub cin_number: String,
    #[serde(default)]
    pub bank_name: String,
    #[serde(default)]
    pub account_holder_name: String,
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    #[validate(custom = "validators::validate_ifsc")]
    pub ifsc_code: String,
    #[serde(default)]
    pub branch_name: String,
}

impl From<FirmRequest> for FirmInput {
    fn from(payload: FirmRequest) -> Self {
        FirmInput {
            firm_name: payload.firm_name,
            firm_type: payload.firm_type,
            address_line: payload.address_line,
            city: payload.city,
            state: payload.state,
            pincode: payload.pincode,
            phone: payload.phone,
            email: payload.email,
            website: payload.website,
            gst_number: payload.gst_number,
            pan_number: payload.pan_number,
            tan_number: payload.tan_number,
            cin_number: payload.cin_number,
            bank_name: payload.bank_name,
            account_holder_name: payload.account_holder_name,
            account_number: payload.account_number,
            ifsc_code: payload.ifsc_code,
            branch_name: payload.branch_name,
        }
    }
}

/// The owner's firm profile, or 404 when none has been saved yet.
async fn get_firm(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let firm = state
        .services
        .firms
        .get_for_owner(user.id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound("No firm profile on record".to_string()))?;
    Ok(success_response(firm))
}

async fn save_firm(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
    Json(payload): Json<FirmRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let firm = state
        .services
        .firms
        .save_for_owner(user.id, payload.into())
        .await
        .map_err(map_service_error)?;

    let embed = is_embed(&headers, query.embed.as_deref(), None);
    Ok(mutation_ack(embed, FIRM_URL, Some(firm.id)))
}

async fn delete_firm(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .firms
        .delete_for_owner(user.id)
        .await
        .map_err(map_service_error)?;

    let embed = is_embed(&headers, query.embed.as_deref(), None);
    Ok(mutation_ack(embed, FIRM_URL, None))
}

pub fn firm_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(get_firm)
            .put(save_firm)
            .post(save_firm)
            .delete(delete_firm),
    )
}
