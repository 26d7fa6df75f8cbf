use axum::{
    extract::{Multipart, Path, Query, State},
    http::HeaderMap,
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;

use super::common::{is_embed, map_service_error, mutation_ack, success_response};
use crate::auth::AuthenticatedUser;
use crate::errors::ApiError;
use crate::models::material::MaterialSubmission;
use crate::services::materials::{ImageUpload, MaterialFilter};
use crate::AppState;

const LIST_URL: &str = "/api/v1/master/materials";

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct MaterialListQuery {
    pub q: Option<String>,
    /// Material-type id to filter by
    #[serde(rename = "type")]
    pub type_id: Option<String>,
    #[serde(default)]
    pub embed: Option<String>,
}

/// Multipart material form: the kind discriminator, common and
/// kind-specific text fields, plus an optional `image` file part and the
/// `embed` flag.
struct MaterialForm {
    submission: MaterialSubmission,
    image: Option<ImageUpload>,
    embed: bool,
}

async fn parse_material_form(mut multipart: Multipart) -> Result<MaterialForm, ApiError> {
    let mut submission = MaterialSubmission::default();
    let mut image = None;
    let mut embed = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == "image" {
            let file_name = field.file_name().map(ToString::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("unreadable image upload: {e}")))?;
            // Browsers submit an empty file part when nothing was chosen.
            if let Some(file_name) = file_name.filter(|_| !bytes.is_empty()) {
                image = Some(ImageUpload {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            }
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| ApiError::BadRequest(format!("unreadable form field {name}: {e}")))?;

        match name.as_str() {
            "kind" => submission.kind = Some(value),
            "name" => submission.name = Some(value),
            "remarks" => submission.remarks = Some(value),
            "material_type_id" => submission.material_type_id = Some(value),
            "material_shade_id" => submission.material_shade_id = Some(value),
            "yarn_type" => submission.yarn_type = Some(value),
            "yarn_subtype" => submission.yarn_subtype = Some(value),
            "count_denier" => submission.count_denier = Some(value),
            "yarn_color" => submission.yarn_color = Some(value),
            "fabric_type" => submission.fabric_type = Some(value),
            "gsm" => submission.gsm = Some(value),
            "width" => submission.width = Some(value),
            "construction" => submission.construction = Some(value),
            "base_fabric_type" => submission.base_fabric_type = Some(value),
            "finish_type" => submission.finish_type = Some(value),
            "end_use" => submission.end_use = Some(value),
            "trim_type" => submission.trim_type = Some(value),
            "size" => submission.size = Some(value),
            "trim_color" => submission.trim_color = Some(value),
            "brand" => submission.brand = Some(value),
            "embed" => embed = value == "1",
            // Unknown fields are ignored, matching lenient form handling.
            _ => {}
        }
    }

    Ok(MaterialForm {
        submission,
        image,
        embed,
    })
}

async fn list_materials(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(query): Query<MaterialListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    // Non-numeric type values are ignored rather than rejected.
    let type_id = query
        .type_id
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .and_then(|t| t.parse::<i64>().ok());

    let records = state
        .services
        .materials
        .list(MaterialFilter {
            q: query.q.clone(),
            type_id,
        })
        .await
        .map_err(map_service_error)?;

    Ok(success_response(records))
}

async fn get_material(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state
        .services
        .materials
        .get(id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(record))
}

async fn create_material(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    headers: HeaderMap,
    Query(query): Query<MaterialListQuery>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = parse_material_form(multipart).await?;
    let embed = form.embed || is_embed(&headers, query.embed.as_deref(), None);

    let record = state
        .services
        .materials
        .create(user.id, form.submission, form.image)
        .await
        .map_err(map_service_error)?;

    Ok(mutation_ack(embed, LIST_URL, Some(record.id)))
}

async fn update_material(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Query(query): Query<MaterialListQuery>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = parse_material_form(multipart).await?;
    let embed = form.embed || is_embed(&headers, query.embed.as_deref(), None);

    let record = state
        .services
        .materials
        .update(user.id, id, form.submission, form.image)
        .await
        .map_err(map_service_error)?;

    Ok(mutation_ack(embed, LIST_URL, Some(record.id)))
}

async fn delete_material(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Query(query): Query<MaterialListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .materials
        .delete(id)
        .await
        .map_err(map_service_error)?;

    let embed = is_embed(&headers, query.embed.as_deref(), None);
    Ok(mutation_ack(embed, LIST_URL, None))
}

pub fn material_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_materials).post(create_material))
        .route(
            "/:id",
            get(get_material)
                .put(update_material)
                .post(update_material)
                .delete(delete_material),
        )
}
